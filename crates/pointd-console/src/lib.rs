//! Colored console output for engine and scoring events.
//!
//! Provides a custom `tracing` layer that formats Point'd events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Scorecards produced by a session
//! - **DEBUG**: Individual evaluations and band lookups
//! - **TRACE**: Tokenizer output
//! - **WARN**: Player-facing warnings

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use tracing_subscriber::filter::LevelFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output with the default `pointd=info` filter.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default directive.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Initializes console output, showing Point'd events up to `level`.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        let directive: Directive = format!("pointd={}", level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PointdConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats Point'd events with colors.
pub struct PointdConsoleLayer;

impl<S: Subscriber> Layer<S> for PointdConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("pointd") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    expression: Option<String>,
    input: Option<String>,
    result: Option<f64>,
    margin: Option<f64>,
    winner: Option<String>,
    band: Option<String>,
    token_count: Option<u64>,
    points_a: Option<u64>,
    points_b: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s.trim_matches('"').to_string()),
            "winner" => self.winner = Some(s),
            "band" => self.band = Some(s),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "result" => self.result = Some(value),
            "margin" => self.margin = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "token_count" => self.token_count = Some(value),
            "points_a" => self.points_a = Some(value),
            "points_b" => self.points_b = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "expression" => self.expression = Some(value.to_string()),
            "input" => self.input = Some(value.to_string()),
            "winner" => self.winner = Some(value.to_string()),
            "band" => self.band = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "evaluate" => format_evaluate(v),
        "tokenize" => format_tokenize(v),
        "score" => format_score(v),
        "scorecard" => format_scorecard(v),
        "warning" => format_warning(v),
        _ if level == Level::ERROR => format_error(v),
        _ => String::new(),
    }
}

fn format_evaluate(v: &EventVisitor) -> String {
    let expression = v.expression.as_deref().unwrap_or("?");
    let result = v.result.map_or_else(|| "?".to_string(), |r| r.to_string());

    format!(
        "{} {} = {}",
        "ƒ".bright_blue(),
        expression.white(),
        result.bright_yellow().bold()
    )
}

fn format_tokenize(v: &EventVisitor) -> String {
    format!(
        "{} {:?} │ {} tokens",
        "·".bright_black(),
        v.input.as_deref().unwrap_or(""),
        v.token_count.unwrap_or(0)
    )
}

fn format_score(v: &EventVisitor) -> String {
    format!(
        "{} winner {} │ margin {} │ band {}",
        "▶".bright_green(),
        v.winner.as_deref().unwrap_or("?").white().bold(),
        format_margin(v.margin),
        v.band.as_deref().unwrap_or("?").bright_magenta()
    )
}

fn format_scorecard(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} : {} │ margin {}",
        "■".bright_cyan().bold(),
        v.winner.as_deref().unwrap_or("draw").white().bold(),
        v.points_a.unwrap_or(0).bright_yellow().bold(),
        v.points_b.unwrap_or(0).bright_yellow().bold(),
        format_margin(v.margin)
    )
}

fn format_warning(v: &EventVisitor) -> String {
    format!(
        "{} {}",
        "⚠".yellow().bold(),
        v.message.as_deref().unwrap_or("warning").yellow()
    )
}

fn format_error(v: &EventVisitor) -> String {
    format!(
        "{} {}",
        "✖".bright_red().bold(),
        v.message.as_deref().unwrap_or("error").bright_red()
    )
}

fn format_margin(margin: Option<f64>) -> String {
    match margin {
        Some(m) => format!("{}%", m).bright_yellow().to_string(),
        None => "N/A".to_string(),
    }
}
