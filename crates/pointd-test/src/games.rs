//! Recorded game results.
//!
//! Points are kept as raw integers so the fixtures stay independent of
//! the scoring crate's types.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameFixture {
    pub major_a: i32,
    pub minor_a: i32,
    pub major_b: i32,
    pub minor_b: i32,
    pub major_total: i32,
    pub minor_total: i32,
    /// `Some('A')`, `Some('B')` or `None` for a draw.
    pub winner: Option<char>,
    pub margin: f64,
    /// Points awarded to side A and side B.
    pub points: (u32, u32),
}

/// A wins every objective and destroys the whole enemy force.
pub fn crushing_victory() -> GameFixture {
    GameFixture {
        major_a: 1,
        minor_a: 600,
        major_b: 0,
        minor_b: 0,
        major_total: 1,
        minor_total: 600,
        winner: Some('A'),
        margin: 200.0,
        points: (20, 0),
    }
}

/// Objectives are tied, B edges ahead on kills.
pub fn narrow_win_on_kills() -> GameFixture {
    GameFixture {
        major_a: 1,
        minor_a: 240,
        major_b: 1,
        minor_b: 300,
        major_total: 1,
        minor_total: 600,
        winner: Some('B'),
        margin: 10.0,
        points: (10, 10),
    }
}

/// Neither side separates from the other.
pub fn draw() -> GameFixture {
    GameFixture {
        major_a: 2,
        minor_a: 450,
        major_b: 2,
        minor_b: 450,
        major_total: 3,
        minor_total: 1000,
        winner: None,
        margin: 0.0,
        points: (10, 10),
    }
}

/// A takes one of two objectives more than B and a third of the kill pool.
pub fn solid_win() -> GameFixture {
    GameFixture {
        major_a: 2,
        minor_a: 1000,
        major_b: 1,
        minor_b: 400,
        major_total: 2,
        minor_total: 1500,
        winner: Some('A'),
        margin: 90.0,
        points: (14, 6),
    }
}

pub fn all() -> Vec<GameFixture> {
    vec![crushing_victory(), narrow_win_on_kills(), draw(), solid_win()]
}
