//! Tests for winner determination, margins and the scorer.

use pointd_core::{Warning, Warnings};
use pointd_test::games::{self, GameFixture};

use super::*;

fn game_of(fixture: &GameFixture) -> GameResult {
    GameResult::new(
        SidePoints::new(fixture.major_a, fixture.minor_a),
        SidePoints::new(fixture.major_b, fixture.minor_b),
        Totals::new(fixture.major_total, fixture.minor_total),
    )
}

fn side_of(label: char) -> Side {
    match label {
        'A' => Side::A,
        'B' => Side::B,
        other => panic!("unknown side {}", other),
    }
}

// ============================================================================
// Winner Tests
// ============================================================================

mod winner {
    use super::*;

    #[test]
    fn test_major_points_decide_first() {
        let a = SidePoints::new(2, 0);
        let b = SidePoints::new(1, 600);
        assert_eq!(determine_winner(a, b), Some(Side::A));
        assert_eq!(determine_winner(b, a), Some(Side::B));
    }

    #[test]
    fn test_minor_points_break_ties() {
        let a = SidePoints::new(1, 301);
        let b = SidePoints::new(1, 300);
        assert_eq!(determine_winner(a, b), Some(Side::A));
    }

    #[test]
    fn test_full_tie_is_a_draw() {
        let a = SidePoints::new(1, 300);
        assert_eq!(determine_winner(a, a), None);
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
    }
}

// ============================================================================
// Margin Tests
// ============================================================================

mod margins {
    use super::*;

    #[test]
    fn test_draw_margin_is_zero() {
        let game = game_of(&games::draw());
        assert_eq!(margin(&game, None), 0.0);
    }

    #[test]
    fn test_margin_sums_major_and_minor_leads() {
        let game = GameResult::new(
            SidePoints::new(3, 500),
            SidePoints::new(1, 250),
            Totals::new(4, 1000),
        );
        assert_eq!(margin(&game, Some(Side::A)), 75.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(150.0, 600.0), 25.0);
        assert!(percentage(1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_default_totals() {
        assert_eq!(Totals::default(), Totals::new(1, 600));
    }
}

// ============================================================================
// Scorer Tests
// ============================================================================

mod scorer {
    use super::*;

    #[test]
    fn test_fixtures() {
        let scorer = Scorer::default();
        for fixture in games::all() {
            let mut warnings = Warnings::new();
            let score = scorer.score(&game_of(&fixture), &mut warnings);

            assert_eq!(score.winner(), fixture.winner.map(side_of), "{:?}", fixture);
            assert!((score.margin() - fixture.margin).abs() < 1e-9, "{:?}", fixture);
            assert_eq!(
                (score.points(Side::A), score.points(Side::B)),
                fixture.points,
                "{:?}",
                fixture
            );
            assert!(!warnings.is_set());
        }
    }

    #[test]
    fn test_loser_margin_is_zero() {
        let score = Scorer::default().score(&game_of(&games::solid_win()), &mut Warnings::new());
        assert_eq!(score.margin_for(Side::A), 90.0);
        assert_eq!(score.margin_for(Side::B), 0.0);
    }

    #[test]
    fn test_draw_awards_loser_points_to_both() {
        let score = Scorer::default().score(&game_of(&games::draw()), &mut Warnings::new());
        assert!(score.is_draw());
        assert_eq!(score.margin_for(Side::A), 0.0);
        assert_eq!(score.margin_for(Side::B), 0.0);
        assert_eq!(score.points(Side::A), score.band().loser_points());
        assert_eq!(score.points(Side::B), score.band().loser_points());
    }

    #[test]
    fn test_exceeding_totals_warns_but_scores() {
        let game = GameResult::new(
            SidePoints::new(2, 700),
            SidePoints::new(0, 0),
            Totals::new(1, 600),
        );
        let mut warnings = Warnings::new();
        let score = Scorer::default().score(&game, &mut warnings);

        assert_eq!(warnings.get(), Some(&Warning::MajorPointsExceedTotal));
        assert_eq!(score.winner(), Some(Side::A));
        assert_eq!(score.points(Side::A), 20);
    }

    #[test]
    fn test_minor_overflow_warning() {
        let game = GameResult::new(
            SidePoints::new(0, 10),
            SidePoints::new(0, 601),
            Totals::new(1, 600),
        );
        let mut warnings = Warnings::new();
        Scorer::default().score(&game, &mut warnings);
        assert_eq!(warnings.get(), Some(&Warning::MinorPointsExceedTotal));
    }

    #[test]
    fn test_custom_table() {
        let table = ScoringTable::new(vec![
            ScoreBand::new(0, 99, 1, 1),
            ScoreBand::new(100, 200, 3, 0),
        ])
        .unwrap();
        let scorer = Scorer::new(std::sync::Arc::new(table));
        let score = scorer.score(&game_of(&games::crushing_victory()), &mut Warnings::new());
        assert_eq!(score.band().points(), (3, 0));
    }
}
