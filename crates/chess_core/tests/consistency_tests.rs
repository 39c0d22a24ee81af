//! Attack index consistency over long games
//!
//! Pseudo-random playthroughs from several positions. After every ply the
//! incrementally maintained index must satisfy the attacker/move duality and
//! match a from-scratch rebuild exactly.

mod common;

use chess_core::constants::{KIWIPETE_FEN, START_FEN};
use chess_core::{Game, GameConfig, MoveOutcome, PieceKind, SquareId};

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick(&mut self, len: usize) -> usize {
        (self.next() % len as u64) as usize
    }
}

fn legal_pairs(game: &Game) -> Vec<(SquareId, SquareId)> {
    let Some(legal) = game.legal_moves() else {
        return Vec::new();
    };
    legal
        .iter()
        .flat_map(|(id, targets)| {
            let from = game.position().piece(id).square;
            targets.iter().map(move |to| (from, to))
        })
        .collect()
}

fn playthrough(fen: &str, seed: u64, plies: usize) -> usize {
    let mut game = Game::from_fen(fen).expect("position parses");
    let mut rng = Lcg(seed);
    let mut played = 0;

    for _ in 0..plies {
        let pairs = legal_pairs(&game);
        if pairs.is_empty() {
            break;
        }
        let (from, to) = pairs[rng.pick(pairs.len())];
        let promotion = PieceKind::PROMOTIONS[rng.pick(PieceKind::PROMOTIONS.len())];
        let outcome = game.attempt_move_with_promotion(from, to, promotion);
        assert!(outcome.is_applied(), "{from}{to} from the legal map was rejected: {outcome:?}");

        let pos = game.position();
        if let Err(violation) = pos.check_invariants() {
            panic!("seed {seed} ply {played}: {violation} in {}", game.fen());
        }
        if let Err(violation) = pos.check_against_rebuild() {
            panic!("seed {seed} ply {played}: {violation} in {}", game.fen());
        }
        played += 1;
    }
    played
}

// ============================================================================
// Random games
// ============================================================================

#[test]
fn test_random_games_from_start() {
    common::init_tracing();
    for seed in 1..=12 {
        let played = playthrough(START_FEN, seed, 200);
        assert!(played > 0);
    }
}

#[test]
fn test_random_games_from_kiwipete() {
    for seed in 100..110 {
        playthrough(KIWIPETE_FEN, seed, 150);
    }
}

#[test]
fn test_random_games_with_promotions() {
    //! Pawns one step from promotion on both sides, with captures available
    let fen = "1n2k2r/PPP4p/8/8/8/8/ppp4P/1N2K2R w Kk - 0 1";
    for seed in 7..15 {
        playthrough(fen, seed, 120);
    }
}

// ============================================================================
// Derived state agrees with the index
// ============================================================================

#[test]
fn test_fen_round_trip_during_play() {
    //! Reloading the saved string reproduces the same legal-move counts
    let mut game = Game::new();
    let mut rng = Lcg(42);
    for _ in 0..60 {
        let pairs = legal_pairs(&game);
        if pairs.is_empty() {
            break;
        }
        let (from, to) = pairs[rng.pick(pairs.len())];
        assert!(game.attempt_move(from, to).is_applied());

        let reloaded = Game::from_fen(&game.fen()).expect("saved position parses");
        assert_eq!(reloaded.fen(), game.fen());
        assert_eq!(
            reloaded.legal_moves().map(|l| l.move_count()),
            game.legal_moves().map(|l| l.move_count())
        );
    }
}

#[test]
fn test_verifying_config_plays_a_full_game() {
    //! `verify_invariants` runs the rebuild comparison inside every move
    let config = GameConfig {
        verify_invariants: true,
        ..GameConfig::default()
    };
    let mut game = Game::with_config(config).expect("default config is valid");
    let mut rng = Lcg(9);
    for _ in 0..80 {
        let pairs = legal_pairs(&game);
        if pairs.is_empty() {
            break;
        }
        let (from, to) = pairs[rng.pick(pairs.len())];
        match game.attempt_move(from, to) {
            MoveOutcome::Applied { .. } => {}
            MoveOutcome::Rejected(reason) => panic!("{from}{to} rejected: {reason:?}"),
        }
    }
    assert!(!game.history().is_empty());
}

#[test]
fn test_reset_restores_start() {
    let mut game = Game::new();
    common::play(&mut game, &["e2e4", "e7e5", "g1f3"]);
    game.reset();
    assert_eq!(game.fen(), START_FEN);
    assert!(game.history().is_empty());
    assert_eq!(game.legal_moves().map(|l| l.move_count()), Some(20));
}
