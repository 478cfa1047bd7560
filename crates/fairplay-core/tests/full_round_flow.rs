//! Integration tests for the full round flow.
//!
//! These tests simulate complete rounds from commitment to third-party audit,
//! and check the outcome relation over many move-set sizes.

use fairplay_core::{
    crypto::{verify, verify_hex, CommitmentScheme, MockEntropy, OsEntropy, SecretKey},
    games::{outcome, DominanceEngine, Outcome},
    protocol::{Round, RoundTranscript},
    FairplayError,
};

fn move_set(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("move-{}", i)).collect()
}

/// Simulate a complete round the way the terminal front-end drives it
#[test]
fn test_full_round_with_os_entropy() {
    // Phase 1: validate the move list
    let engine = DominanceEngine::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();

    // Phase 2: computer commits, tag is published
    let round = Round::start(engine, &mut OsEntropy).unwrap();
    let published_tag = round.commitment().to_string();

    // Phase 3: user picks a move, round resolves and reveals the key
    let transcript = round.play(3).unwrap();
    assert_eq!(transcript.user_move, "Lizard");

    // Phase 4: user verifies with the published values only
    assert!(verify_hex(
        &transcript.computer_move,
        &transcript.key.to_hex(),
        &published_tag
    )
    .unwrap());
    assert!(transcript.audit().unwrap());
}

/// A third party receiving the transcript as JSON can re-run the audit
#[test]
fn test_transcript_json_audit() {
    let engine = DominanceEngine::new(["Rock", "Paper", "Scissors"]).unwrap();
    let round = Round::start(engine, &mut MockEntropy::from_u64(11)).unwrap();
    let transcript = round.play(2).unwrap();

    let json = serde_json::to_string(&transcript).unwrap();
    let received: RoundTranscript = serde_json::from_str(&json).unwrap();

    assert_eq!(received.round_id, transcript.round_id);
    assert_eq!(received.commitment, transcript.commitment);
    assert_eq!(received.outcome, transcript.outcome);
    assert!(received.audit().unwrap());
}

/// A dishonest computer cannot swap its move after seeing the user's
#[test]
fn test_swapped_computer_move_is_detected() {
    let engine = DominanceEngine::new(["Rock", "Paper", "Scissors"]).unwrap();
    let round = Round::start(engine, &mut MockEntropy::from_u64(21)).unwrap();
    let mut transcript = round.play(0).unwrap();

    let honest = transcript.computer_move.clone();
    for other in ["Rock", "Paper", "Scissors"] {
        if other == honest {
            continue;
        }
        transcript.computer_move = other.to_string();
        assert!(!transcript.verify());
    }
}

#[test]
fn test_every_move_is_reachable_for_the_computer() {
    let mut entropy = MockEntropy::from_u64(99);
    let mut seen = Vec::new();
    for _ in 0..60 {
        let engine = DominanceEngine::new(["Rock", "Paper", "Scissors"]).unwrap();
        let round = Round::start(engine, &mut entropy).unwrap();
        let transcript = round.play(0).unwrap();
        if !seen.contains(&transcript.computer_move) {
            seen.push(transcript.computer_move);
        }
    }

    assert_eq!(seen.len(), 3);
}

#[test]
fn test_commitment_roundtrip_fresh_keys() {
    for mv in ["Rock", "Paper", "Scissors", "", "名前"] {
        let scheme = CommitmentScheme::generate().unwrap();
        let tag = scheme.commit(mv);
        let key = scheme.reveal_key();

        assert!(verify(mv, &key, &tag));
    }
}

#[test]
fn test_single_byte_key_mutation_breaks_verification() {
    let scheme = CommitmentScheme::new(&mut MockEntropy::from_u64(8)).unwrap();
    let tag = scheme.commit("Paper");
    let key = scheme.reveal_key();

    for i in 0..32 {
        for flip in [0x01u8, 0x80, 0xff] {
            let mut bytes = *key.as_bytes();
            bytes[i] ^= flip;
            assert!(!verify("Paper", &SecretKey::from_bytes(bytes), &tag));
        }
    }
}

#[test]
fn test_draw_on_diagonal_for_all_sizes() {
    for n in (3..=25).step_by(2) {
        let moves = move_set(n);
        let engine = DominanceEngine::new(moves.clone()).unwrap();
        for mv in &moves {
            assert_eq!(engine.resolve(mv, mv).unwrap(), Outcome::Draw);
        }
    }
}

#[test]
fn test_relation_is_antisymmetric_for_all_sizes() {
    for n in (3..=25).step_by(2) {
        let moves = move_set(n);
        let engine = DominanceEngine::new(moves.clone()).unwrap();
        for (i, a) in moves.iter().enumerate() {
            for (j, b) in moves.iter().enumerate() {
                if i == j {
                    continue;
                }
                let ab = engine.resolve(a, b).unwrap();
                let ba = engine.resolve(b, a).unwrap();
                assert_ne!(ab, Outcome::Draw);
                assert_eq!(ab == Outcome::Win, ba == Outcome::Lose);
                assert_eq!(ab, ba.reverse());
            }
        }
    }
}

#[test]
fn test_each_move_wins_and_loses_half_the_others() {
    for n in (3..=25).step_by(2) {
        let engine = DominanceEngine::new(move_set(n)).unwrap();
        for (_, row) in engine.rows() {
            let wins = row.iter().filter(|o| **o == Outcome::Win).count();
            let losses = row.iter().filter(|o| **o == Outcome::Lose).count();
            let draws = row.iter().filter(|o| **o == Outcome::Draw).count();

            assert_eq!(wins, (n - 1) / 2);
            assert_eq!(losses, (n - 1) / 2);
            assert_eq!(draws, 1);
        }
    }
}

#[test]
fn test_classic_three_move_table() {
    let engine = DominanceEngine::new(["Rock", "Paper", "Scissors"]).unwrap();
    let expected = [
        ("Rock", "Rock", Outcome::Draw),
        ("Rock", "Paper", Outcome::Lose),
        ("Rock", "Scissors", Outcome::Win),
        ("Paper", "Rock", Outcome::Win),
        ("Paper", "Paper", Outcome::Draw),
        ("Paper", "Scissors", Outcome::Lose),
        ("Scissors", "Rock", Outcome::Lose),
        ("Scissors", "Paper", Outcome::Win),
        ("Scissors", "Scissors", Outcome::Draw),
    ];

    for (row, col, result) in expected {
        assert_eq!(engine.resolve(row, col).unwrap(), result, "{} vs {}", row, col);
    }
}

#[test]
fn test_five_move_set() {
    let moves = ["A", "B", "C", "D", "E"];
    let engine = DominanceEngine::new(moves).unwrap();

    for (i, mv) in moves.iter().enumerate() {
        let successor = moves[(i + 1) % 5];
        assert_eq!(engine.resolve(mv, successor).unwrap(), Outcome::Lose);

        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;
        for other in moves {
            match engine.resolve(mv, other).unwrap() {
                Outcome::Win => wins += 1,
                Outcome::Lose => losses += 1,
                Outcome::Draw => draws += 1,
            }
        }

        assert_eq!(wins, 2);
        assert_eq!(draws, 1);
        assert_eq!(wins + losses + draws, 5);
    }
}

#[test]
fn test_engine_matches_closed_form_rule() {
    let n = 7;
    let engine = DominanceEngine::new(move_set(n)).unwrap();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(engine.resolve_index(i, j).unwrap(), outcome(i, j, n));
        }
    }
}

#[test]
fn test_construction_rejects_invalid_sets() {
    let empty: Vec<String> = Vec::new();
    let cases: Vec<Vec<String>> = vec![
        empty,
        vec!["a".into(), "b".into()],
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
        vec!["a".into(), "b".into(), "a".into()],
    ];

    for moves in cases {
        assert!(matches!(
            DominanceEngine::new(moves),
            Err(FairplayError::InvalidMoveSet(_))
        ));
    }
}

#[test]
fn test_resolve_unknown_move() {
    let engine = DominanceEngine::new(["Rock", "Paper", "Scissors"]).unwrap();

    assert!(matches!(
        engine.resolve("Rock", "Well"),
        Err(FairplayError::UnknownMove(_))
    ));
}

#[test]
fn test_entropy_failure_aborts_round() {
    let engine = DominanceEngine::new(["Rock", "Paper", "Scissors"]).unwrap();

    assert!(matches!(
        Round::start(engine, &mut MockEntropy::unavailable()),
        Err(FairplayError::EntropySource(_))
    ));
}
