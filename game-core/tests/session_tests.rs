mod common;

use common::*;
use game_core::{FormatIssue, GameError, GameEvent, ScoringEngine, evaluate};
use game_types::{Difficulty, GameSettings, GameStatus, GuessResponse, LetterState};

#[test]
fn test_speed_erase_literal() {
    use LetterState::*;
    assert_eq!(
        evaluate("SPEED", "ERASE"),
        vec![Present, Absent, Present, Present, Absent]
    );
}

#[test]
fn test_hard_mode_lost_exactly_after_third_guess() {
    let words = create_test_repository();
    let mut session = create_session_with_word(Difficulty::Hard, "apple");

    for (i, word) in ["crane", "slate", "speed"].iter().enumerate() {
        assert_eq!(session.status(), GameStatus::Playing, "before guess {}", i + 1);
        session.submit_guess(word, &words).unwrap();
    }

    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.guesses().len(), 3);
    assert!(session.end_time().is_some());
}

#[test]
fn test_rejections_do_not_consume_attempts() {
    let words = create_test_repository();
    let mut session = create_session_with_word(Difficulty::Hard, "apple");

    assert!(matches!(
        session.submit_guess("cr4ne", &words),
        Err(GameError::InvalidFormat(FormatIssue::NonLetter))
    ));
    assert!(matches!(
        session.submit_guess("crayon", &words),
        Err(GameError::InvalidFormat(FormatIssue::WrongLength { expected: 5, actual: 6 }))
    ));
    assert!(matches!(
        session.submit_guess("zzzzz", &words),
        Err(GameError::NotAWord { .. })
    ));

    assert_eq!(session.attempts_left(), 3);
    assert!(session.guesses().is_empty());
}

#[test]
fn test_score_is_recomputed_after_each_guess_and_hint() {
    let words = create_test_repository();
    let mut session = create_session_with_word(Difficulty::Medium, "apple");

    session.submit_guess("alloy", &words).unwrap();
    assert_eq!(
        session.score(),
        ScoringEngine::score(session.guesses(), session.attempts_left(), 0)
    );

    session.request_hint().unwrap();
    assert_eq!(
        session.score(),
        ScoringEngine::score(session.guesses(), session.attempts_left(), 1)
    );
}

#[test]
fn test_hints_narrow_until_exhausted() {
    let words = create_test_repository();
    let mut session = create_session_with_word(Difficulty::Easy, "angel");

    // LEMON covers L, E, N and BANAL adds A, so only G is left
    session.submit_guess("lemon", &words).unwrap();
    session.submit_guess("banal", &words).unwrap();
    let hint = session.request_hint().unwrap();
    assert_eq!(hint.letter, 'G');
    assert_eq!(hint.position, Some(2));

    session.submit_guess("hotel", &words).unwrap();
    assert_eq!(session.request_hint().map(|h| h.letter), Some('G'));
    assert_eq!(session.hints_used(), 2);

    let mut covered = create_session_with_word(Difficulty::Easy, "apple");
    covered.submit_guess("place", &words).unwrap();
    assert_eq!(covered.request_hint(), None);
}

#[test]
fn test_full_game_through_controller() {
    let mut controller = create_test_controller(GameSettings::new(Difficulty::Medium, 3));
    let events = EventCollector::new();
    controller.add_event_handler(Box::new(events.clone()));

    let session_id = controller.start_with_defaults().unwrap().id();

    assert_eq!(
        controller.make_guess("xyz"),
        GuessResponse::rejected("Not a valid English word")
    );
    assert_eq!(controller.make_guess("cot"), GuessResponse::accepted());
    assert!(controller.use_hint().is_some());
    assert_eq!(controller.make_guess("cat"), GuessResponse::accepted());

    let snapshot = controller.snapshot().unwrap();
    assert_eq!(snapshot.id, session_id);
    assert_eq!(snapshot.status, GameStatus::Won);
    assert_eq!(snapshot.target_word.as_deref(), Some("CAT"));

    let stats = controller.statistics();
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.guess_distribution.get(&2), Some(&1));

    assert_eq!(
        events.count_matching(|e| matches!(e, GameEvent::GameStarted { .. })),
        1
    );
    assert_eq!(
        events.count_matching(|e| matches!(e, GameEvent::GuessRejected { .. })),
        1
    );
    assert_eq!(
        events.count_matching(|e| matches!(e, GameEvent::GuessSubmitted { .. })),
        2
    );
    assert_eq!(
        events.count_matching(|e| matches!(e, GameEvent::HintUsed { .. })),
        1
    );
    assert!(events.get_events().iter().all(|e| e.session_id() == session_id));

    match events.get_events().last() {
        Some(GameEvent::GameFinished {
            target_word,
            outcome,
            ..
        }) => {
            assert_eq!(target_word, "CAT");
            assert!(outcome.won);
            assert_eq!(outcome.attempts_used, 2);
            // C, T correct (2) + C, A, T correct (3) + 3 attempts * 3 - 0.5
            assert_eq!(outcome.final_score, 13.5);
        }
        other => panic!("Expected GameFinished, got {:?}", other),
    }
}

#[test]
fn test_loss_then_new_game_resets_streak() {
    let mut controller = create_test_controller(GameSettings::new(Difficulty::Hard, 3));

    controller.start_with_defaults().unwrap();
    controller.make_guess("cat");
    assert_eq!(controller.statistics().current_streak, 1);

    controller.start_with_defaults().unwrap();
    for word in ["dog", "cot", "car"] {
        assert_eq!(controller.make_guess(word), GuessResponse::accepted());
    }
    assert_eq!(controller.session().unwrap().status(), GameStatus::Lost);

    let stats = controller.statistics();
    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(stats.win_percentage, 50.0);

    controller.reset_statistics();
    assert_eq!(controller.statistics().games_played, 0);
}

#[test]
fn test_reset_game_discards_without_recording() {
    let mut controller = create_test_controller(GameSettings::new(Difficulty::Easy, 5));
    controller.start_with_defaults().unwrap();
    controller.make_guess("crane");

    controller.reset_game();
    assert!(controller.session().is_none());
    assert_eq!(controller.statistics().games_played, 0);
}

#[tokio::test]
async fn test_shared_controller_serializes_access() {
    let shared = create_test_controller(GameSettings::new(Difficulty::Easy, 3)).into_shared();
    shared.lock().await.start_with_defaults().unwrap();

    let mut handles = Vec::new();
    for word in ["dog", "cot", "car"] {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            shared.lock().await.make_guess(word)
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), GuessResponse::accepted());
    }

    let controller = shared.lock().await;
    let session = controller.session().unwrap();
    assert_eq!(session.guesses().len(), 3);
    assert_eq!(session.attempts_left(), 4);
}
