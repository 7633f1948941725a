#![allow(dead_code)]

use game_core::{GameController, GameEvent, GameEventHandler, GameSession, WordRepository};
use game_types::{Difficulty, GameSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, Once};

static TRACING: Once = Once::new();

/// Route tracing output through the test harness.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub const GAMEPLAY_WORDS: &str = "apple\nangel\ncat\nbanana";
pub const VALIDATION_WORDS: &str =
    "alloy\ncrane\nslate\nspeed\nerase\nplace\nhotel\nlemon\nbanal\ndog\ncot\ncar";

/// Creates a test WordRepository with a known set of words
pub fn create_test_repository() -> WordRepository {
    init_tracing();
    WordRepository::from_word_lists(GAMEPLAY_WORDS, VALIDATION_WORDS).unwrap()
}

/// Creates a session with a specific target word
pub fn create_session_with_word(difficulty: Difficulty, word: &str) -> GameSession {
    init_tracing();
    GameSession::with_target_seeded(difficulty, word, 17).unwrap()
}

/// Creates a controller over the test words with a fixed RNG
pub fn create_test_controller(settings: GameSettings) -> GameController {
    GameController::with_rng(
        Arc::new(create_test_repository()),
        settings,
        StdRng::seed_from_u64(99),
    )
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn count_matching(&self, check_fn: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check_fn(e)).count()
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// A fresh, empty directory under the system temp dir
pub fn temp_words_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("game-core-words-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
