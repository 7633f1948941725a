use game_types::{GameSettings, GameSnapshot, GameStatistics, GameSummary, GuessResponse, HintData};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    FormatIssue, GameError, GameEvent, GameEventBus, GameEventHandler, GameSession, GuessOutcome,
    KeyboardState, StatisticsAggregator, WordRepository,
};

/// A controller shared between tasks. All access goes through the mutex, so
/// one action runs at a time.
pub type SharedController = Arc<Mutex<GameController>>;

/// Application-level owner of the active game, the player's settings and
/// their statistics.
pub struct GameController {
    words: Arc<WordRepository>,
    session: Option<GameSession>,
    settings: GameSettings,
    statistics: StatisticsAggregator,
    event_bus: GameEventBus,
    rng: StdRng,
}

impl GameController {
    pub fn new(words: Arc<WordRepository>, settings: GameSettings) -> Self {
        Self::with_rng(words, settings, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(words: Arc<WordRepository>, settings: GameSettings, rng: StdRng) -> Self {
        Self {
            words,
            session: None,
            settings,
            statistics: StatisticsAggregator::new(),
            event_bus: GameEventBus::new(),
            rng,
        }
    }

    pub fn into_shared(self) -> SharedController {
        Arc::new(Mutex::new(self))
    }

    pub fn add_event_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    /// Replace the active game with a new one. On failure no game is
    /// active afterwards.
    pub fn start_new_game(&mut self, settings: GameSettings) -> Result<&GameSession, GameError> {
        self.session = None;

        let session = match GameSession::start(settings, &self.words, &mut self.rng) {
            Ok(session) => session,
            Err(e) => {
                warn!("Failed to start game: {}", e);
                return Err(e);
            }
        };
        self.settings = settings;

        self.event_bus.publish(GameEvent::GameStarted {
            session_id: session.id(),
            difficulty: session.difficulty(),
            word_length: session.word_length(),
        });

        Ok(self.session.insert(session))
    }

    pub fn start_with_defaults(&mut self) -> Result<&GameSession, GameError> {
        self.start_new_game(self.settings)
    }

    /// Submit a guess and report the result in player-facing form.
    pub fn make_guess(&mut self, text: &str) -> GuessResponse {
        match self.submit(text) {
            Ok(_) => GuessResponse::accepted(),
            Err(e) => GuessResponse::rejected(e.to_string()),
        }
    }

    /// Submit a guess, keeping the structured error.
    pub fn submit(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        let Some(session) = self.session.as_mut() else {
            return Err(GameError::InvalidFormat(FormatIssue::GameNotInProgress));
        };

        let outcome = match session.submit_guess(text, &self.words) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.event_bus.publish(GameEvent::GuessRejected {
                    session_id: session.id(),
                    reason: e.to_string(),
                });
                return Err(e);
            }
        };

        self.event_bus.publish(GameEvent::GuessSubmitted {
            session_id: session.id(),
            guess: outcome.guess.clone(),
            attempts_left: outcome.attempts_left,
        });

        if let Some(result) = session.outcome() {
            info!(
                "Game {} finished: won={} attempts={} score={}",
                session.id(),
                result.won,
                result.attempts_used,
                result.final_score
            );
            self.statistics.record(&result);
            self.event_bus.publish(GameEvent::GameFinished {
                session_id: session.id(),
                target_word: session.target_word().to_string(),
                outcome: result,
            });
        }

        Ok(outcome)
    }

    /// Replace the pending input. With `auto_submit` on, input of exactly the
    /// word length is submitted straight away and the response returned.
    pub fn update_current_guess(&mut self, text: &str) -> Option<GuessResponse> {
        let session = self.session.as_mut()?;
        if session.status().is_terminal() {
            return None;
        }

        // Over-long input is truncated by the session but never auto-submitted
        let typed = text.chars().count();
        session.update_current_guess(text);
        if !(self.settings.auto_submit && typed == session.word_length()) {
            return None;
        }

        let pending = session.current_guess().to_string();
        Some(self.make_guess(&pending))
    }

    pub fn use_hint(&mut self) -> Option<HintData> {
        let session = self.session.as_mut()?;
        let hint = session.request_hint()?;

        self.event_bus.publish(GameEvent::HintUsed {
            session_id: session.id(),
            hint,
        });
        Some(hint)
    }

    /// Drop the active game without recording it.
    pub fn reset_game(&mut self) {
        if let Some(session) = self.session.take() {
            info!("Discarded game {}", session.id());
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// Applies to the next game; the active one keeps its settings.
    pub fn update_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
    }

    pub fn statistics(&self) -> &GameStatistics {
        self.statistics.statistics()
    }

    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
    }

    pub fn keyboard_state(&self) -> KeyboardState {
        self.session
            .as_ref()
            .map(GameSession::keyboard_state)
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.session.as_ref().map(GameSession::snapshot)
    }

    pub fn summary(&self) -> Option<GameSummary> {
        self.session.as_ref().and_then(GameSession::summary)
    }

    pub fn words(&self) -> &WordRepository {
        &self.words
    }
}
