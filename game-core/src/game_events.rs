use game_types::{Difficulty, GameOutcome, Guess, HintData, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    GameStarted {
        session_id: SessionId,
        difficulty: Difficulty,
        word_length: usize,
    },
    GuessSubmitted {
        session_id: SessionId,
        guess: Guess,
        attempts_left: u32,
    },
    GuessRejected {
        session_id: SessionId,
        reason: String,
    },
    HintUsed {
        session_id: SessionId,
        hint: HintData,
    },
    GameFinished {
        session_id: SessionId,
        target_word: String,
        outcome: GameOutcome,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::GameStarted { session_id, .. } => *session_id,
            GameEvent::GuessSubmitted { session_id, .. } => *session_id,
            GameEvent::GuessRejected { session_id, .. } => *session_id,
            GameEvent::HintUsed { session_id, .. } => *session_id,
            GameEvent::GameFinished { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler: Send {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Simple event bus for distributing game events
#[derive(Default)]
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
