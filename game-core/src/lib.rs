pub mod config;
pub mod controller;
pub mod errors;
pub mod evaluation;
pub mod game_events;
pub mod game_state;
pub mod hints;
pub mod keyboard;
pub mod scoring;
pub mod statistics;
pub mod word_repository;

// Re-export main components
pub use config::*;
pub use controller::*;
pub use errors::*;
pub use evaluation::*;
pub use game_events::*;
pub use game_state::*;
pub use keyboard::*;
pub use scoring::*;
pub use statistics::*;
pub use word_repository::*;
