pub mod errors;
pub mod game;
pub mod messages;
pub mod statistics;
pub mod words;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;
pub use statistics::*;
pub use words::*;
