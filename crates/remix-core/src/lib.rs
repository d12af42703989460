pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::RemixConfig;
pub use error::{RemixError, Result};
pub use events::AssistantEvent;
pub use types::*;
