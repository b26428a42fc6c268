pub mod context;
pub mod error;
pub mod session;

pub use context::AppContext;
pub use error::{Result, StoryError};
pub use session::Session;
