pub mod sessions;
pub mod store;

pub use sessions::{RenderedBatch, SessionStore};
pub use store::{AppState, Render, SelectionMiss};
