//! HTTP gateway and process lifecycle for the Shortcut URL shortener.
//!
//! The gateway translates requests into [`UrlStore`](shortcut_store::UrlStore)
//! operations and owns the startup load / shutdown save sequence.

pub mod app;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod server;
pub mod state;

pub use app::App;
pub use lifecycle::{Lifecycle, Phase};
pub use server::{Server, ServerSettings};
pub use state::AppState;
