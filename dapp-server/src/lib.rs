//! Page host for the SimpleContract front-end
//!
//! Serves the page rendered from the session state and turns its buttons
//! into session handler calls.

pub mod api;
pub mod config;
pub mod error;

pub use api::server::{bind_listener, build_state, create_router, start_server};
pub use api::AppState;
pub use config::ServerConfig;
pub use error::ServerError;
