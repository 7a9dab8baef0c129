// Page host: HTML page, form actions and a small JSON view of the session

pub mod handlers;
pub mod server;
pub mod types;

use std::sync::Arc;

use simple_dapp::{JsonRpcProvider, Session};
use tokio::sync::Mutex;

/// The one page session this server hosts
///
/// The mutex serialises handlers, so at most one wallet interaction is in
/// flight at any time.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session<JsonRpcProvider>>>,
}

impl AppState {
    pub fn new(session: Session<JsonRpcProvider>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}
