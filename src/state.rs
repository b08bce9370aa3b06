// src/state.rs
use std::sync::Arc;

use crate::services::{relay::Relay, upstream::ChatCompletion};

pub type SharedState = Arc<AppState>;

/// Read-only state shared by all requests.
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(upstream: Arc<dyn ChatCompletion>) -> Self {
        Self {
            relay: Relay::new(upstream),
        }
    }

    pub fn shared(upstream: Arc<dyn ChatCompletion>) -> SharedState {
        Arc::new(Self::new(upstream))
    }
}
