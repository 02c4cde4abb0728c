//! Weekday Schedule Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod background;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::{Config, StoreBackend};
pub use db::{MemoryStore, MySqlStore, Repository, ScheduleStore};
pub use error::{AppError, Result};

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState over the given store backend and configuration
    pub fn new(store: Arc<dyn ScheduleStore>, config: Config) -> Self {
        Self {
            repo: Repository::new(store),
            config,
        }
    }
}
