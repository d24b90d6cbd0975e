// src/lib.rs

pub mod config;
pub mod error;
pub mod models;
pub mod quiz;
pub mod screen;
pub mod session;
pub mod sources;
pub mod storage;
pub mod utils;

// Re-export specific items for convenience if needed
pub use session::{SessionController, SessionState};
