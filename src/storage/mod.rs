// src/storage/mod.rs

pub mod cookies;
pub mod leaderboard;
