// src/models/mod.rs

pub mod player;
pub mod question;
pub mod score;
