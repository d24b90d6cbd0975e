// src/sources/mod.rs

pub mod opentdb;

pub use opentdb::{OpenTdbSource, QuestionSource};
