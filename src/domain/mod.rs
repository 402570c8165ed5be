// src/domain/mod.rs

pub mod completion;
pub mod filters;
pub mod matching;
