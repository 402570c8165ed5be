// src/models/mod.rs

pub mod application;
pub mod job;
pub mod mentor;
pub mod message;
pub mod opportunity;
pub mod session;
pub mod user;
