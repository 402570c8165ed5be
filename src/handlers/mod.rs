// src/handlers/mod.rs

pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod jobs;
pub mod mentors;
pub mod messages;
pub mod opportunities;
pub mod profile;
pub mod users;
