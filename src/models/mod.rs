// src/models/mod.rs

pub mod blog;
pub mod user;
