// src/services/mod.rs
pub mod prompt;
pub mod relay;
pub mod upstream;
