pub mod cli;
pub mod config;
pub mod dump;
pub mod render;
