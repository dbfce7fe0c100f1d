pub mod actions;
pub mod api;
pub mod cli;
pub mod config;
pub mod hostpattern;
pub mod prompt;
pub mod resolver;
