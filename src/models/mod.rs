pub mod config;
pub mod integration;
pub mod outcome;
