pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
