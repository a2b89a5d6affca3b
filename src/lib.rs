pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod logging;
pub mod models;
pub mod reports;
pub mod server;
pub mod session;
pub mod summary;
