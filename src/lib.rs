pub mod config;
pub mod fetch;
pub mod infra;
pub mod location;
pub mod output;
pub mod parser;
pub mod server;
pub mod services;
pub mod summary;
