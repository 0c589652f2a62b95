pub mod config;
pub mod games;
pub mod history;
pub mod logger;
