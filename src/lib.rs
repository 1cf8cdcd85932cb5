pub mod archiver;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod scrape;
