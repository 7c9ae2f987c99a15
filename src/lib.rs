pub mod app;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod importer;
pub mod logging;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub const VERSION: &str = "0.1.0";
