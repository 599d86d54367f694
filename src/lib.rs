pub mod cli;
pub mod config;
pub mod db;
pub mod emit;
pub mod error;
pub mod generate;
pub mod introspect;
pub mod logging;
pub mod model;
pub mod naming;
pub mod types;
