pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod matcher;
pub mod review;
pub mod scanner;
