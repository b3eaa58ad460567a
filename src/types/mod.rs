pub mod config;
pub mod parameter;
pub mod scoring;
pub mod tables;
