pub mod authorize;
pub mod config;
pub mod serve;
