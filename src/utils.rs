pub mod config;
pub mod logger;
pub mod test_setup;
