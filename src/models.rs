pub mod config;
pub mod participant;
pub mod role;
pub mod round;
pub mod session;
