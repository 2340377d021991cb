pub mod first_player;
pub mod reveal_timer;
pub mod round_generator;
pub mod session_service;
pub mod words;
