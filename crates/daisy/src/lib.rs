pub mod config;
pub mod events;
pub mod protocol;
pub mod session;
pub mod sys;
