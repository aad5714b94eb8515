pub mod commands;
pub mod messages;
pub mod utils;

pub use commands::command_handler;
pub use messages::message_handler;
