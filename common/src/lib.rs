pub mod config;
pub mod games;
pub mod logger;
pub mod messages;

pub use messages::{ClientMessage, InfoRequest, ServerMessage, UpdateNotification};
