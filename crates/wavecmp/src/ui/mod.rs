//! User interface for wavecmp

pub mod app;
pub mod controls;
pub mod handlers;
pub mod message;

pub use app::WavecmpApp;
pub use message::Message;
