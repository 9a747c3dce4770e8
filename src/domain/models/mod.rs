mod backend;
mod command;
mod message;
mod ui_message;

pub use backend::*;
pub use command::*;
pub use message::*;
pub use ui_message::*;
