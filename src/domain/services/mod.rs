pub mod actions;
mod adapter;
mod session;

pub use adapter::*;
pub use session::*;
