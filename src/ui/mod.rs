//! Line-oriented front end that plays a human against the engine.

mod console;

pub use console::{Command, Console};
