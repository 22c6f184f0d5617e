#![warn(clippy::pedantic)]

pub mod log;
mod page;
mod service;
mod settings;

pub use page::*;
pub use service::*;
pub use settings::*;
