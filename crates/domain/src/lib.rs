#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod exercise;
mod muscle;
mod progression;
pub mod reference;
mod service;
mod statistics;
mod technique;
mod training;
mod validation;
mod volume;
mod week;

use std::slice::Iter;

pub use catalog::*;
pub use error::*;
pub use exercise::*;
pub use muscle::*;
pub use progression::*;
pub use service::*;
pub use statistics::*;
pub use technique::*;
pub use training::*;
pub use validation::*;
pub use volume::*;
pub use week::*;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
