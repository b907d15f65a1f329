mod get_all;
mod questions;

pub use self::get_all::*;
pub use self::questions::*;
