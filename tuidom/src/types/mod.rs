mod color;
mod enums;

pub use color::{Color, Rgb};
pub use enums::{Border, TextStyle};
