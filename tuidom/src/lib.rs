pub mod buffer;
pub mod event;
pub mod hit;
pub mod layout;
pub mod spring;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::HitMap;
pub use layout::Rect;
pub use spring::{Spring, SpringSpec};
pub use terminal::Terminal;
pub use types::*;
