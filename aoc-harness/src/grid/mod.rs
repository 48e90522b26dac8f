//! Grid navigation primitives for walking 2D puzzle maps

mod cursor;
mod map;

pub use cursor::Cursor;
pub use map::Map;
