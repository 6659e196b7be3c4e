pub mod animation;
pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod geometry;
pub mod point;
pub mod pointer;

pub use animation::*;
pub use color::*;
pub use config::*;
pub use field::*;
pub use geometry::*;
pub use point::*;
pub use pointer::*;
