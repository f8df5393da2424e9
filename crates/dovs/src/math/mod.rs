pub mod circle;
pub mod line;
pub mod point;
pub mod segment;
pub mod vector;

pub(crate) mod num;

pub type FloatNum = f64;

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};
