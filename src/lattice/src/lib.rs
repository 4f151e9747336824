pub mod grid;
pub mod rigidity;
pub mod vector;
pub mod wave;

pub use grid::{init_grid, Grid};
pub use wave::propagate;

pub type V2 = nalgebra::Vector2<f64>;
pub type C2 = nalgebra::Vector2<i32>;
