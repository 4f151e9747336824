pub mod pr_model;
pub mod view;

pub type V2 = nalgebra::Vector2<f64>;
