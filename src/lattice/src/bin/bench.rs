use std::time::SystemTime;

use lattice::{init_grid, propagate, V2};

fn main() {
	let grid = init_grid(64, 64);
	let delta = V2::new(0.3, -0.2);
	let start = SystemTime::now();
	let mut calls = 0;
	for (origin, _) in grid.nodes() {
		let _ = propagate(&grid, origin, delta);
		calls += 1;
	}
	let duration = SystemTime::now()
		.duration_since(start)
		.map(|d| d.as_micros())
		.unwrap_or(0);
	println!(
		"{}x{}: {:.1}us per propagate",
		grid.width(),
		grid.height(),
		duration as f64 / calls as f64
	);
}
