//! Breadth-first propagation of a drag through the lattice.
//!
//! Every node is reached at most once, from the first neighbour that gets
//! to it. Corrections are always computed against the positions of the
//! input grid, never against positions written by the same wave.

use std::collections::VecDeque;

use fnv::FnvHashSet;

use crate::grid::{Grid, DIRECTIONS};
use crate::rigidity::neighbor_delta;
use crate::vector::{add, magnitude};
use crate::{C2, V2};

#[derive(Clone, Debug, PartialEq)]
pub struct WaveStep {
	pub node: C2,
	pub parent: Option<C2>,
	pub delta: V2,
}

#[derive(Clone, Debug, Default)]
pub struct WaveReport {
	pub steps: Vec<WaveStep>, // visit order
	pub moved: usize,
	pub decayed: usize,
}

/// Moves `origin` by `total_delta` and lets the lattice follow.
///
/// `total_delta` is relative to `grid`, so a drag should always pass the
/// grid it started from together with the accumulated delta.
pub fn propagate(grid: &Grid, origin: C2, total_delta: V2) -> Grid {
	propagate_with_report(grid, origin, total_delta).0
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn propagate_with_report(
	grid: &Grid,
	origin: C2,
	total_delta: V2,
) -> (Grid, WaveReport) {
	debug_assert!(grid.contains(origin), "origin {:?} outside grid", origin);
	let mut result = grid.clone();
	let mut report = WaveReport::default();
	let mut queue = VecDeque::new();
	let mut visited = FnvHashSet::default();
	queue.push_back(WaveStep {
		node: origin,
		parent: None,
		delta: total_delta,
	});
	visited.insert(origin);
	while let Some(step) = queue.pop_front() {
		let node = step.node;
		let delta = step.delta;
		report.steps.push(step);
		// NaN stops here too
		if !(magnitude(delta) > 0.0) {
			report.decayed += 1;
			continue;
		}
		let pos = grid.at(node);
		result.set(node, add(pos, delta));
		report.moved += 1;
		for [dx, dy] in DIRECTIONS {
			let next = node + C2::new(dx, dy);
			if !grid.contains(next) || !visited.insert(next) {
				continue;
			}
			queue.push_back(WaveStep {
				node: next,
				parent: Some(node),
				delta: neighbor_delta(delta, pos, grid.at(next)),
			});
		}
	}
	log::debug!(
		"wave from ({}, {}): {} visited, {} moved, {} decayed",
		origin[0],
		origin[1],
		report.steps.len(),
		report.moved,
		report.decayed,
	);
	(result, report)
}
