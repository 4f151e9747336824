use crate::vector::{add, magnitude, normalize, subtract};
use crate::V2;

/// Delta for a neighbour of a node that moves by `delta`.
///
/// `node_pos` and `neighbor_pos` are the positions before the drag.
/// Following the node by `delta` would move the neighbour to `reach`
/// relative to the node; snapping that back to unit length leaves
/// `reach - normalize(reach)` as the neighbour's own delta.
pub fn neighbor_delta(delta: V2, node_pos: V2, neighbor_pos: V2) -> V2 {
	let connection = subtract(node_pos, neighbor_pos);
	let reach = add(delta, connection);
	let correction = normalize(reach);
	subtract(reach, correction)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_push_along_link() {
		// east neighbour of a node pushed east
		let d = neighbor_delta(V2::new(0.2, 0.), V2::new(2., 2.), V2::new(3., 2.));
		assert!((d - V2::new(0.2, 0.)).magnitude() < 1e-12);
		// west neighbour pulled east
		let d = neighbor_delta(V2::new(0.2, 0.), V2::new(2., 2.), V2::new(1., 2.));
		assert!((d - V2::new(0.2, 0.)).magnitude() < 1e-12);
	}

	#[test]
	fn test_across_link() {
		let delta = V2::new(0.2, 0.);
		let d = neighbor_delta(delta, V2::new(2., 2.), V2::new(2., 1.));
		let reach = V2::new(0.2, 1.);
		let k = 1. - 1. / 1.04f64.sqrt();
		assert!((d - reach * k).magnitude() < 1e-12);
		assert!(magnitude(d) < magnitude(delta));
		assert!((magnitude(d) - (1.04f64.sqrt() - 1.)).abs() < 1e-12);
	}

	#[test]
	fn test_keeps_unit_distance() {
		let node = V2::new(2., 2.);
		for (delta, neighbor) in [
			(V2::new(0.3, -0.7), V2::new(3., 2.)),
			(V2::new(-1.5, 0.25), V2::new(2., 3.)),
			(V2::new(0.01, 0.02), V2::new(1., 2.)),
		] {
			let d = neighbor_delta(delta, node, neighbor);
			let l = magnitude((node + delta) - (neighbor + d));
			assert!((l - 1.).abs() < 1e-12, "{}", l);
		}
	}

	#[test]
	fn test_zero_delta() {
		let d = neighbor_delta(V2::new(0., 0.), V2::new(2., 2.), V2::new(2., 3.));
		assert_eq!(d, V2::new(0., 0.));
		// a stretched link is pulled back to unit length
		let d = neighbor_delta(V2::new(0., 0.), V2::new(0., 0.), V2::new(2., 0.));
		assert!((d - V2::new(-1., 0.)).magnitude() < 1e-12);
		// coincident nodes with no motion stay put
		let d = neighbor_delta(V2::new(0., 0.), V2::new(1., 1.), V2::new(1., 1.));
		assert_eq!(d, V2::new(0., 0.));
	}
}
