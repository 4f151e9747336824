//! Vector primitives used by the grid and the propagation wave.

use crate::V2;

pub fn add(v1: V2, v2: V2) -> V2 {
	v1 + v2
}

pub fn subtract(v1: V2, v2: V2) -> V2 {
	v1 - v2
}

/// `m` must be non-zero.
pub fn scale_divide(v: V2, m: f64) -> V2 {
	debug_assert!(m != 0.0, "scale_divide by zero");
	v / m
}

pub fn magnitude(v: V2) -> f64 {
	v.magnitude()
}

/// Unit vector along `v`. The zero vector is returned unchanged.
pub fn normalize(v: V2) -> V2 {
	let m = magnitude(v);
	if m > 0.0 {
		v / m
	} else {
		v
	}
}
