use crate::vector::{magnitude, subtract};
use crate::{C2, V2};
use protocol::pr_model::{PrLink, PrModel, PrNode};

// west, south, east, north
// the wave visits neighbours in this order, so it also breaks ties
pub const DIRECTIONS: [[i32; 2]; 4] = [[-1, 0], [0, 1], [1, 0], [0, -1]];

/// Column-major lattice of node positions: `cols[column][row]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
	cols: Vec<Vec<V2>>,
}

/// Unit lattice with node `(i, j)` at `(i + 1, j + 1)`.
pub fn init_grid(width: usize, height: usize) -> Grid {
	debug_assert!(
		width >= 1 && height >= 1,
		"init_grid: bad dimensions {}x{}",
		width,
		height
	);
	let cols = (0..width)
		.map(|idx| {
			(0..height)
				.map(|idy| V2::new((idx + 1) as f64, (idy + 1) as f64))
				.collect()
		})
		.collect();
	Grid { cols }
}

impl Grid {
	/// Columns must all have the same length; this is not checked.
	pub fn from_columns(cols: Vec<Vec<V2>>) -> Self {
		Self { cols }
	}

	pub fn columns(&self) -> &[Vec<V2>] {
		&self.cols
	}

	pub fn width(&self) -> usize {
		self.cols.len()
	}

	pub fn height(&self) -> usize {
		self.cols.first().map_or(0, Vec::len)
	}

	pub fn len(&self) -> usize {
		self.width() * self.height()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn contains(&self, c: C2) -> bool {
		c[0] >= 0
			&& c[1] >= 0
			&& (c[0] as usize) < self.width()
			&& (c[1] as usize) < self.height()
	}

	pub fn get(&self, c: C2) -> Option<V2> {
		if self.contains(c) {
			Some(self.at(c))
		} else {
			None
		}
	}

	// caller checks bounds
	pub(crate) fn at(&self, c: C2) -> V2 {
		self.cols[c[0] as usize][c[1] as usize]
	}

	pub(crate) fn set(&mut self, c: C2, pos: V2) {
		self.cols[c[0] as usize][c[1] as usize] = pos;
	}

	pub fn nodes(&self) -> impl Iterator<Item = (C2, V2)> + '_ {
		self.cols.iter().enumerate().flat_map(|(idx, col)| {
			col.iter()
				.enumerate()
				.map(move |(idy, pos)| (C2::new(idx as i32, idy as i32), *pos))
		})
	}

	pub fn node_id(&self, c: C2) -> usize {
		c[0] as usize * self.height() + c[1] as usize
	}

	pub fn links(&self) -> Vec<[C2; 2]> {
		let x = self.width() as i32;
		let y = self.height() as i32;
		let mut result = vec![];
		for idx in 1..x {
			for idy in 0..y {
				result.push([C2::new(idx - 1, idy), C2::new(idx, idy)]);
			}
		}
		for idx in 0..x {
			for idy in 1..y {
				result.push([C2::new(idx, idy - 1), C2::new(idx, idy)]);
			}
		}
		result
	}

	/// Largest deviation of any link from unit length.
	pub fn max_link_error(&self) -> f64 {
		self.links()
			.into_iter()
			.map(|[c1, c2]| {
				let l = magnitude(subtract(self.at(c1), self.at(c2)));
				(l - 1.0).abs()
			})
			.fold(0.0, f64::max)
	}

	pub fn pr_model(&self, node_radius: f64) -> PrModel {
		let nodes = self
			.nodes()
			.map(|(c, pos)| PrNode {
				id: self.node_id(c),
				index: (c[0], c[1]),
				pos: (pos[0], pos[1]),
			})
			.collect();
		let links = self
			.links()
			.into_iter()
			.map(|[c1, c2]| PrLink {
				nodes: [self.node_id(c1), self.node_id(c2)],
			})
			.collect();
		PrModel {
			nodes,
			links,
			node_radius,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_init_grid() {
		let grid = init_grid(2, 2);
		let expect = vec![
			vec![V2::new(1., 1.), V2::new(1., 2.)],
			vec![V2::new(2., 1.), V2::new(2., 2.)],
		];
		assert_eq!(grid.columns(), &expect[..]);

		let grid = init_grid(4, 3);
		assert_eq!(grid.width(), 4);
		assert_eq!(grid.height(), 3);
		assert_eq!(grid.len(), 12);
		for (c, pos) in grid.nodes() {
			assert_eq!(pos, V2::new(c[0] as f64 + 1., c[1] as f64 + 1.));
		}
	}

	#[test]
	fn test_bounds() {
		let grid = init_grid(3, 2);
		assert!(grid.contains(C2::new(0, 0)));
		assert!(grid.contains(C2::new(2, 1)));
		assert!(!grid.contains(C2::new(3, 0)));
		assert!(!grid.contains(C2::new(0, 2)));
		assert!(!grid.contains(C2::new(-1, 0)));
		assert_eq!(grid.get(C2::new(2, 1)), Some(V2::new(3., 2.)));
		assert_eq!(grid.get(C2::new(0, -1)), None);
	}

	#[test]
	fn test_links() {
		let grid = init_grid(4, 3);
		assert_eq!(grid.links().len(), 3 * 3 + 4 * 2);
		assert_eq!(grid.max_link_error(), 0.0);
		assert!(init_grid(1, 1).links().is_empty());
		assert_eq!(init_grid(1, 1).max_link_error(), 0.0);

		let mut grid = init_grid(2, 1);
		grid.set(C2::new(1, 0), V2::new(2.5, 1.));
		assert!((grid.max_link_error() - 0.5).abs() < 1e-12);
	}

	#[test]
	fn test_pr_model() {
		let grid = init_grid(3, 2);
		let model = grid.pr_model(4.0);
		assert_eq!(model.nodes.len(), 6);
		assert_eq!(model.links.len(), 7);
		assert_eq!(model.node_radius, 4.0);
		for (id, node) in model.nodes.iter().enumerate() {
			assert_eq!(node.id, id);
		}
		let node = model.node(grid.node_id(C2::new(2, 1))).unwrap();
		assert_eq!(node.index, (2, 1));
		assert_eq!(node.pos, (3., 2.));
		for link in model.links.iter() {
			let [p1, p2] = model.link_ends(link).unwrap();
			let d = V2::new(p1.0 - p2.0, p1.1 - p2.1);
			assert!((d.magnitude() - 1.0).abs() < 1e-12);
		}
	}
}
