use protocol::view::{NODE_RADIUS_RANGE, SCALE_RANGE};

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
	pub width: usize,
	pub height: usize,
	pub scale: f64,
	pub node_radius: f64,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			width: 10,
			height: 10,
			scale: 50.0,
			node_radius: 5.0,
		}
	}
}

fn in_range(x: f64, range: [f64; 2]) -> bool {
	range[0] <= x && x <= range[1]
}

impl Config {
	pub fn with_size(mut self, width: usize, height: usize) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_scale(mut self, scale: f64) -> Self {
		self.scale = scale;
		self
	}

	pub fn with_node_radius(mut self, r: f64) -> Self {
		self.node_radius = r;
		self
	}

	pub fn validate(&self) -> Result<()> {
		if self.width == 0 || self.height == 0 {
			return Err(Error::InvalidDimensions {
				width: self.width,
				height: self.height,
			});
		}
		if !in_range(self.scale, SCALE_RANGE) {
			return Err(Error::InvalidScale(self.scale));
		}
		if !in_range(self.node_radius, NODE_RADIUS_RANGE) {
			return Err(Error::InvalidNodeRadius(self.node_radius));
		}
		Ok(())
	}
}
