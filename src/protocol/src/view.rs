use crate::V2;

pub const SCALE_RANGE: [f64; 2] = [1.0, 200.0];
pub const NODE_RADIUS_RANGE: [f64; 2] = [1.0, 50.0];

pub struct View {
	screen_offset: V2, // screen position of grid origin
	scale: f64,        // screen pixels per grid unit
	node_radius: f64,  // pixels
}

impl Default for View {
	fn default() -> Self {
		Self {
			screen_offset: V2::new(0., 0.),
			scale: 50.0,
			node_radius: 5.0,
		}
	}
}

impl View {
	pub fn with_scale(mut self, scale: f64) -> Self {
		self.set_scale(scale);
		self
	}

	pub fn with_node_radius(mut self, r: f64) -> Self {
		self.set_node_radius(r);
		self
	}

	pub fn with_screen_offset(mut self, offset: V2) -> Self {
		self.screen_offset = offset;
		self
	}

	pub fn get_scale(&self) -> f64 {
		self.scale
	}

	pub fn get_node_radius(&self) -> f64 {
		self.node_radius
	}

	pub fn set_scale(&mut self, scale: f64) {
		self.scale = scale.clamp(SCALE_RANGE[0], SCALE_RANGE[1]);
	}

	pub fn set_node_radius(&mut self, r: f64) {
		self.node_radius = r.clamp(NODE_RADIUS_RANGE[0], NODE_RADIUS_RANGE[1]);
	}

	pub fn move_view(&mut self, ds: V2) {
		self.screen_offset += ds;
	}

	pub fn screen_delta_to_grid(&self, ds: V2) -> V2 {
		ds / self.scale
	}

	pub fn s2w(&self, pos: V2) -> V2 {
		(pos - self.screen_offset) / self.scale
	}

	pub fn w2s(&self, pos: V2) -> V2 {
		pos * self.scale + self.screen_offset
	}
}
