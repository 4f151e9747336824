use log::{debug, info, warn};

use crate::config::Config;
use crate::controller_message::ControllerMessage;
use crate::error::Result;
use lattice::{init_grid, propagate, Grid, C2, V2};
use protocol::pr_model::PrModel;
use protocol::view::View;

#[derive(Clone, Debug, PartialEq)]
pub struct Drag {
	pub origin: C2,
	pub start_cursor: V2,
}

/// Committed grid plus the working copy of an ongoing drag.
///
/// The working grid is always recomputed from the committed one with the
/// total cursor motion since the drag began, and only replaces it when
/// the drag ends.
pub struct App {
	config: Config,
	view: View,
	committed: Grid,
	working: Grid,
	drag: Option<Drag>,
}

impl App {
	pub fn new(config: Config) -> Result<Self> {
		config.validate()?;
		let view = View::default()
			.with_scale(config.scale)
			.with_node_radius(config.node_radius);
		let committed = init_grid(config.width, config.height);
		info!("new {}x{} lattice", config.width, config.height);
		Ok(Self {
			config,
			view,
			working: committed.clone(),
			committed,
			drag: None,
		})
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn view(&self) -> &View {
		&self.view
	}

	pub fn committed(&self) -> &Grid {
		&self.committed
	}

	pub fn drag(&self) -> Option<&Drag> {
		self.drag.as_ref()
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.is_some()
	}

	pub fn displayed(&self) -> &Grid {
		if self.is_dragging() {
			&self.working
		} else {
			&self.committed
		}
	}

	pub fn pr_model(&self) -> PrModel {
		self.displayed().pr_model(self.view.get_node_radius())
	}

	/// Nearest node whose drawn circle contains `cursor`.
	pub fn pick(&self, cursor: V2) -> Option<C2> {
		let mut min_dist = f64::INFINITY;
		let mut min_node = None;
		for (c, pos) in self.displayed().nodes() {
			let dist = (self.view.w2s(pos) - cursor).magnitude();
			if dist < min_dist {
				min_dist = dist;
				min_node = Some(c);
			}
		}
		if min_dist <= self.view.get_node_radius() {
			min_node
		} else {
			None
		}
	}

	pub fn begin_drag(&mut self, cursor: V2) -> bool {
		if let Some(drag) = &self.drag {
			warn!(
				"drag of ({}, {}) in progress, ignoring new drag",
				drag.origin[0], drag.origin[1]
			);
			return false;
		}
		let origin = match self.pick(cursor) {
			Some(c) => c,
			None => {
				debug!("no node under ({:.1}, {:.1})", cursor[0], cursor[1]);
				return false;
			}
		};
		info!("begin drag of ({}, {})", origin[0], origin[1]);
		self.working = self.committed.clone();
		self.drag = Some(Drag {
			origin,
			start_cursor: cursor,
		});
		true
	}

	pub fn drag_to(&mut self, cursor: V2) {
		let drag = match &self.drag {
			Some(drag) => drag,
			None => return,
		};
		let total = self.view.screen_delta_to_grid(cursor - drag.start_cursor);
		self.working = propagate(&self.committed, drag.origin, total);
	}

	pub fn end_drag(&mut self) {
		let drag = match self.drag.take() {
			Some(drag) => drag,
			None => return,
		};
		std::mem::swap(&mut self.committed, &mut self.working);
		self.working.clone_from(&self.committed);
		info!("end drag of ({}, {})", drag.origin[0], drag.origin[1]);
		debug!("max link error {:e}", self.committed.max_link_error());
	}

	pub fn cancel_drag(&mut self) {
		if let Some(drag) = self.drag.take() {
			info!("cancel drag of ({}, {})", drag.origin[0], drag.origin[1]);
			self.working.clone_from(&self.committed);
		}
	}

	pub fn reset(&mut self) {
		self.committed = init_grid(self.config.width, self.config.height);
		self.working = self.committed.clone();
		self.drag = None;
		info!("reset {}x{} lattice", self.config.width, self.config.height);
	}

	pub fn set_scale(&mut self, scale: f64) {
		self.view.set_scale(scale);
		self.config.scale = self.view.get_scale();
	}

	pub fn set_node_radius(&mut self, r: f64) {
		self.view.set_node_radius(r);
		self.config.node_radius = self.view.get_node_radius();
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::BeginDrag(c) => {
				self.begin_drag(c);
			}
			ControllerMessage::DragTo(c) => self.drag_to(c),
			ControllerMessage::EndDrag => self.end_drag(),
			ControllerMessage::CancelDrag => self.cancel_drag(),
			ControllerMessage::Reset => self.reset(),
			ControllerMessage::Pan(ds) => self.view.move_view(ds),
			ControllerMessage::SetScale(s) => self.set_scale(s),
			ControllerMessage::SetNodeRadius(r) => self.set_node_radius(r),
		}
	}
}
