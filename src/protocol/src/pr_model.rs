// pr_model: lattice model for rendering

#[derive(Clone, Debug, PartialEq)]
pub struct PrNode {
	pub id: usize,
	pub index: (i32, i32), // column, row
	pub pos: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrLink {
	pub nodes: [usize; 2],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub nodes: Vec<PrNode>,
	pub links: Vec<PrLink>,
	pub node_radius: f64,
}

impl PrModel {
	pub fn node(&self, id: usize) -> Option<&PrNode> {
		self.nodes.get(id).filter(|node| node.id == id)
	}

	pub fn link_ends(&self, link: &PrLink) -> Option<[(f64, f64); 2]> {
		let p1 = self.node(link.nodes[0])?.pos;
		let p2 = self.node(link.nodes[1])?.pos;
		Some([p1, p2])
	}
}
