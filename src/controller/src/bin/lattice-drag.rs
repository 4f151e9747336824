use std::str::FromStr;

use clap::Parser;
use log::warn;

use controller::app::App;
use controller::config::Config;
use controller::controller_message::ControllerMessage;
use controller::error::{Error, Result};
use lattice::{C2, V2};

/// Drag one node of a rigid lattice and print where every node ends up.
#[derive(Parser, Debug)]
#[command(name = "lattice-drag")]
struct Args {
	#[arg(long, default_value_t = 10)]
	width: usize,
	#[arg(long, default_value_t = 10)]
	height: usize,
	/// Screen pixels per grid unit
	#[arg(long, default_value_t = 50.0)]
	scale: f64,
	#[arg(long, default_value_t = 5.0)]
	node_radius: f64,
	/// Node to drag, as COLUMN,ROW
	#[arg(long, value_parser = parse_pair::<i32>, default_value = "0,0")]
	node: (i32, i32),
	/// Cursor motion in screen pixels, as DX,DY
	#[arg(long, value_parser = parse_pair::<f64>, allow_hyphen_values = true)]
	delta: (f64, f64),
}

fn parse_pair<T: FromStr>(s: &str) -> std::result::Result<(T, T), String> {
	let (a, b) = s
		.split_once(',')
		.ok_or_else(|| format!("expected two comma separated values, got {:?}", s))?;
	let parse = |x: &str| {
		x.trim()
			.parse::<T>()
			.map_err(|_| format!("bad value {:?}", x))
	};
	Ok((parse(a)?, parse(b)?))
}

fn main() -> Result<()> {
	env_logger::init();
	let args = Args::parse();
	let config = Config::default()
		.with_size(args.width, args.height)
		.with_scale(args.scale)
		.with_node_radius(args.node_radius);
	let mut app = App::new(config)?;

	let (column, row) = args.node;
	let pos = app
		.committed()
		.get(C2::new(column, row))
		.ok_or(Error::NodeOutOfBounds { column, row })?;
	let start = app.view().w2s(pos);
	let end = start + V2::new(args.delta.0, args.delta.1);
	app.handle(ControllerMessage::BeginDrag(start));
	if !app.is_dragging() {
		warn!("could not grab node ({}, {})", column, row);
	}
	app.handle(ControllerMessage::DragTo(end));
	app.handle(ControllerMessage::EndDrag);

	let model = app.pr_model();
	for node in model.nodes.iter() {
		println!(
			"{} {} {:.9} {:.9}",
			node.index.0, node.index.1, node.pos.0, node.pos.1
		);
	}
	println!("max link error {:e}", app.committed().max_link_error());
	Ok(())
}
