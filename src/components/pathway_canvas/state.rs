use std::collections::HashSet;

use crate::model::view::{EdgePolyline, NodeDescriptor, Projection};

/// Node radius in grid units.
pub const NODE_RADIUS: f64 = 0.09;
/// Hover hit radius in grid units.
pub const HIT_RADIUS: f64 = 0.14;

/// Grid window of the original layout, with margin.
pub const WORLD_MIN: f64 = -0.8;
/// See [`WORLD_MIN`].
pub const WORLD_MAX: f64 = 2.8;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

/// Canvas-side plot state: the current projection plus view transform,
/// pan, and hover bookkeeping. Positions are fixed by the pipeline;
/// nothing here simulates.
pub struct PlotState {
	pub nodes: Vec<NodeDescriptor>,
	pub edges: Vec<EdgePolyline>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	// Node-index pairs mirroring the projection's visible links.
	links: Vec<(usize, usize)>,
}

impl PlotState {
	pub fn new(projection: &Projection, width: f64, height: f64) -> Self {
		let mut state = Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			transform: fit_transform(width, height),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			links: Vec::new(),
		};
		state.set_data(projection);
		state
	}

	/// Swap in a new projection, keeping the user's pan/zoom.
	pub fn set_data(&mut self, projection: &Projection) {
		self.nodes = projection.nodes.clone();
		self.edges = projection.edges.clone();
		self.links = projection
			.links
			.iter()
			.filter_map(|(from, to)| {
				let a = self.nodes.iter().position(|n| &n.id == from)?;
				let b = self.nodes.iter().position(|n| &n.id == to)?;
				Some((a, b))
			})
			.collect();
		self.hover = HoverState::default();
	}

	pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
		// y grows upward in grid space, downward on the canvas
		(
			self.transform.x + self.transform.k * wx,
			self.transform.y - self.transform.k * wy,
		)
	}

	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(self.transform.y - sy) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (wx, wy) = self.screen_to_world(sx, sy);
		let mut found = None;
		for (idx, node) in self.nodes.iter().enumerate() {
			let (dx, dy) = (node.x - wx, node.y - wy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(idx);
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.links {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Advance the hover highlight animation.
	pub fn tick(&mut self, dt: f64) {
		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}
}

fn fit_transform(width: f64, height: f64) -> ViewTransform {
	let span = WORLD_MAX - WORLD_MIN;
	let k = (width.min(height) * 0.9) / span;
	let center = (WORLD_MIN + WORLD_MAX) / 2.0;
	ViewTransform {
		x: width / 2.0 - k * center,
		y: height / 2.0 + k * center,
		k,
	}
}
