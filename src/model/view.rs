//! View projection: the render contract between the core pipeline and
//! the canvas/detail components. Everything here is derived per render
//! pass; nothing is separately maintained.

use std::collections::HashSet;

use log::warn;

use super::course::Course;
use super::dataset::Dataset;
use super::filter::{self, FilterState};
use super::graph;

/// One plottable course node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDescriptor {
	/// Course id; doubles as the on-node label.
	pub id: String,
	/// Grid x.
	pub x: f64,
	/// Grid y.
	pub y: f64,
	/// Resolved pathway color.
	pub color: String,
	/// On-node label (the id).
	pub label: String,
	/// Hover text, newline-separated lines.
	pub tooltip: String,
}

/// One renderable edge polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgePolyline {
	/// Curve samples in grid coordinates.
	pub points: Vec<(f64, f64)>,
	/// Resolved pathway color.
	pub color: String,
}

/// Aggregate counts shown in the metrics row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
	/// Courses in the loaded dataset, before filtering.
	pub total_courses: usize,
	/// Pathways currently toggled visible.
	pub active_pathways: usize,
	/// Courses passing the current filter.
	pub visible_courses: usize,
	/// Edges currently drawn.
	pub visible_connections: usize,
	/// Distinct instructors in the dataset, when the schema carries them.
	pub distinct_instructors: Option<usize>,
	/// Rows dropped during normalization.
	pub dropped_rows: usize,
	/// Edges skipped for unknown endpoints or pathways.
	pub integrity_warnings: usize,
}

/// Everything the rendering layer needs for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
	/// Visible course nodes.
	pub nodes: Vec<NodeDescriptor>,
	/// Visible progression curves.
	pub edges: Vec<EdgePolyline>,
	/// Visible edge endpoint id pairs, for hover adjacency.
	pub links: Vec<(String, String)>,
	/// Aggregates for the metrics row.
	pub summary: Summary,
	/// The filtered course table, for the detail panels.
	pub courses: Vec<Course>,
}

/// Run filter → graph → projection over one dataset.
pub fn project(dataset: &Dataset, state: &FilterState) -> Projection {
	let filtered = filter::apply(&dataset.courses, state);

	let color_of = |pathway: &str| -> Option<&str> {
		dataset
			.pathways
			.iter()
			.find(|s| s.name == pathway)
			.map(|s| s.color.as_str())
	};

	let mut nodes = Vec::with_capacity(filtered.len());
	let mut unknown_pathways = 0;
	for course in &filtered {
		let Some(color) = color_of(&course.pathway) else {
			unknown_pathways += 1;
			continue;
		};
		nodes.push(NodeDescriptor {
			id: course.id.clone(),
			x: course.x,
			y: course.y,
			color: color.to_string(),
			label: course.id.clone(),
			tooltip: tooltip(course),
		});
	}
	if unknown_pathways > 0 {
		warn!("{unknown_pathways} course(s) reference a pathway with no style entry");
	}

	// Edges only among currently visible pathways; endpoints are looked
	// up in the filtered table so a searched-away course takes its edges
	// with it.
	let active: Vec<_> = dataset
		.edges
		.iter()
		.filter(|e| state.pathway_visible(&e.pathway))
		.cloned()
		.collect();
	let (curves, skipped) = graph::build_edges(&filtered, &active);

	let mut edges = Vec::with_capacity(curves.len());
	let mut links = Vec::with_capacity(curves.len());
	let mut edge_unknown_pathways = 0;
	for curve in curves {
		let Some(color) = color_of(&curve.pathway) else {
			edge_unknown_pathways += 1;
			continue;
		};
		links.push(curve.endpoints.clone());
		edges.push(EdgePolyline {
			points: curve.points,
			color: color.to_string(),
		});
	}
	if edge_unknown_pathways > 0 {
		warn!("{edge_unknown_pathways} edge(s) reference a pathway with no style entry");
	}

	let instructors: HashSet<&str> = dataset
		.courses
		.iter()
		.filter_map(|c| c.instructor.as_deref())
		.collect();

	let summary = Summary {
		total_courses: dataset.courses.len(),
		active_pathways: dataset
			.pathways
			.iter()
			.filter(|s| state.pathway_visible(&s.name))
			.count(),
		visible_courses: nodes.len(),
		visible_connections: edges.len(),
		distinct_instructors: (!instructors.is_empty()).then_some(instructors.len()),
		dropped_rows: dataset.dropped_rows,
		integrity_warnings: skipped + unknown_pathways + edge_unknown_pathways,
	};

	Projection {
		nodes,
		edges,
		links,
		summary,
		courses: filtered,
	}
}

fn tooltip(course: &Course) -> String {
	let mut lines = vec![
		course.name.clone(),
		format!("Pathway: {}", course.pathway),
		format!("Level: {}", course.specificity.label()),
		format!("Exposure: {}", course.exposure.label()),
	];
	if let Some(instructor) = &course.instructor {
		lines.push(format!("Instructor: {instructor}"));
	}
	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::dataset;
	use crate::model::filter::FilterState;

	#[test]
	fn full_demo_projection_counts() {
		let data = dataset::demo();
		let out = project(&data, &FilterState::default());
		assert_eq!(out.summary.total_courses, 46);
		assert_eq!(out.summary.visible_courses, 46);
		assert_eq!(out.summary.active_pathways, 4);
		// 19 + 19 + 16 + 18 static edges, all resolvable.
		assert_eq!(out.summary.visible_connections, 72);
		assert_eq!(out.summary.integrity_warnings, 0);
		assert_eq!(out.summary.distinct_instructors, None);
	}

	#[test]
	fn hiding_a_pathway_removes_its_nodes_and_edges() {
		let data = dataset::demo();
		let mut state = FilterState::default();
		state.set_pathway("Research", false);
		let out = project(&data, &state);
		assert_eq!(out.summary.active_pathways, 3);
		assert!(out.nodes.iter().all(|n| !n.id.starts_with('R')));
		assert_eq!(out.summary.visible_connections, 72 - 19);
	}

	#[test]
	fn filtered_out_endpoints_take_their_edges_along() {
		let data = dataset::demo();
		let mut state = FilterState::default();
		state.search = "Neural".to_string();
		let out = project(&data, &state);
		// Only R6 survives, so no edge has both endpoints present.
		assert_eq!(out.summary.visible_courses, 1);
		assert_eq!(out.summary.visible_connections, 0);
		assert!(out.summary.integrity_warnings > 0);
	}

	#[test]
	fn tooltips_carry_the_detail_lines() {
		let data = dataset::demo();
		let out = project(&data, &FilterState::default());
		let r1 = out.nodes.iter().find(|n| n.id == "R1").unwrap();
		assert!(r1.tooltip.contains("AI Fundamentals"));
		assert!(r1.tooltip.contains("Pathway: Research"));
		assert!(r1.tooltip.contains("Exposure: Never"));
	}
}
