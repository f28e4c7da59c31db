//! Built-in demo dataset: four pathways, 46 courses, and the static
//! progression edges between them. Also the `Dataset` container every
//! load produces.

use super::course::{Course, Exposure, PathwayStyle, Specificity};
use super::course::{Exposure as E, Specificity as S};
use super::graph::PathwayEdge;

/// One fully loaded dataset: the owned source of truth for a single data
/// source. Filtered views and projections are derived from it, never
/// mutated into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
	/// Where this data came from, for display.
	pub label: String,
	/// Canonical course table.
	pub courses: Vec<Course>,
	/// Static progression edges; empty for uploaded data.
	pub edges: Vec<PathwayEdge>,
	/// Pathway set with display colors.
	pub pathways: Vec<PathwayStyle>,
	/// Rows rejected during normalization.
	pub dropped_rows: usize,
}

/// Fixed colors for the demo pathway set.
const DEMO_PATHWAYS: &[(&str, &str)] = &[
	("Research", "#E74C3C"),
	("Admin", "#3498DB"),
	("Education", "#2ECC71"),
	("General", "#9B59B6"),
];

// Positions carry small hand-tuned offsets from the grid buckets so that
// courses sharing a cell do not overlap.
const DEMO_COURSES: &[(&str, &str, f64, f64, &str, Specificity, Exposure)] = &[
	("R1", "AI Fundamentals", -0.3, -0.2, "Research", S::Ideas, E::Never),
	("R2", "ML Theory", -0.3, 0.7, "Research", S::Ideas, E::Sometimes),
	("R3", "Deep Learning Concepts", 0.7, 1.3, "Research", S::HandsOn, E::Sometimes),
	("R4", "Research Methods", 0.7, 2.3, "Research", S::HandsOn, E::Daily),
	("R5", "Advanced Research", 1.7, 2.3, "Research", S::IssueSpecific, E::Daily),
	("R6", "Neural Networks", 0.3, 1.7, "Research", S::Ideas, E::Daily),
	("R7", "Statistics for AI", 0.0, -0.3, "Research", S::Ideas, E::Never),
	("R8", "Computer Vision", 1.3, 0.7, "Research", S::HandsOn, E::Sometimes),
	("R9", "NLP Research", 1.3, 2.3, "Research", S::HandsOn, E::Daily),
	("R10", "Paper Writing", 2.3, 1.7, "Research", S::IssueSpecific, E::Daily),
	("R11", "Math for ML", -0.1, 0.1, "Research", S::Ideas, E::Never),
	("R12", "Reinforcement Learning", 0.9, 1.1, "Research", S::HandsOn, E::Sometimes),
	("A1", "AI for Management", 0.3, 0.3, "Admin", S::Ideas, E::Never),
	("A2", "Data Governance", 1.3, -0.3, "Admin", S::HandsOn, E::Never),
	("A3", "AI Strategy", 1.3, 0.7, "Admin", S::HandsOn, E::Sometimes),
	("A4", "Implementation Planning", 2.3, 0.7, "Admin", S::IssueSpecific, E::Sometimes),
	("A5", "AI Leadership", 2.3, 2.3, "Admin", S::IssueSpecific, E::Daily),
	("A6", "Budget & ROI", 2.3, 0.3, "Admin", S::IssueSpecific, E::Never),
	("A7", "AI Ethics Policy", -0.3, 1.3, "Admin", S::Ideas, E::Sometimes),
	("A8", "Team Building", 0.7, 0.3, "Admin", S::HandsOn, E::Never),
	("A9", "Change Management", 1.7, 1.3, "Admin", S::IssueSpecific, E::Sometimes),
	("A10", "Risk Assessment", 0.7, 1.7, "Admin", S::HandsOn, E::Daily),
	("A11", "AI Compliance", 1.1, -0.1, "Admin", S::HandsOn, E::Never),
	("A12", "Performance Metrics", 1.9, 0.9, "Admin", S::IssueSpecific, E::Sometimes),
	("E1", "Teaching AI Basics", 0.3, 1.3, "Education", S::Ideas, E::Sometimes),
	("E2", "Curriculum Design", 1.0, 1.3, "Education", S::HandsOn, E::Sometimes),
	("E3", "Hands-on Workshops", 1.0, 1.7, "Education", S::HandsOn, E::Daily),
	("E4", "Advanced Pedagogy", 2.0, 1.7, "Education", S::IssueSpecific, E::Daily),
	("E5", "AI Ethics Teaching", -0.3, 2.3, "Education", S::Ideas, E::Daily),
	("E6", "Learning Assessment", 2.0, 1.3, "Education", S::IssueSpecific, E::Sometimes),
	("E7", "Educational Tools", 1.0, 0.3, "Education", S::HandsOn, E::Never),
	("E8", "Student Projects", 1.7, 0.7, "Education", S::IssueSpecific, E::Sometimes),
	("E9", "Online Teaching", 0.7, -0.1, "Education", S::HandsOn, E::Never),
	("E10", "AI Lab Setup", 1.3, 1.9, "Education", S::HandsOn, E::Daily),
	("G1", "AI Overview", -0.1, 0.3, "General", S::Ideas, E::Never),
	("G2", "Basic Python", 1.0, 0.1, "General", S::HandsOn, E::Never),
	("G3", "Applied AI", 2.0, -0.3, "General", S::IssueSpecific, E::Never),
	("G4", "AI Tools", 1.0, 0.9, "General", S::HandsOn, E::Sometimes),
	("G5", "Problem Solving", 2.0, 1.1, "General", S::IssueSpecific, E::Sometimes),
	("G6", "AI Applications", 2.0, 2.1, "General", S::IssueSpecific, E::Daily),
	("G7", "Data Basics", 0.3, 0.0, "General", S::Ideas, E::Never),
	("G8", "ML Concepts", -0.1, 1.1, "General", S::Ideas, E::Sometimes),
	("G9", "AI in Business", 0.3, 2.1, "General", S::Ideas, E::Daily),
	("G10", "Practical Projects", 1.3, 2.1, "General", S::HandsOn, E::Daily),
	("G11", "AI Tools Basics", 0.7, -0.3, "General", S::HandsOn, E::Never),
	("G12", "Industry Cases", 1.7, 0.1, "General", S::IssueSpecific, E::Never),
];

const DEMO_EDGES: &[(&str, &[(&str, &str)])] = &[
	(
		"Research",
		&[
			("R1", "R2"),
			("R1", "R7"),
			("R7", "R2"),
			("R2", "R3"),
			("R3", "R4"),
			("R3", "R8"),
			("R8", "R9"),
			("R4", "R5"),
			("R2", "R6"),
			("R6", "R4"),
			("R4", "R9"),
			("R9", "R5"),
			("R5", "R10"),
			("R8", "R10"),
			("R11", "R1"),
			("R11", "R2"),
			("R12", "R3"),
			("R12", "R8"),
			("R1", "R11"),
		],
	),
	(
		"Admin",
		&[
			("A1", "A2"),
			("A1", "A8"),
			("A8", "A2"),
			("A2", "A3"),
			("A3", "A4"),
			("A4", "A5"),
			("A2", "A6"),
			("A6", "A4"),
			("A7", "A3"),
			("A7", "A10"),
			("A10", "A5"),
			("A3", "A9"),
			("A9", "A5"),
			("A8", "A3"),
			("A11", "A2"),
			("A11", "A3"),
			("A12", "A4"),
			("A12", "A9"),
			("A6", "A12"),
		],
	),
	(
		"Education",
		&[
			("E1", "E2"),
			("E2", "E3"),
			("E3", "E4"),
			("E1", "E5"),
			("E5", "E3"),
			("E2", "E6"),
			("E6", "E4"),
			("E7", "E2"),
			("E7", "E8"),
			("E8", "E6"),
			("E1", "E7"),
			("E9", "E7"),
			("E9", "E2"),
			("E10", "E3"),
			("E10", "E4"),
			("E3", "E10"),
		],
	),
	(
		"General",
		&[
			("G1", "G2"),
			("G1", "G7"),
			("G7", "G2"),
			("G2", "G3"),
			("G2", "G4"),
			("G4", "G5"),
			("G5", "G6"),
			("G8", "G4"),
			("G8", "G9"),
			("G9", "G10"),
			("G10", "G6"),
			("G3", "G5"),
			("G1", "G8"),
			("G11", "G2"),
			("G11", "G4"),
			("G12", "G3"),
			("G12", "G5"),
			("G2", "G12"),
		],
	),
];

/// Build the demo dataset. Coordinates are explicit, so no jitter is ever
/// applied to this set.
pub fn demo() -> Dataset {
	let courses = DEMO_COURSES
		.iter()
		.map(|&(id, name, x, y, pathway, specificity, exposure)| {
			let mut course = Course::new(id, name, pathway);
			course.specificity = specificity;
			course.exposure = exposure;
			course.x = x;
			course.y = y;
			course.explicit_pos = true;
			course
		})
		.collect();

	let edges = DEMO_EDGES
		.iter()
		.flat_map(|&(pathway, pairs)| {
			pairs.iter().map(move |&(from, to)| PathwayEdge {
				from: from.to_string(),
				to: to.to_string(),
				pathway: pathway.to_string(),
			})
		})
		.collect();

	let pathways = DEMO_PATHWAYS
		.iter()
		.map(|&(name, color)| PathwayStyle {
			name: name.to_string(),
			color: color.to_string(),
		})
		.collect();

	Dataset {
		label: "Demo dataset".to_string(),
		courses,
		edges,
		pathways,
		dropped_rows: 0,
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn demo_ids_are_unique() {
		let data = demo();
		let ids: HashSet<&str> = data.courses.iter().map(|c| c.id.as_str()).collect();
		assert_eq!(data.courses.len(), 46);
		assert_eq!(ids.len(), 46);
	}

	#[test]
	fn demo_edges_stay_within_their_pathway() {
		let data = demo();
		for edge in &data.edges {
			let from = data
				.courses
				.iter()
				.find(|c| c.id == edge.from)
				.unwrap_or_else(|| panic!("unknown edge source {}", edge.from));
			let to = data
				.courses
				.iter()
				.find(|c| c.id == edge.to)
				.unwrap_or_else(|| panic!("unknown edge target {}", edge.to));
			assert_eq!(from.pathway, edge.pathway);
			assert_eq!(to.pathway, edge.pathway);
		}
	}

	#[test]
	fn demo_edge_pathways_have_styles() {
		let data = demo();
		for edge in &data.edges {
			assert!(data.pathways.iter().any(|s| s.name == edge.pathway));
		}
	}

	#[test]
	fn demo_pathway_sizes_match_legend() {
		let data = demo();
		let count = |p: &str| data.courses.iter().filter(|c| c.pathway == p).count();
		assert_eq!(count("Research"), 12);
		assert_eq!(count("Admin"), 12);
		assert_eq!(count("Education"), 10);
		assert_eq!(count("General"), 12);
	}
}
