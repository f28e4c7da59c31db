//! Progression-edge geometry: quadratic Bézier curves between course
//! positions, one polyline per edge.

use std::collections::HashMap;

use log::warn;

use super::course::Course;

/// Samples per curve.
pub const CURVE_SAMPLES: usize = 50;

// Control-point nudge, applied per axis when the endpoints are far apart
// on the other axis. Short edges stay nearly straight.
const CURVE_NUDGE: f64 = 0.05;
const CURVE_SPAN: f64 = 0.5;

/// A recommended progression between two courses of one pathway. Not a
/// hard dependency; cycles are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct PathwayEdge {
	/// Source course id.
	pub from: String,
	/// Target course id.
	pub to: String,
	/// Pathway both endpoints belong to.
	pub pathway: String,
}

/// One renderable edge: sampled curve plus the pathway it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeCurve {
	/// Curve sample points in grid coordinates.
	pub points: Vec<(f64, f64)>,
	/// Pathway name, for color resolution and visibility.
	pub pathway: String,
	/// Endpoint ids, for hover adjacency.
	pub endpoints: (String, String),
}

/// Build curves for every edge whose endpoints exist in `courses`.
/// Edges naming an unknown course id are skipped and counted; that count
/// is an integrity signal, not an error.
pub fn build_edges(courses: &[Course], edges: &[PathwayEdge]) -> (Vec<EdgeCurve>, usize) {
	let positions: HashMap<&str, (f64, f64)> = courses
		.iter()
		.map(|c| (c.id.as_str(), (c.x, c.y)))
		.collect();

	let mut curves = Vec::new();
	let mut skipped = 0;
	for edge in edges {
		let (Some(&start), Some(&end)) = (
			positions.get(edge.from.as_str()),
			positions.get(edge.to.as_str()),
		) else {
			skipped += 1;
			continue;
		};
		curves.push(EdgeCurve {
			points: curve_points(start, end),
			pathway: edge.pathway.clone(),
			endpoints: (edge.from.clone(), edge.to.clone()),
		});
	}
	if skipped > 0 {
		warn!("skipped {skipped} edge(s) with endpoints missing from the course table");
	}
	(curves, skipped)
}

/// Sample a quadratic Bézier from `start` to `end`. The control point is
/// the segment midpoint, nudged off-axis for long edges so overlapping
/// progressions stay distinguishable. Coincident endpoints degenerate to
/// a zero-length polyline; there is no division anywhere.
pub fn curve_points(start: (f64, f64), end: (f64, f64)) -> Vec<(f64, f64)> {
	let (x0, y0) = start;
	let (x2, y2) = end;
	let mut cx = (x0 + x2) / 2.0;
	let mut cy = (y0 + y2) / 2.0;
	if (x0 - x2).abs() > CURVE_SPAN {
		cy += CURVE_NUDGE;
	}
	if (y0 - y2).abs() > CURVE_SPAN {
		cx += CURVE_NUDGE;
	}

	(0..CURVE_SAMPLES)
		.map(|i| {
			let t = i as f64 / (CURVE_SAMPLES - 1) as f64;
			let u = 1.0 - t;
			(
				u * u * x0 + 2.0 * u * t * cx + t * t * x2,
				u * u * y0 + 2.0 * u * t * cy + t * t * y2,
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::course::Course;

	fn course_at(id: &str, x: f64, y: f64) -> Course {
		let mut c = Course::new(id, id, "Research");
		c.x = x;
		c.y = y;
		c.explicit_pos = true;
		c
	}

	fn edge(from: &str, to: &str) -> PathwayEdge {
		PathwayEdge {
			from: from.to_string(),
			to: to.to_string(),
			pathway: "Research".to_string(),
		}
	}

	#[test]
	fn curves_interpolate_their_endpoints() {
		let points = curve_points((0.0, 0.0), (2.0, 1.0));
		assert_eq!(points.len(), CURVE_SAMPLES);
		assert_eq!(points[0], (0.0, 0.0));
		let last = points[CURVE_SAMPLES - 1];
		assert!((last.0 - 2.0).abs() < 1e-12);
		assert!((last.1 - 1.0).abs() < 1e-12);
	}

	#[test]
	fn long_edges_curve_and_short_edges_stay_straight() {
		// Wide x-span bows the midpoint upward.
		let bowed = curve_points((0.0, 0.0), (2.0, 0.0));
		let mid = bowed[CURVE_SAMPLES / 2];
		assert!(mid.1 > 0.0);

		// Short edge: every sample stays on the segment.
		let straight = curve_points((0.0, 0.0), (0.4, 0.4));
		for (x, y) in straight {
			assert!((x - y).abs() < 1e-12);
		}
	}

	#[test]
	fn coincident_endpoints_degenerate_safely() {
		let points = curve_points((1.0, 1.0), (1.0, 1.0));
		assert_eq!(points.len(), CURVE_SAMPLES);
		for p in points {
			assert_eq!(p, (1.0, 1.0));
		}
	}

	#[test]
	fn unknown_endpoints_are_skipped_not_fatal() {
		let courses = vec![course_at("R1", 0.0, 0.0), course_at("R2", 1.0, 1.0)];
		let edges = vec![edge("R1", "R2"), edge("R1", "R99"), edge("R98", "R2")];
		let (curves, skipped) = build_edges(&courses, &edges);
		assert_eq!(curves.len(), 1);
		assert_eq!(skipped, 2);
		assert_eq!(curves[0].endpoints, ("R1".to_string(), "R2".to_string()));
	}
}
