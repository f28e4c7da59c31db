//! Coordinate assignment: turns categorical levels into plot positions.
//!
//! Base placement is the level's grid bucket. Datasets without explicit
//! coordinates get a bounded jitter so co-located courses do not stack;
//! the jitter is seeded from the course id, so a course keeps its spot
//! across reloads and unrelated re-renders.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::course::Course;

/// Maximum jitter magnitude per axis, in grid units.
pub const JITTER_RANGE: f64 = 0.3;

/// Whether derived positions get the overlap-avoidance jitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jitter {
	/// Courses land exactly on their grid bucket.
	Off,
	/// Uniform offset in ±[`JITTER_RANGE`] per axis, seeded per course id.
	Seeded,
}

/// Fill in positions for every course that did not bring its own.
/// Explicit coordinates pass through untouched, jitter or not.
pub fn assign_coordinates(courses: &mut [Course], jitter: Jitter) {
	for course in courses {
		if course.explicit_pos {
			continue;
		}
		let (dx, dy) = match jitter {
			Jitter::Off => (0.0, 0.0),
			Jitter::Seeded => jitter_offsets(&course.id),
		};
		course.x = course.specificity.bucket() + dx;
		course.y = course.exposure.bucket() + dy;
	}
}

fn jitter_offsets(id: &str) -> (f64, f64) {
	let mut hasher = DefaultHasher::new();
	id.hash(&mut hasher);
	let mut rng = StdRng::seed_from_u64(hasher.finish());
	(
		rng.gen_range(-JITTER_RANGE..=JITTER_RANGE),
		rng.gen_range(-JITTER_RANGE..=JITTER_RANGE),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::course::{Exposure, Specificity};

	fn course(id: &str, spec: Specificity, exp: Exposure) -> Course {
		let mut c = Course::new(id, id, "General");
		c.specificity = spec;
		c.exposure = exp;
		c
	}

	#[test]
	fn base_positions_follow_buckets() {
		let mut courses = vec![
			course("a", Specificity::Ideas, Exposure::Never),
			course("b", Specificity::HandsOn, Exposure::Anyone),
			course("c", Specificity::IssueSpecific, Exposure::Daily),
		];
		assign_coordinates(&mut courses, Jitter::Off);
		assert_eq!((courses[0].x, courses[0].y), (0.0, 0.0));
		assert_eq!((courses[1].x, courses[1].y), (1.0, 1.5));
		assert_eq!((courses[2].x, courses[2].y), (2.0, 2.0));
	}

	#[test]
	fn explicit_positions_are_never_touched() {
		let mut c = course("a", Specificity::HandsOn, Exposure::Daily);
		c.x = -0.3;
		c.y = 0.7;
		c.explicit_pos = true;
		let mut courses = vec![c];
		assign_coordinates(&mut courses, Jitter::Seeded);
		assert_eq!((courses[0].x, courses[0].y), (-0.3, 0.7));
	}

	#[test]
	fn jitter_stays_in_bounds() {
		for i in 0..200 {
			let mut courses = vec![course(&format!("T{i:03}"), Specificity::HandsOn, Exposure::Sometimes)];
			assign_coordinates(&mut courses, Jitter::Seeded);
			assert!((courses[0].x - 1.0).abs() <= JITTER_RANGE);
			assert!((courses[0].y - 1.0).abs() <= JITTER_RANGE);
		}
	}

	#[test]
	fn jitter_is_deterministic_per_id() {
		let mut first = vec![course("T042", Specificity::Ideas, Exposure::Sometimes)];
		let mut second = vec![course("T042", Specificity::Ideas, Exposure::Sometimes)];
		assign_coordinates(&mut first, Jitter::Seeded);
		assign_coordinates(&mut second, Jitter::Seeded);
		assert_eq!((first[0].x, first[0].y), (second[0].x, second[0].y));

		let mut other = vec![course("T043", Specificity::Ideas, Exposure::Sometimes)];
		assign_coordinates(&mut other, Jitter::Seeded);
		// Different ids should not stack on the same jittered spot.
		assert_ne!((first[0].x, first[0].y), (other[0].x, other[0].y));
	}
}
