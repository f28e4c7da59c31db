//! Filter composition: pathway visibility, free-text search, and
//! categorical facets, ANDed into one predicate.
//!
//! Filtering is a pure function of (table, state). The state is a value
//! snapshot rebuilt from widget signals each render pass; it carries no
//! identity and nothing here mutates the table.

use std::collections::HashMap;

use super::course::Course;

/// One categorical facet: either unconstrained or pinned to one value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Facet {
	/// No constraint (the "All" sentinel in the UI).
	#[default]
	All,
	/// Exact match against the course's label for this facet.
	Only(String),
}

impl Facet {
	/// Whether a course's label (if any) passes this facet.
	pub fn admits(&self, value: Option<&str>) -> bool {
		match self {
			Facet::All => true,
			Facet::Only(selected) => value == Some(selected.as_str()),
		}
	}
}

/// Snapshot of every active filter. A missing pathway key means visible;
/// a fresh default state hides nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
	/// Pathway name → visibility.
	pub pathways: HashMap<String, bool>,
	/// Free-text needle; ignored when blank after trimming.
	pub search: String,
	/// Exposure-level facet, matched against the canonical level label.
	pub exposure: Facet,
	/// Specificity facet, matched against the canonical level label.
	pub specificity: Facet,
	/// Digital-proficiency facet; only meaningful for schemas that carry
	/// the column.
	pub digital_proficiency: Facet,
}

impl FilterState {
	/// Visibility of one pathway (default: visible).
	pub fn pathway_visible(&self, pathway: &str) -> bool {
		self.pathways.get(pathway).copied().unwrap_or(true)
	}

	/// Flip one pathway's visibility to the given value.
	pub fn set_pathway(&mut self, pathway: &str, visible: bool) {
		self.pathways.insert(pathway.to_string(), visible);
	}

	fn matches(&self, course: &Course) -> bool {
		if !self.pathway_visible(&course.pathway) {
			return false;
		}

		let needle = self.search.trim().to_lowercase();
		if !needle.is_empty() {
			let haystacks = [
				Some(course.name.as_str()),
				Some(course.id.as_str()),
				course.instructor.as_deref(),
				course.description.as_deref(),
			];
			let hit = haystacks
				.into_iter()
				.flatten()
				.any(|text| text.to_lowercase().contains(&needle));
			if !hit {
				return false;
			}
		}

		self.exposure.admits(Some(course.exposure.label()))
			&& self.specificity.admits(Some(course.specificity.label()))
			&& self
				.digital_proficiency
				.admits(course.digital_proficiency.as_deref())
	}
}

/// Apply the filter. Returns the matching rows as a fresh table; the
/// input is untouched, so re-applying the same state is idempotent.
/// An empty result is a valid outcome, not a failure.
pub fn apply(courses: &[Course], state: &FilterState) -> Vec<Course> {
	courses
		.iter()
		.filter(|c| state.matches(c))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::course::{Exposure, Specificity};
	use crate::model::dataset;

	fn ids(courses: &[Course]) -> Vec<&str> {
		courses.iter().map(|c| c.id.as_str()).collect()
	}

	fn research_only() -> FilterState {
		let mut state = FilterState::default();
		for pathway in ["Research", "Admin", "Education", "General"] {
			state.set_pathway(pathway, pathway == "Research");
		}
		state
	}

	#[test]
	fn default_state_hides_nothing() {
		let data = dataset::demo();
		let out = apply(&data.courses, &FilterState::default());
		assert_eq!(out.len(), data.courses.len());
	}

	#[test]
	fn facet_conjunction_matches_the_literal_id_set() {
		let data = dataset::demo();
		let mut state = research_only();
		state.specificity = Facet::Only(Specificity::Ideas.label().to_string());
		state.exposure = Facet::Only(Exposure::Never.label().to_string());
		let out = apply(&data.courses, &state);
		assert_eq!(ids(&out), vec!["R1", "R7", "R11"]);

		// The substring predicate intersects further: only names carrying
		// "AI" survive.
		state.search = "AI".to_string();
		let out = apply(&data.courses, &state);
		assert_eq!(ids(&out), vec!["R1", "R7"]);
	}

	#[test]
	fn search_matches_are_case_insensitive_over_name_and_id() {
		let data = dataset::demo();
		let mut state = FilterState::default();
		state.search = "r1".to_string();
		let out = apply(&data.courses, &state);
		// R1 itself plus R10..R12 by id substring.
		assert_eq!(ids(&out), vec!["R1", "R10", "R11", "R12"]);

		state.search = "  NEURAL  ".to_string();
		let out = apply(&data.courses, &state);
		assert_eq!(ids(&out), vec!["R6"]);
	}

	#[test]
	fn search_covers_instructor_and_description_when_present() {
		let mut course = Course::new("T001", "Copilot Basics", "General");
		course.instructor = Some("J. Reyes".to_string());
		course.description = Some("Getting started with assistants".to_string());
		let table = vec![course];

		let mut state = FilterState::default();
		state.search = "reyes".to_string();
		assert_eq!(apply(&table, &state).len(), 1);
		state.search = "assistants".to_string();
		assert_eq!(apply(&table, &state).len(), 1);
		state.search = "nowhere".to_string();
		assert!(apply(&table, &state).is_empty());
	}

	#[test]
	fn digital_proficiency_facet_requires_the_field() {
		let mut with = Course::new("C1", "A", "General");
		with.digital_proficiency = Some("Advanced".to_string());
		let without = Course::new("C2", "B", "General");
		let table = vec![with, without];

		let mut state = FilterState::default();
		state.digital_proficiency = Facet::Only("Advanced".to_string());
		assert_eq!(ids(&apply(&table, &state)), vec!["C1"]);
		state.digital_proficiency = Facet::All;
		assert_eq!(apply(&table, &state).len(), 2);
	}

	#[test]
	fn refiltering_is_idempotent_and_non_mutating() {
		let data = dataset::demo();
		let mut state = research_only();
		state.search = "research".to_string();
		let once = apply(&data.courses, &state);
		let twice = apply(&once, &state);
		assert_eq!(once, twice);
		assert_eq!(data.courses.len(), 46);
	}

	#[test]
	fn empty_result_is_valid() {
		let data = dataset::demo();
		let mut state = FilterState::default();
		state.search = "no such course anywhere".to_string();
		assert!(apply(&data.courses, &state).is_empty());
	}
}
