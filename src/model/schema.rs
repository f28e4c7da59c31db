//! Schema normalization: maps each supported input schema onto the
//! canonical course table.
//!
//! Schemas are a closed tagged union; there is no column sniffing. Each
//! variant has one normalization function with its own required-column
//! contract. Per-field problems degrade in place (zero coordinate,
//! default level); a row that is structurally unusable is dropped and
//! counted, never thrown.

use log::warn;
use serde::Deserialize;

use super::course::{Course, Exposure, Specificity};
use super::error::LoadError;

/// Which column vocabulary an input uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, Deserialize)]
pub enum SourceSchema {
	/// Static records already in canonical shape.
	Internal,
	/// CSV with canonical column names and explicit coordinates.
	GenericCsv,
	/// The external training-catalog export; no coordinates, level labels
	/// in its own encoding.
	TrainingOffersCsv,
}

/// Outcome of a successful normalization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Normalized {
	/// Canonical course records, one per accepted row.
	pub courses: Vec<Course>,
	/// Rows rejected for missing required values.
	pub dropped: usize,
}

const GENERIC_REQUIRED: [&str; 7] = [
	"course_id",
	"name",
	"x",
	"y",
	"pathway",
	"specificity",
	"exposure",
];


/// Normalize CSV text under the given schema tag.
///
/// `Internal` is not a CSV vocabulary; asking for it here is a caller
/// bug, reported as a missing-column error rather than a panic.
pub fn normalize_csv(text: &str, schema: SourceSchema) -> Result<Normalized, LoadError> {
	match schema {
		SourceSchema::Internal => Err(LoadError::MissingColumns(vec![
			"internal schema has no CSV form".to_string(),
		])),
		SourceSchema::GenericCsv => normalize_generic(text),
		SourceSchema::TrainingOffersCsv => normalize_training_offers(text),
	}
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
	csv::ReaderBuilder::new()
		.flexible(true)
		.trim(csv::Trim::All)
		.from_reader(text.as_bytes())
}

fn normalize_generic(text: &str) -> Result<Normalized, LoadError> {
	let mut rdr = reader(text);
	let headers = rdr.headers()?.clone();

	let col = |name: &str| headers.iter().position(|h| h == name);
	let missing: Vec<String> = GENERIC_REQUIRED
		.iter()
		.filter(|&&name| col(name).is_none())
		.map(|&name| name.to_string())
		.collect();
	if !missing.is_empty() {
		return Err(LoadError::MissingColumns(missing));
	}
	let required: Vec<usize> = GENERIC_REQUIRED.iter().map(|&n| col(n).unwrap()).collect();
	let (id_col, name_col, x_col, y_col) = (required[0], required[1], required[2], required[3]);
	let (pathway_col, spec_col, exp_col) = (required[4], required[5], required[6]);

	let mut out = Normalized::default();
	for result in rdr.records() {
		let record = match result {
			Ok(record) => record,
			Err(err) => {
				warn!("dropping unreadable csv row: {err}");
				out.dropped += 1;
				continue;
			}
		};
		// A row physically lacking one of the required cells is rejected
		// outright; bad values inside a present cell only degrade.
		if required.iter().any(|&idx| record.get(idx).is_none()) {
			out.dropped += 1;
			continue;
		}
		let id = record.get(id_col).unwrap_or_default();
		let name = record.get(name_col).unwrap_or_default();
		if id.is_empty() || name.is_empty() {
			out.dropped += 1;
			continue;
		}

		let mut course = Course::new(id, name, normalize_pathway(record.get(pathway_col)));
		course.specificity = record
			.get(spec_col)
			.and_then(Specificity::from_label)
			.unwrap_or(Specificity::Ideas);
		course.exposure = record
			.get(exp_col)
			.and_then(Exposure::from_label)
			.unwrap_or(Exposure::Anyone);
		course.x = parse_coordinate(record.get(x_col));
		course.y = parse_coordinate(record.get(y_col));
		course.explicit_pos = true;

		for (idx, header) in headers.iter().enumerate() {
			if required.contains(&idx) {
				continue;
			}
			let value = record.get(idx).unwrap_or_default();
			if value.is_empty() {
				continue;
			}
			match header {
				"instructor" => course.instructor = Some(value.to_string()),
				"description" => course.description = Some(value.to_string()),
				"digital_proficiency" => course.digital_proficiency = Some(value.to_string()),
				_ => course.extras.push((header.to_string(), value.to_string())),
			}
		}
		out.courses.push(course);
	}

	if out.courses.is_empty() {
		return Err(LoadError::Empty);
	}
	Ok(out)
}

const TRAINING_REQUIRED: [&str; 3] = ["Name", "Instructor/Presenter", "Learning Pathway"];

#[derive(Debug, Deserialize)]
struct TrainingOfferRow {
	#[serde(rename = "Name")]
	name: String,
	#[serde(rename = "Instructor/Presenter")]
	instructor: String,
	#[serde(default, rename = "Short description")]
	description: String,
	#[serde(default, rename = "Learning Pathway")]
	pathway: String,
	#[serde(default, rename = "Audience Exposure Level")]
	exposure: String,
	#[serde(default, rename = "Specificity")]
	specificity: String,
}

fn normalize_training_offers(text: &str) -> Result<Normalized, LoadError> {
	let mut rdr = reader(text);
	let headers = rdr.headers()?.clone();
	let missing: Vec<String> = TRAINING_REQUIRED
		.iter()
		.filter(|&&name| !headers.iter().any(|h| h == name))
		.map(|&name| name.to_string())
		.collect();
	if !missing.is_empty() {
		return Err(LoadError::MissingColumns(missing));
	}

	let mut out = Normalized::default();
	for (idx, result) in rdr.deserialize::<TrainingOfferRow>().enumerate() {
		let row = match result {
			Ok(row) => row,
			Err(err) => {
				warn!("dropping unreadable training-offer row: {err}");
				out.dropped += 1;
				continue;
			}
		};
		if row.name.is_empty() {
			out.dropped += 1;
			continue;
		}

		// No stable identifier in the source; synthesize a positional one.
		let mut course = Course::new(
			format!("T{:03}", idx + 1),
			row.name,
			normalize_pathway(Some(&row.pathway)),
		);
		course.exposure = map_exposure_label(&row.exposure);
		course.specificity = map_specificity_label(&row.specificity);
		if !row.instructor.is_empty() {
			course.instructor = Some(row.instructor);
		}
		if !row.description.is_empty() {
			course.description = Some(row.description);
		}
		out.courses.push(course);
	}

	if out.courses.is_empty() {
		return Err(LoadError::Empty);
	}
	Ok(out)
}

/// Translate a training-catalog exposure label. Unrecognized labels mean
/// the offer is open to anyone.
pub fn map_exposure_label(raw: &str) -> Exposure {
	match raw.trim() {
		"Lv. 1 - Never used AI" => Exposure::Never,
		"Lv. 2 - Sometimes use AI" => Exposure::Sometimes,
		"Lv. 3 - Use AI on a daily basis" => Exposure::Daily,
		"Lv. Anyone" => Exposure::Anyone,
		_ => Exposure::Anyone,
	}
}

/// Translate a training-catalog specificity label. Unrecognized labels
/// land in the broadest bucket.
pub fn map_specificity_label(raw: &str) -> Specificity {
	match raw.trim() {
		"Lv.1 - Ideas" => Specificity::Ideas,
		"Lv.2 - Hands On" => Specificity::HandsOn,
		"Lv.3 - Issue Specific" => Specificity::IssueSpecific,
		_ => Specificity::Ideas,
	}
}

fn normalize_pathway(raw: Option<&str>) -> String {
	match raw.map(str::trim) {
		Some(p) if !p.is_empty() => p.to_string(),
		_ => "General".to_string(),
	}
}

fn parse_coordinate(raw: Option<&str>) -> f64 {
	raw.and_then(|v| v.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	const GENERIC: &str = "\
course_id,name,x,y,pathway,specificity,exposure,instructor,venue
C1,Intro to AI,0.3,1.0,Engineering,Ideas,Sometimes,Ada,Room 4
C2,Prompt Clinic,1.2,oops,Operation,Hands-on,Daily,,Lab
C3,,1.0,1.0,Operation,Hands-on,Daily,,
";

	#[test]
	fn generic_rows_normalize_totally() {
		let out = normalize_csv(GENERIC, SourceSchema::GenericCsv).unwrap();
		assert_eq!(out.courses.len(), 2);
		assert_eq!(out.dropped, 1);

		let c1 = &out.courses[0];
		assert_eq!(c1.id, "C1");
		assert_eq!(c1.pathway, "Engineering");
		assert_eq!(c1.specificity, Specificity::Ideas);
		assert_eq!(c1.exposure, Exposure::Sometimes);
		assert_eq!(c1.instructor.as_deref(), Some("Ada"));
		assert_eq!(c1.extras, vec![("venue".to_string(), "Room 4".to_string())]);
		assert!(c1.explicit_pos);

		// Malformed y falls back to 0.0 instead of rejecting the row.
		let c2 = &out.courses[1];
		assert_eq!(c2.x, 1.2);
		assert_eq!(c2.y, 0.0);
	}

	#[test]
	fn generic_missing_column_is_a_schema_error() {
		let err = normalize_csv("course_id,name,x,y\nC1,A,0,0\n", SourceSchema::GenericCsv)
			.unwrap_err();
		match err {
			LoadError::MissingColumns(cols) => {
				assert_eq!(cols, vec!["pathway", "specificity", "exposure"]);
			}
			other => panic!("expected MissingColumns, got {other:?}"),
		}
	}

	#[test]
	fn generic_empty_table_is_distinct_from_empty_filter() {
		let header_only = "course_id,name,x,y,pathway,specificity,exposure\n";
		assert!(matches!(
			normalize_csv(header_only, SourceSchema::GenericCsv),
			Err(LoadError::Empty)
		));
	}

	const TRAINING: &str = "\
Name,Instructor/Presenter,Short description,Learning Pathway,Audience Exposure Level,Specificity
Copilot Basics,J. Reyes,Getting started,  Engineering ,Lv. 1 - Never used AI,Lv.1 - Ideas
Agent Workflows,M. Osei,Hands-on lab,Research,Lv. 3 - Use AI on a daily basis,Lv.2 - Hands On
Drop-in Clinic,T. Juhasz,Bring your problem,,Lv. Anyone,Lv.3 - Issue Specific
";

	#[test]
	fn training_offers_synthesize_sequential_ids() {
		let out = normalize_csv(TRAINING, SourceSchema::TrainingOffersCsv).unwrap();
		let ids: Vec<&str> = out.courses.iter().map(|c| c.id.as_str()).collect();
		assert_eq!(ids, vec!["T001", "T002", "T003"]);
		assert_eq!(out.dropped, 0);
	}

	#[test]
	fn training_offers_trim_pathway_and_default_blank_to_general() {
		let out = normalize_csv(TRAINING, SourceSchema::TrainingOffersCsv).unwrap();
		assert_eq!(out.courses[0].pathway, "Engineering");
		assert_eq!(out.courses[2].pathway, "General");
		assert_eq!(out.courses[1].exposure, Exposure::Daily);
		assert_eq!(out.courses[2].specificity, Specificity::IssueSpecific);
		assert!(!out.courses[0].explicit_pos);
	}

	#[test]
	fn training_offers_reject_missing_identity_columns() {
		let err = normalize_csv(
			"Name,Short description\nCopilot Basics,Intro\n",
			SourceSchema::TrainingOffersCsv,
		)
		.unwrap_err();
		match err {
			LoadError::MissingColumns(cols) => {
				assert_eq!(cols, vec!["Instructor/Presenter", "Learning Pathway"]);
			}
			other => panic!("expected MissingColumns, got {other:?}"),
		}
	}

	#[test]
	fn exposure_labels_map_deterministically() {
		assert_eq!(map_exposure_label("Lv. 1 - Never used AI"), Exposure::Never);
		assert_eq!(
			map_exposure_label("Lv. 2 - Sometimes use AI"),
			Exposure::Sometimes
		);
		assert_eq!(
			map_exposure_label("Lv. 3 - Use AI on a daily basis"),
			Exposure::Daily
		);
		assert_eq!(map_exposure_label("Lv. Anyone"), Exposure::Anyone);
		// Anything outside the table lands on the documented default.
		for unknown in ["", "Lv. 4", "never", "Daily", "Lv. 1 - never used ai"] {
			assert_eq!(map_exposure_label(unknown), Exposure::Anyone);
		}
	}

	#[test]
	fn specificity_labels_map_deterministically() {
		assert_eq!(map_specificity_label("Lv.1 - Ideas"), Specificity::Ideas);
		assert_eq!(map_specificity_label("Lv.2 - Hands On"), Specificity::HandsOn);
		assert_eq!(
			map_specificity_label("Lv.3 - Issue Specific"),
			Specificity::IssueSpecific
		);
		for unknown in ["", "Ideas", "Lv.2 - Hands-on", "lv.1 - ideas"] {
			assert_eq!(map_specificity_label(unknown), Specificity::Ideas);
		}
	}
}
