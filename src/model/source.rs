//! Data-source selection and the load-or-fallback boundary.
//!
//! Every load error is absorbed here: the caller always gets a usable
//! dataset, with a notice attached when it is the demo fallback rather
//! than what was asked for. `DataSource` values double as the cache key
//! for the reactive loader, so re-renders triggered by unrelated widgets
//! never re-parse or re-jitter.

use log::warn;
use serde::{Deserialize, Serialize};

use super::dataset::{self, Dataset};
use super::error::LoadError;
use super::layout::{self, Jitter};
use super::schema::{self, SourceSchema};
use super::course;

/// Where the course table comes from. Equality covers the whole value,
/// uploaded file contents included, and serves as the load-cache key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataSource {
	/// The built-in demo dataset.
	Demo,
	/// An uploaded CSV file, already read to text.
	Csv {
		/// File name, for the dataset label.
		name: String,
		/// Column vocabulary to normalize under.
		schema: SourceSchema,
		/// Raw file contents.
		contents: String,
	},
	/// A remote CSV resource.
	Url {
		/// Resource location.
		url: String,
		/// Column vocabulary to normalize under.
		schema: SourceSchema,
	},
}

/// A resolved load: always a dataset, plus a non-fatal notice when the
/// requested source failed and the demo data stood in.
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded {
	/// The dataset to render.
	pub dataset: Dataset,
	/// User-visible warning, if the load fell back.
	pub notice: Option<String>,
}

/// Normalize CSV text into a dataset: normalize → assign coordinates →
/// derive the pathway set. Uploaded data has no static edge list.
pub fn load_csv(contents: &str, schema: SourceSchema, label: &str) -> Result<Dataset, LoadError> {
	let normalized = schema::normalize_csv(contents, schema)?;
	let mut courses = normalized.courses;
	let jitter = match schema {
		SourceSchema::TrainingOffersCsv => Jitter::Seeded,
		_ => Jitter::Off,
	};
	layout::assign_coordinates(&mut courses, jitter);
	let pathways = course::styles_from_courses(&courses);
	Ok(Dataset {
		label: label.to_string(),
		courses,
		edges: Vec::new(),
		pathways,
		dropped_rows: normalized.dropped,
	})
}

/// Resolve a source to a dataset, degrading to the demo data on any
/// error. The only await is the URL fetch.
pub async fn resolve(source: DataSource) -> Loaded {
	match source {
		DataSource::Demo => Loaded {
			dataset: dataset::demo(),
			notice: None,
		},
		DataSource::Csv {
			name,
			schema,
			contents,
		} => finish(load_csv(&contents, schema, &name)),
		DataSource::Url { url, schema } => {
			let fetched = fetch_text(&url).await;
			finish(fetched.and_then(|text| load_csv(&text, schema, &url)))
		}
	}
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
	let response = reqwest::get(url)
		.await
		.map_err(|e| LoadError::Fetch(e.to_string()))?;
	if !response.status().is_success() {
		return Err(LoadError::Fetch(format!("HTTP {}", response.status())));
	}
	response
		.text()
		.await
		.map_err(|e| LoadError::Fetch(e.to_string()))
}

/// Convert a load outcome into something always renderable.
pub fn finish(result: Result<Dataset, LoadError>) -> Loaded {
	match result {
		Ok(dataset) => Loaded {
			dataset,
			notice: None,
		},
		Err(err) => {
			warn!("data load failed, falling back to demo dataset: {err}");
			Loaded {
				dataset: dataset::demo(),
				notice: Some(format!("Could not load data ({err}); showing demo dataset.")),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generic_csv_load_keeps_explicit_coordinates() {
		let csv = "course_id,name,x,y,pathway,specificity,exposure\n\
			C1,Intro,0.25,1.75,Ops,Ideas,Daily\n";
		let ds = load_csv(csv, SourceSchema::GenericCsv, "upload.csv").unwrap();
		assert_eq!(ds.courses.len(), 1);
		assert_eq!((ds.courses[0].x, ds.courses[0].y), (0.25, 1.75));
		assert_eq!(ds.pathways.len(), 1);
		assert_eq!(ds.pathways[0].name, "Ops");
		assert!(ds.edges.is_empty());
	}

	#[test]
	fn training_offers_load_derives_jittered_coordinates() {
		let csv = "Name,Instructor/Presenter,Short description,Learning Pathway,Audience Exposure Level,Specificity\n\
			Copilot Basics,J. Reyes,Intro,Engineering,Lv. 2 - Sometimes use AI,Lv.2 - Hands On\n";
		let ds = load_csv(csv, SourceSchema::TrainingOffersCsv, "offers.csv").unwrap();
		let c = &ds.courses[0];
		assert!((c.x - 1.0).abs() <= layout::JITTER_RANGE);
		assert!((c.y - 1.0).abs() <= layout::JITTER_RANGE);
	}

	#[test]
	fn failed_fetch_falls_back_to_demo_with_notice() {
		let loaded = finish(Err(LoadError::Fetch("connection refused".to_string())));
		assert_eq!(loaded.dataset.courses.len(), 46);
		let notice = loaded.notice.expect("fallback must carry a notice");
		assert!(notice.contains("connection refused"));
	}

	// The page keeps a load result only while the current source still
	// equals the one the load started from, so equality has to separate
	// every pair of distinct sources, file contents included.
	#[test]
	fn source_equality_tracks_the_full_value() {
		let url = DataSource::Url {
			url: "https://example.org/a.csv".to_string(),
			schema: SourceSchema::GenericCsv,
		};
		assert_eq!(url, url.clone());
		assert_ne!(url, DataSource::Demo);

		let upload = DataSource::Csv {
			name: "offers.csv".to_string(),
			schema: SourceSchema::TrainingOffersCsv,
			contents: "Name,Instructor/Presenter,Learning Pathway\n".to_string(),
		};
		let mut edited = upload.clone();
		if let DataSource::Csv { contents, .. } = &mut edited {
			contents.push_str("Copilot Basics,J. Reyes,Engineering\n");
		}
		assert_ne!(upload, edited);
	}

	#[test]
	fn schema_error_also_falls_back() {
		let loaded = finish(load_csv("a,b\n1,2\n", SourceSchema::GenericCsv, "bad.csv"));
		assert_eq!(loaded.dataset.label, "Demo dataset");
		assert!(loaded.notice.is_some());
	}
}
