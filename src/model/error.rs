//! Load-boundary error taxonomy.
//!
//! Everything here is recoverable: the loading boundary converts any of
//! these into the demo dataset plus a user-visible notice. Per-field
//! problems (bad numbers, unknown level labels) never reach this enum,
//! they degrade in place during normalization.

/// A data load that could not produce a usable course table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// The uploaded/fetched CSV lacks one or more required columns.
	#[error("missing required column(s): {}", .0.join(", "))]
	MissingColumns(Vec<String>),

	/// The file is not readable as CSV at all.
	#[error("could not read csv: {0}")]
	Csv(#[from] csv::Error),

	/// The remote resource could not be fetched.
	#[error("fetch failed: {0}")]
	Fetch(String),

	/// Normalization succeeded but produced zero rows.
	#[error("no course rows after normalization")]
	Empty,
}
