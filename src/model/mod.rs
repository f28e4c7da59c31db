//! Core data-to-layout pipeline: schema normalization, coordinate
//! assignment, progression-graph construction, filtering, and view
//! projection. Pure and synchronous (the URL fetch excepted); the UI
//! layer owns all mutable state and re-runs the pipeline per
//! interaction.

pub mod course;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod graph;
pub mod layout;
pub mod schema;
pub mod source;
pub mod view;
