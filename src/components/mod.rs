//! UI components.

pub mod controls;
pub mod course_details;
pub mod pathway_canvas;
