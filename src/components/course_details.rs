//! Below-the-plot presentation: pathway legend, summary metrics, and the
//! expandable per-course detail panels.

use leptos::prelude::*;

use crate::model::course::Course;
use crate::model::view::{Projection, Summary};

/// Pathway legend with per-pathway course counts over the loaded
/// dataset (not the filtered view).
#[component]
pub fn Legend(#[prop(into)] entries: Signal<Vec<(String, String, usize)>>) -> impl IntoView {
	view! {
		<div class="pathway-legend">
			<For
				each=move || entries.get()
				key=|(name, _, count)| (name.clone(), *count)
				children=|(name, color, count): (String, String, usize)| {
					view! {
						<div class="legend-item">
							<span class="legend-dot" style=format!("background-color: {color};")></span>
							<span>{format!("{name} ({count} courses)")}</span>
						</div>
					}
				}
			/>
		</div>
	}
}

/// The aggregate counts row.
#[component]
pub fn SummaryMetrics(#[prop(into)] summary: Signal<Summary>) -> impl IntoView {
	let metric = |label: &'static str, value: Memo<usize>| {
		view! {
			<div class="metric">
				<div class="metric-value">{move || value.get()}</div>
				<div class="metric-label">{label}</div>
			</div>
		}
	};

	let total = Memo::new(move |_| summary.get().total_courses);
	let pathways = Memo::new(move |_| summary.get().active_pathways);
	let visible = Memo::new(move |_| summary.get().visible_courses);
	let connections = Memo::new(move |_| summary.get().visible_connections);

	view! {
		<div class="summary-metrics">
			{metric("Total Courses", total)}
			{metric("Active Pathways", pathways)}
			{metric("Visible Courses", visible)}
			{metric("Connections", connections)}
			{move || {
				summary
					.get()
					.distinct_instructors
					.map(|n| {
						view! {
							<div class="metric">
								<div class="metric-value">{n}</div>
								<div class="metric-label">"Instructors"</div>
							</div>
						}
					})
			}}
			{move || {
				let dropped = summary.get().dropped_rows;
				(dropped > 0)
					.then(|| {
						view! {
							<div class="metric metric-warn">
								<div class="metric-value">{dropped}</div>
								<div class="metric-label">"Rows dropped"</div>
							</div>
						}
					})
			}}
		</div>
	}
}

/// Expandable detail panels for the filtered courses, grouped by
/// pathway in first-seen order.
#[component]
pub fn CourseDetails(#[prop(into)] projection: Signal<Projection>) -> impl IntoView {
	view! {
		<div class="course-details">
			{move || {
				let filtered = projection.get().courses;
				let mut groups: Vec<(String, Vec<Course>)> = Vec::new();
				for course in filtered {
					match groups.iter_mut().find(|(name, _)| *name == course.pathway) {
						Some((_, list)) => list.push(course),
						None => groups.push((course.pathway.clone(), vec![course])),
					}
				}
				groups
					.into_iter()
					.map(|(pathway, courses)| {
						view! {
							<section class="pathway-group">
								<h4>{pathway}</h4>
								{courses.into_iter().map(course_panel).collect_view()}
							</section>
						}
					})
					.collect_view()
			}}
		</div>
	}
}

fn course_panel(course: Course) -> impl IntoView {
	let heading = format!(
		"{} ({} - {})",
		course.name,
		course.specificity.label(),
		course.exposure.label()
	);
	let row = |label: &'static str, value: String| {
		view! {
			<div class="detail-row">
				<span class="detail-label">{label}</span>
				<span>{value}</span>
			</div>
		}
	};

	view! {
		<details class="course-panel">
			<summary>{heading}</summary>
			{row("Course Type", course.specificity.label().to_string())}
			{row("Experience Level", course.exposure.label().to_string())}
			{row("Learning Pathway", course.pathway.clone())}
			{course.instructor.clone().map(|v| row("Instructor", v))}
			{course.description.clone().map(|v| row("Description", v))}
			{course.digital_proficiency.clone().map(|v| row("Digital Proficiency", v))}
			{course
				.extras
				.iter()
				.map(|(key, value)| {
					view! {
						<div class="detail-row">
							<span class="detail-label">{title_case(key)}</span>
							<span>{value.clone()}</span>
						</div>
					}
				})
				.collect_view()}
		</details>
	}
}

// "digital_proficiency" -> "Digital Proficiency"
fn title_case(key: &str) -> String {
	key.split(['_', ' '])
		.filter(|part| !part.is_empty())
		.map(|part| {
			let mut chars = part.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
