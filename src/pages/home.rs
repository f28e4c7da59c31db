//! Dashboard page. Owns the widget state (data source + filter) and
//! re-runs the projection pipeline whenever either changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::controls::{FacetSelect, PathwayToggles, SearchBox, SourcePicker};
use crate::components::course_details::{CourseDetails, Legend, SummaryMetrics};
use crate::components::pathway_canvas::PathwayCanvas;
use crate::model::course::{Exposure, Specificity};
use crate::model::filter::FilterState;
use crate::model::source::{self, DataSource, Loaded};
use crate::model::{dataset, view};

/// The dashboard.
#[component]
pub fn Home() -> impl IntoView {
	let source = RwSignal::new(DataSource::Demo);
	let filter = RwSignal::new(FilterState::default());

	// Loads are keyed by source identity: only a source change triggers
	// a reload, so filter churn never re-parses or re-jitters the data.
	let loaded = RwSignal::new(Loaded {
		dataset: dataset::demo(),
		notice: None,
	});
	Effect::new(move |_| {
		let src = source.get();
		spawn_local(async move {
			let result = source::resolve(src.clone()).await;
			// A slow load can finish after the user has already picked
			// another source. Drop it: only the load matching the current
			// source may land.
			if source.get_untracked() == src {
				loaded.set(result);
			}
		});
	});

	let projection = Memo::new(move |_| view::project(&loaded.get().dataset, &filter.get()));
	let summary = Memo::new(move |_| projection.get().summary);
	let styles = Memo::new(move |_| loaded.get().dataset.pathways);
	let notice = move || loaded.get().notice;

	let legend_entries = Memo::new(move |_| {
		let data = loaded.get().dataset;
		data.pathways
			.iter()
			.map(|style| {
				let count = data
					.courses
					.iter()
					.filter(|c| c.pathway == style.name)
					.count();
				(style.name.clone(), style.color.clone(), count)
			})
			.collect::<Vec<_>>()
	});

	let exposure_options = Signal::derive(|| {
		Exposure::ALL
			.iter()
			.map(|e| e.label().to_string())
			.collect::<Vec<_>>()
	});
	let specificity_options = Signal::derive(|| {
		Specificity::ALL
			.iter()
			.map(|s| s.label().to_string())
			.collect::<Vec<_>>()
	});
	// Only offered when the loaded schema carries the column.
	let proficiency_options = Memo::new(move |_| {
		let mut values: Vec<String> = loaded
			.get()
			.dataset
			.courses
			.iter()
			.filter_map(|c| c.digital_proficiency.clone())
			.collect();
		values.sort();
		values.dedup();
		values
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<h1>"AI Learning Pathway Network"</h1>
				<h3>"Interactive Learning Pathways: Choose Your Journey"</h3>

				{move || {
					notice().map(|msg| view! { <div class="notice">{msg}</div> })
				}}

				<SourcePicker source=source />

				<section class="controls">
					<h4>"Select Learning Pathways to Display"</h4>
					<PathwayToggles styles=styles filter=filter />
					<SearchBox filter=filter />
					<div class="facet-row">
						<FacetSelect
							label="Specificity"
							options=specificity_options
							selected=Signal::derive(move || filter.get().specificity)
							on_select=move |f| filter.update(|st| st.specificity = f)
						/>
						<FacetSelect
							label="Exposure"
							options=exposure_options
							selected=Signal::derive(move || filter.get().exposure)
							on_select=move |f| filter.update(|st| st.exposure = f)
						/>
						{move || {
							(!proficiency_options.get().is_empty())
								.then(|| {
									view! {
										<FacetSelect
											label="Digital Proficiency"
											options=proficiency_options
											selected=Signal::derive(move || {
												filter.get().digital_proficiency
											})
											on_select=move |f| {
												filter.update(|st| st.digital_proficiency = f)
											}
										/>
									}
								})
						}}
					</div>
				</section>

				<PathwayCanvas projection=projection />

				<h4>"Pathway Legend"</h4>
				<Legend entries=legend_entries />

				<SummaryMetrics summary=summary />

				<h4>"Course Details"</h4>
				<p class="hint">"Hover over any node in the graph to see course information"</p>
				<CourseDetails projection=projection />

				<hr />
				<section class="instructions">
					<h4>"How to Use This Learning Pathway"</h4>
					<ol>
						<li>"Select pathways with the checkboxes to show or hide their courses"</li>
						<li>"Hover over nodes in the network to see course details"</li>
						<li>"Lines show the recommended progression through courses"</li>
						<li>
							"Courses progress left to right (Ideas - Hands-on - Issue Specific) "
							"and bottom to top (Never - Sometimes - Daily)"
						</li>
					</ol>
				</section>
			</div>
		</ErrorBoundary>
	}
}
