//! Filter and data-source widgets. Widgets own only their signals; every
//! change is folded into the `FilterState` / `DataSource` values the
//! pipeline consumes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::model::course::PathwayStyle;
use crate::model::filter::{Facet, FilterState};
use crate::model::schema::SourceSchema;
use crate::model::source::DataSource;

/// One checkbox per pathway, with its legend color.
#[component]
pub fn PathwayToggles(
	#[prop(into)] styles: Signal<Vec<PathwayStyle>>,
	filter: RwSignal<FilterState>,
) -> impl IntoView {
	view! {
		<div class="pathway-toggles">
			<For
				each=move || styles.get()
				key=|style| style.name.clone()
				children=move |style: PathwayStyle| {
					let name = style.name.clone();
					let name_write = style.name.clone();
					view! {
						<label class="pathway-toggle">
							<input
								type="checkbox"
								prop:checked=move || filter.get().pathway_visible(&name)
								on:change=move |ev| {
									let checked = event_target_checked(&ev);
									filter.update(|f| f.set_pathway(&name_write, checked));
								}
							/>
							<span
								class="legend-dot"
								style=format!("background-color: {};", style.color)
							></span>
							<span>{style.name.clone()}</span>
						</label>
					}
				}
			/>
		</div>
	}
}

/// Free-text search over course name, id, instructor, and description.
#[component]
pub fn SearchBox(filter: RwSignal<FilterState>) -> impl IntoView {
	view! {
		<input
			class="search-box"
			type="search"
			placeholder="Search courses..."
			prop:value=move || filter.get().search
			on:input=move |ev| {
				let value = event_target_value(&ev);
				filter.update(|f| f.search = value);
			}
		/>
	}
}

/// A single-facet dropdown with the "All" sentinel on top.
#[component]
pub fn FacetSelect(
	label: &'static str,
	#[prop(into)] options: Signal<Vec<String>>,
	#[prop(into)] selected: Signal<Facet>,
	#[prop(into)] on_select: Callback<Facet>,
) -> impl IntoView {
	view! {
		<label class="facet-select">
			<span>{label}</span>
			<select on:change=move |ev| {
				let value = event_target_value(&ev);
				let facet = if value == "All" { Facet::All } else { Facet::Only(value) };
				on_select.run(facet);
			}>
				<option value="All" selected=move || selected.get() == Facet::All>
					"All"
				</option>
				<For
					each=move || options.get()
					key=|opt| opt.clone()
					children=move |opt: String| {
						let value = opt.clone();
						view! {
							<option
								value=opt.clone()
								selected=move || selected.get() == Facet::Only(value.clone())
							>
								{opt.clone()}
							</option>
						}
					}
				/>
			</select>
		</label>
	}
}

/// Data-source switcher: demo data, CSV upload (either schema), or a
/// remote CSV URL. Uploaded file contents are read to text here and
/// become part of the `DataSource` value.
#[component]
pub fn SourcePicker(source: RwSignal<DataSource>) -> impl IntoView {
	let schema = RwSignal::new(SourceSchema::GenericCsv);
	let url = RwSignal::new(String::new());

	let on_file = move |ev: web_sys::Event| {
		let Some(target) = ev.target() else {
			return;
		};
		let input: HtmlInputElement = target.unchecked_into();
		let Some(file) = input.files().and_then(|list| list.get(0)) else {
			return;
		};
		let Ok(reader) = web_sys::FileReader::new() else {
			return;
		};
		let name = file.name();
		let chosen = schema.get_untracked();
		let reader_done = reader.clone();
		let onload = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_| {
			if let Some(text) = reader_done.result().ok().and_then(|v| v.as_string()) {
				source.set(DataSource::Csv {
					name: name.clone(),
					schema: chosen,
					contents: text,
				});
			}
		});
		reader.set_onload(Some(onload.as_ref().unchecked_ref()));
		onload.forget();
		let _ = reader.read_as_text(&file);
	};

	let load_url = move |_| {
		let target = url.get_untracked().trim().to_string();
		if !target.is_empty() {
			source.set(DataSource::Url {
				url: target,
				schema: schema.get_untracked(),
			});
		}
	};

	view! {
		<div class="source-picker">
			<button on:click=move |_| source.set(DataSource::Demo)>"Demo data"</button>
			<label>
				<span>"CSV schema"</span>
				<select on:change=move |ev| {
					schema.set(match event_target_value(&ev).as_str() {
						"training_offers" => SourceSchema::TrainingOffersCsv,
						_ => SourceSchema::GenericCsv,
					});
				}>
					<option value="generic">"Generic CSV"</option>
					<option value="training_offers">"Training offers CSV"</option>
				</select>
			</label>
			<input type="file" accept=".csv,text/csv" on:change=on_file />
			<input
				type="url"
				placeholder="https://example.org/courses.csv"
				prop:value=move || url.get()
				on:input=move |ev| url.set(event_target_value(&ev))
			/>
			<button on:click=load_url>"Load from URL"</button>
		</div>
	}
}
