//! Canonical course records and the two categorical plot axes.

/// Color cycle for pathways discovered in uploaded data.
const PALETTE: &[&str] = &[
	"#E74C3C", "#3498DB", "#2ECC71", "#9B59B6", "#E67E22", "#1ABC9C", "#F1C40F", "#34495E",
];

/// X-axis ordinal: how concrete/applied a course is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Specificity {
	/// Conceptual overviews.
	Ideas,
	/// Practical, exercise-driven material.
	HandsOn,
	/// Targeted at one concrete problem class.
	IssueSpecific,
}

impl Specificity {
	/// All levels in axis order.
	pub const ALL: [Specificity; 3] = [
		Specificity::Ideas,
		Specificity::HandsOn,
		Specificity::IssueSpecific,
	];

	/// Grid bucket on the x-axis.
	pub fn bucket(self) -> f64 {
		match self {
			Specificity::Ideas => 0.0,
			Specificity::HandsOn => 1.0,
			Specificity::IssueSpecific => 2.0,
		}
	}

	/// Canonical display label.
	pub fn label(self) -> &'static str {
		match self {
			Specificity::Ideas => "Ideas",
			Specificity::HandsOn => "Hands-on",
			Specificity::IssueSpecific => "Issue Specific",
		}
	}

	/// Parse a canonical label, `None` for anything else.
	pub fn from_label(raw: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.label() == raw)
	}
}

/// Y-axis ordinal: how often the audience already uses AI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exposure {
	/// Never used AI.
	Never,
	/// Occasional use.
	Sometimes,
	/// Daily use.
	Daily,
	/// Open to any exposure level; plots between Sometimes and Daily.
	Anyone,
}

impl Exposure {
	/// All levels in axis order (Anyone last, it has no tick of its own).
	pub const ALL: [Exposure; 4] = [
		Exposure::Never,
		Exposure::Sometimes,
		Exposure::Daily,
		Exposure::Anyone,
	];

	/// Grid bucket on the y-axis.
	pub fn bucket(self) -> f64 {
		match self {
			Exposure::Never => 0.0,
			Exposure::Sometimes => 1.0,
			Exposure::Daily => 2.0,
			Exposure::Anyone => 1.5,
		}
	}

	/// Canonical display label.
	pub fn label(self) -> &'static str {
		match self {
			Exposure::Never => "Never",
			Exposure::Sometimes => "Sometimes",
			Exposure::Daily => "Daily",
			Exposure::Anyone => "Anyone",
		}
	}

	/// Parse a canonical label, `None` for anything else.
	pub fn from_label(raw: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|e| e.label() == raw)
	}
}

/// One normalized course record. The single shape every input schema is
/// mapped onto; everything downstream (layout, graph, filter, view)
/// consumes only this.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
	/// Unique identifier within the loaded dataset.
	pub id: String,
	/// Display title.
	pub name: String,
	/// Grouping/color track. Free-form string; styles are resolved against
	/// the dataset's pathway set.
	pub pathway: String,
	/// X-axis level.
	pub specificity: Specificity,
	/// Y-axis level.
	pub exposure: Exposure,
	/// Plot position. Derived by the coordinate assigner unless
	/// `explicit_pos` is set by the normalizer.
	pub x: f64,
	/// See `x`.
	pub y: f64,
	/// True when the input supplied coordinates directly; such positions
	/// are never jittered.
	pub explicit_pos: bool,
	/// Instructor/presenter, when the schema carries one.
	pub instructor: Option<String>,
	/// Short description, when the schema carries one.
	pub description: Option<String>,
	/// Digital proficiency label, when the schema carries one; filterable
	/// as a facet.
	pub digital_proficiency: Option<String>,
	/// Unrecognized CSV columns, in input order, carried through opaquely
	/// and shown in the detail panel.
	pub extras: Vec<(String, String)>,
}

impl Course {
	/// A record with only identity and levels set; the normalizers fill in
	/// the rest field by field.
	pub fn new(id: impl Into<String>, name: impl Into<String>, pathway: impl Into<String>) -> Self {
		Course {
			id: id.into(),
			name: name.into(),
			pathway: pathway.into(),
			specificity: Specificity::Ideas,
			exposure: Exposure::Anyone,
			x: 0.0,
			y: 0.0,
			explicit_pos: false,
			instructor: None,
			description: None,
			digital_proficiency: None,
			extras: Vec::new(),
		}
	}
}

/// A pathway name paired with its display color.
#[derive(Clone, Debug, PartialEq)]
pub struct PathwayStyle {
	/// Pathway name as it appears in course records.
	pub name: String,
	/// CSS color.
	pub color: String,
}

/// Derive the pathway set from a course table, in first-seen order, with
/// colors assigned from the fixed palette cycle. Used for uploaded data
/// where no static pathway set exists.
pub fn styles_from_courses(courses: &[Course]) -> Vec<PathwayStyle> {
	let mut styles: Vec<PathwayStyle> = Vec::new();
	for course in courses {
		if !styles.iter().any(|s| s.name == course.pathway) {
			styles.push(PathwayStyle {
				name: course.pathway.clone(),
				color: PALETTE[styles.len() % PALETTE.len()].to_string(),
			});
		}
	}
	styles
}
