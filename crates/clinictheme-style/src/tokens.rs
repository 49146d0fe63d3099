//! Values derived from the customization knobs
//!
//! The knobs (button style, card padding, sidebar position, ...) do not map
//! 1:1 to CSS. These helpers turn them into the scale steps and snippets the
//! stylesheet template refers to.

use serde::Serialize;

use clinictheme_types::customization::TenantCustomization;

pub const FOCUS_RING_SHADOW: &str = "0 0 0 3px rgba(37, 99, 235, 0.1)";
pub const TABLE_HOVER_COLOR: &str = "rgba(37, 99, 235, 0.05)";

/// `grid-template-areas` value for a (sidebar, header) combination
pub fn grid_template(sidebar: &str, header: &str) -> &'static str {
	match (sidebar, header) {
		("right", "top") => r#""header header" "main sidebar""#,
		("top", "top") => r#""header" "sidebar" "main""#,
		("bottom", "top") => r#""header" "main" "sidebar""#,
		_ => r#""header header" "sidebar main""#,
	}
}

/// Declarations for the form label rule
pub fn label_position_style(position: &str) -> &'static str {
	match position {
		"left" => "text-align: right; padding-right: var(--spacing-md); min-width: 120px;",
		"inside" => {
			"position: absolute; top: 50%; left: var(--spacing-md); transform: translateY(-50%); color: var(--text-secondary-color);"
		}
		_ => "margin-bottom: var(--spacing-xs);",
	}
}

const MASONRY_RULES: &str = "\
.dashboard-grid {
	column-count: 3;
	column-gap: var(--spacing-lg);
}
.dashboard-card {
	break-inside: avoid;
	margin-bottom: var(--spacing-lg);
}
";

const INLINE_FORM_RULES: &str = "\
.form-inline {
	display: flex;
	align-items: center;
	gap: var(--spacing-md);
}
.form-inline .form-group {
	margin-bottom: 0;
}
";

/// Extra rules for the masonry card layout and inline forms
pub fn component_positions(ui: &TenantCustomization) -> String {
	let mut css = String::new();
	if ui.card_layout() == "masonry" {
		css.push_str(MASONRY_RULES);
	}
	if ui.form_layout() == "inline" {
		css.push_str(INLINE_FORM_RULES);
	}
	css
}

/// Maps a sm/md/lg knob onto a scale step, `md` being `default`
fn step<'a>(size: &str, default: &'a str) -> &'a str {
	match size {
		"sm" => "sm",
		"lg" => "lg",
		_ => default,
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTokens {
	pub radius: &'static str,
	pub font_size: &'static str,
	pub font_weight: &'static str,
	pub padding: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTokens {
	pub radius: &'static str,
	pub padding: String,
	pub shadow: String,
	pub border: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTokens {
	pub radius: &'static str,
	pub font_size: &'static str,
	pub padding: &'static str,
	pub focus_shadow: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableTokens {
	pub radius: &'static str,
	pub hover_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTokens {
	pub dashboard_grid: String,
	pub grid_template: &'static str,
	pub sidebar: String,
	pub header: String,
	pub form_layout: String,
	pub form_direction: &'static str,
	pub form_spacing: String,
	pub label_position: String,
	pub label_style: &'static str,
}

/// Everything the stylesheet template needs besides the custom properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTokens {
	pub button: ButtonTokens,
	pub card: CardTokens,
	pub input: InputTokens,
	pub table: TableTokens,
	pub layout: LayoutTokens,
	pub component_positions: String,
}

impl DerivedTokens {
	/// Derive from the resolved record, so an empty record and an explicit
	/// default record give the same tokens
	pub fn new(ui: &TenantCustomization) -> Self {
		let button_size = ui.button_size();
		let input_size = ui.input_size();

		DerivedTokens {
			button: ButtonTokens {
				radius: if ui.button_rounded() { "lg" } else { "md" },
				font_size: step(button_size, "base"),
				font_weight: if ui.button_style() == "ghost" { "medium" } else { "semibold" },
				padding: step(button_size, "md"),
			},
			card: CardTokens {
				radius: if ui.card_style() == "elevated" { "lg" } else { "md" },
				padding: ui.card_padding().to_string(),
				shadow: ui.card_shadow().to_string(),
				border: if ui.card_style() == "outlined" {
					"1px solid var(--surface-color)"
				} else {
					"none"
				},
			},
			input: InputTokens {
				radius: if ui.input_style() == "outlined" { "md" } else { "lg" },
				font_size: step(input_size, "base"),
				padding: step(input_size, "md"),
				focus_shadow: if ui.input_focus_style() == "ring" { FOCUS_RING_SHADOW } else { "none" },
			},
			table: TableTokens {
				radius: if ui.table_borders() { "var(--border-radius-md)" } else { "0" },
				hover_color: if ui.table_hover() { TABLE_HOVER_COLOR } else { "transparent" },
			},
			layout: LayoutTokens {
				dashboard_grid: ui.dashboard_grid().to_string(),
				grid_template: grid_template(ui.sidebar_position(), ui.header_position()),
				sidebar: ui.sidebar_position().to_string(),
				header: ui.header_position().to_string(),
				form_layout: ui.form_layout().to_string(),
				form_direction: if ui.form_layout() == "horizontal" { "row" } else { "column" },
				form_spacing: ui.form_spacing().to_string(),
				label_position: ui.label_position().to_string(),
				label_style: label_position_style(ui.label_position()),
			},
			component_positions: component_positions(ui),
		}
	}
}


// vim: ts=4
