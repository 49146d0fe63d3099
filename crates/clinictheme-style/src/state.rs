//! Complete style state of a tenant
//!
//! `StyleState::render` is pure: it resolves every leaf of the customization
//! record against the defaults, so applying a state never leaves values of a
//! previously applied tenant behind.

use serde::Serialize;
use std::sync::LazyLock;

use clinictheme_types::customization::{
	ColorRole, FontSizeKey, FontWeightKey, RadiusKey, ShadowKey, SpacingKey, TenantCustomization,
};
use clinictheme_types::tenant_adapter::TenantStyle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleVar {
	pub name: String,
	pub value: String,
}

/// Variables rendered under one comment heading in the stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarGroup {
	pub title: &'static str,
	pub vars: Vec<StyleVar>,
}

impl VarGroup {
	fn new(title: &'static str) -> Self {
		Self { title, vars: Vec::new() }
	}

	fn push(&mut self, name: impl Into<String>, value: &str) {
		self.vars.push(StyleVar { name: name.into(), value: value.to_string() });
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleState {
	pub groups: Vec<VarGroup>,
	pub custom_css: Option<String>,
	pub buttons_rounded: bool,
}

/// Every custom property a `StyleState` can set
pub static KNOWN_VARIABLES: LazyLock<Box<[String]>> = LazyLock::new(|| {
	StyleState::render_customization(&TenantCustomization::default())
		.vars()
		.map(|var| var.name.clone())
		.collect()
});

impl StyleState {
	pub fn render(tenant: &TenantStyle) -> Self {
		let mut state = Self::render_customization(tenant.customization());
		state.custom_css = tenant.custom_css().map(str::to_string);
		state
	}

	pub fn render_customization(ui: &TenantCustomization) -> Self {
		let mut colors = VarGroup::new("Color Variables");
		for role in ColorRole::ALL {
			colors.push(role.css_var(), ui.color(*role));
		}

		let mut typography = VarGroup::new("Typography Variables");
		typography.push("--font-family", ui.font_family());
		for key in FontSizeKey::ALL {
			typography.push(format!("--font-size-{}", key.as_str()), ui.font_size(*key));
		}
		for key in FontWeightKey::ALL {
			typography.push(format!("--font-weight-{}", key.as_str()), ui.font_weight(*key));
		}
		typography.push("--line-height", ui.line_height());

		let mut spacing = VarGroup::new("Spacing Variables");
		for key in SpacingKey::ALL {
			spacing.push(format!("--spacing-{}", key.as_str()), ui.spacing(*key));
		}

		let mut radius = VarGroup::new("Border Radius Variables");
		for key in RadiusKey::ALL {
			radius.push(format!("--border-radius-{}", key.as_str()), ui.border_radius(*key));
		}

		let mut shadows = VarGroup::new("Shadow Variables");
		for key in ShadowKey::ALL {
			shadows.push(format!("--shadow-{}", key.as_str()), ui.shadow(*key));
		}

		let mut components = VarGroup::new("Component Variables");
		components.push("--button-style", ui.button_style());
		components.push("--button-size", ui.button_size());
		components.push("--card-style", ui.card_style());
		components.push("--card-padding", ui.card_padding());
		components.push("--card-shadow", ui.card_shadow());
		components.push("--input-style", ui.input_style());
		components.push("--input-size", ui.input_size());
		components.push("--input-focus-style", ui.input_focus_style());

		let mut layout = VarGroup::new("Layout Variables");
		layout.push("--sidebar-position", ui.sidebar_position());
		layout.push("--header-position", ui.header_position());
		layout.push("--dashboard-grid", ui.dashboard_grid());
		layout.push("--card-layout", ui.card_layout());
		layout.push("--form-layout", ui.form_layout());
		layout.push("--label-position", ui.label_position());
		layout.push("--form-spacing", ui.form_spacing());

		StyleState {
			groups: vec![colors, typography, spacing, radius, shadows, components, layout],
			custom_css: None,
			buttons_rounded: ui.button_rounded(),
		}
	}

	pub fn vars(&self) -> impl Iterator<Item = &StyleVar> {
		self.groups.iter().flat_map(|group| group.vars.iter())
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.vars().find(|var| var.name == name).map(|var| var.value.as_str())
	}
}


// vim: ts=4
