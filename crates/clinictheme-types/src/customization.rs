//! Tenant UI customization record
//!
//! Every leaf is optional. A missing (or empty) leaf falls back to the fixed
//! default independently of its siblings, so the record is always read through
//! the resolving accessors on [`TenantCustomization`] rather than directly.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Defaults for the non-scale knobs
pub mod defaults {
	pub const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";
	pub const LINE_HEIGHT: &str = "1.5";

	pub const BUTTON_STYLE: &str = "filled";
	pub const BUTTON_SIZE: &str = "md";
	pub const BUTTON_ROUNDED: bool = false;
	pub const CARD_STYLE: &str = "elevated";
	pub const CARD_PADDING: &str = "lg";
	pub const CARD_SHADOW: &str = "md";
	pub const INPUT_STYLE: &str = "outlined";
	pub const INPUT_SIZE: &str = "md";
	pub const INPUT_FOCUS_STYLE: &str = "ring";

	pub const SIDEBAR: &str = "left";
	pub const HEADER: &str = "top";
	pub const DASHBOARD_GRID: &str = "auto-fit";
	pub const CARD_LAYOUT: &str = "grid";
	pub const FORM_LAYOUT: &str = "vertical";
	pub const LABEL_POSITION: &str = "top";
	pub const FORM_SPACING: &str = "md";
	pub const TABLE_BORDERS: bool = false;
	pub const TABLE_HOVER: bool = false;
}

/// Generates a scale struct (serde field per step), its key enum and the
/// accessors shared by all scales.
macro_rules! scale {
	(
		$(#[$meta:meta])*
		$scale:ident / $key:ident {
			$($variant:ident $field:ident $label:literal = $default:literal;)+
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
		pub struct $scale {
			$(
				#[serde(rename = $label, default, skip_serializing_if = "Option::is_none")]
				pub $field: Option<String>,
			)+
		}

		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $key {
			$($variant,)+
		}

		impl $key {
			pub const ALL: &'static [$key] = &[$($key::$variant,)+];

			/// Key as it appears in JSON and in CSS variable names
			pub fn as_str(self) -> &'static str {
				match self {
					$($key::$variant => $label,)+
				}
			}

			pub fn default_value(self) -> &'static str {
				match self {
					$($key::$variant => $default,)+
				}
			}

			pub fn parse(key: &str) -> Option<Self> {
				match key {
					$($label => Some($key::$variant),)+
					_ => None,
				}
			}
		}

		impl $scale {
			/// Stored value, empty strings count as absent
			pub fn get(&self, key: $key) -> Option<&str> {
				let value = match key {
					$($key::$variant => self.$field.as_deref(),)+
				};
				value.filter(|v| !v.is_empty())
			}

			pub fn set(&mut self, key: $key, value: Option<String>) {
				match key {
					$($key::$variant => self.$field = value,)+
				}
			}

			pub fn resolve(&self, key: $key) -> &str {
				self.get(key).unwrap_or(key.default_value())
			}

			pub fn defaults() -> Self {
				Self { $($field: Some($default.to_string()),)+ }
			}
		}
	};
}

scale! {
	/// Named color roles
	Colors / ColorRole {
		Primary primary "primary" = "#2563eb";
		Secondary secondary "secondary" = "#059669";
		Accent accent "accent" = "#f59e0b";
		Success success "success" = "#10b981";
		Warning warning "warning" = "#f59e0b";
		Error error "error" = "#ef4444";
		Background background "background" = "#ffffff";
		Surface surface "surface" = "#f8fafc";
		Text text "text" = "#1f2937";
		TextSecondary text_secondary "textSecondary" = "#6b7280";
	}
}

impl ColorRole {
	/// CSS custom property carrying this role
	pub fn css_var(self) -> &'static str {
		match self {
			ColorRole::Primary => "--primary-color",
			ColorRole::Secondary => "--secondary-color",
			ColorRole::Accent => "--accent-color",
			ColorRole::Success => "--success-color",
			ColorRole::Warning => "--warning-color",
			ColorRole::Error => "--error-color",
			ColorRole::Background => "--background-color",
			ColorRole::Surface => "--surface-color",
			ColorRole::Text => "--text-color",
			ColorRole::TextSecondary => "--text-secondary-color",
		}
	}
}

scale! {
	FontSizeScale / FontSizeKey {
		Xs xs "xs" = "0.75rem";
		Sm sm "sm" = "0.875rem";
		Base base "base" = "1rem";
		Lg lg "lg" = "1.125rem";
		Xl xl "xl" = "1.25rem";
		Xl2 xl2 "2xl" = "1.5rem";
		Xl3 xl3 "3xl" = "1.875rem";
		Xl4 xl4 "4xl" = "2.25rem";
	}
}

scale! {
	FontWeightScale / FontWeightKey {
		Light light "light" = "300";
		Normal normal "normal" = "400";
		Medium medium "medium" = "500";
		Semibold semibold "semibold" = "600";
		Bold bold "bold" = "700";
	}
}

scale! {
	SpacingScale / SpacingKey {
		Xs xs "xs" = "0.25rem";
		Sm sm "sm" = "0.5rem";
		Md md "md" = "1rem";
		Lg lg "lg" = "1.5rem";
		Xl xl "xl" = "2rem";
		Xl2 xl2 "2xl" = "3rem";
	}
}

scale! {
	RadiusScale / RadiusKey {
		Sm sm "sm" = "0.25rem";
		Md md "md" = "0.375rem";
		Lg lg "lg" = "0.5rem";
		Xl xl "xl" = "0.75rem";
		Full full "full" = "9999px";
	}
}

scale! {
	ShadowScale / ShadowKey {
		Sm sm "sm" = "0 1px 2px 0 rgb(0 0 0 / 0.05)";
		Md md "md" = "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)";
		Lg lg "lg" = "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)";
		Xl xl "xl" = "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)";
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub font_family: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub line_height: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub font_size: Option<FontSizeScale>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub font_weight: Option<FontWeightScale>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyles {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub size: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rounded: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardStyles {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub padding: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shadow: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputStyles {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub size: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub focus_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentStyles {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub buttons: Option<ButtonStyles>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cards: Option<CardStyles>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inputs: Option<InputStyles>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardLayout {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sidebar: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub header: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grid: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub card_layout: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormLayout {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub layout: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label_position: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub spacing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableLayout {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub borders: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hover: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layouts {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dashboard: Option<DashboardLayout>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub forms: Option<FormLayout>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tables: Option<TableLayout>,
}

/// The per-tenant customization record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantCustomization {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub colors: Option<Colors>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub typography: Option<Typography>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub spacing: Option<SpacingScale>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub border_radius: Option<RadiusScale>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shadows: Option<ShadowScale>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub components: Option<ComponentStyles>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub layouts: Option<Layouts>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
	value.map(String::as_str).filter(|v| !v.is_empty())
}

impl TenantCustomization {
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Record with every leaf explicitly set to its default
	pub fn defaults() -> Self {
		Self {
			colors: Some(Colors::defaults()),
			typography: Some(Typography {
				font_family: Some(defaults::FONT_FAMILY.into()),
				line_height: Some(defaults::LINE_HEIGHT.into()),
				font_size: Some(FontSizeScale::defaults()),
				font_weight: Some(FontWeightScale::defaults()),
			}),
			spacing: Some(SpacingScale::defaults()),
			border_radius: Some(RadiusScale::defaults()),
			shadows: Some(ShadowScale::defaults()),
			components: Some(ComponentStyles {
				buttons: Some(ButtonStyles {
					style: Some(defaults::BUTTON_STYLE.into()),
					size: Some(defaults::BUTTON_SIZE.into()),
					rounded: Some(defaults::BUTTON_ROUNDED),
				}),
				cards: Some(CardStyles {
					style: Some(defaults::CARD_STYLE.into()),
					padding: Some(defaults::CARD_PADDING.into()),
					shadow: Some(defaults::CARD_SHADOW.into()),
				}),
				inputs: Some(InputStyles {
					style: Some(defaults::INPUT_STYLE.into()),
					size: Some(defaults::INPUT_SIZE.into()),
					focus_style: Some(defaults::INPUT_FOCUS_STYLE.into()),
				}),
			}),
			layouts: Some(Layouts {
				dashboard: Some(DashboardLayout {
					sidebar: Some(defaults::SIDEBAR.into()),
					header: Some(defaults::HEADER.into()),
					grid: Some(defaults::DASHBOARD_GRID.into()),
					card_layout: Some(defaults::CARD_LAYOUT.into()),
				}),
				forms: Some(FormLayout {
					layout: Some(defaults::FORM_LAYOUT.into()),
					label_position: Some(defaults::LABEL_POSITION.into()),
					spacing: Some(defaults::FORM_SPACING.into()),
				}),
				tables: Some(TableLayout {
					borders: Some(defaults::TABLE_BORDERS),
					hover: Some(defaults::TABLE_HOVER),
				}),
			}),
		}
	}

	// Resolving accessors
	//*********************
	pub fn color(&self, role: ColorRole) -> &str {
		self.colors.as_ref().and_then(|c| c.get(role)).unwrap_or(role.default_value())
	}

	pub fn font_family(&self) -> &str {
		self.typography
			.as_ref()
			.and_then(|t| non_empty(t.font_family.as_ref()))
			.unwrap_or(defaults::FONT_FAMILY)
	}

	pub fn line_height(&self) -> &str {
		self.typography
			.as_ref()
			.and_then(|t| non_empty(t.line_height.as_ref()))
			.unwrap_or(defaults::LINE_HEIGHT)
	}

	pub fn font_size(&self, key: FontSizeKey) -> &str {
		self.typography
			.as_ref()
			.and_then(|t| t.font_size.as_ref())
			.and_then(|s| s.get(key))
			.unwrap_or(key.default_value())
	}

	pub fn font_weight(&self, key: FontWeightKey) -> &str {
		self.typography
			.as_ref()
			.and_then(|t| t.font_weight.as_ref())
			.and_then(|s| s.get(key))
			.unwrap_or(key.default_value())
	}

	pub fn spacing(&self, key: SpacingKey) -> &str {
		self.spacing.as_ref().and_then(|s| s.get(key)).unwrap_or(key.default_value())
	}

	pub fn border_radius(&self, key: RadiusKey) -> &str {
		self.border_radius.as_ref().and_then(|s| s.get(key)).unwrap_or(key.default_value())
	}

	pub fn shadow(&self, key: ShadowKey) -> &str {
		self.shadows.as_ref().and_then(|s| s.get(key)).unwrap_or(key.default_value())
	}

	fn buttons(&self) -> Option<&ButtonStyles> {
		self.components.as_ref().and_then(|c| c.buttons.as_ref())
	}

	fn cards(&self) -> Option<&CardStyles> {
		self.components.as_ref().and_then(|c| c.cards.as_ref())
	}

	fn inputs(&self) -> Option<&InputStyles> {
		self.components.as_ref().and_then(|c| c.inputs.as_ref())
	}

	fn dashboard(&self) -> Option<&DashboardLayout> {
		self.layouts.as_ref().and_then(|l| l.dashboard.as_ref())
	}

	fn forms(&self) -> Option<&FormLayout> {
		self.layouts.as_ref().and_then(|l| l.forms.as_ref())
	}

	fn tables(&self) -> Option<&TableLayout> {
		self.layouts.as_ref().and_then(|l| l.tables.as_ref())
	}

	pub fn button_style(&self) -> &str {
		self.buttons().and_then(|b| non_empty(b.style.as_ref())).unwrap_or(defaults::BUTTON_STYLE)
	}

	pub fn button_size(&self) -> &str {
		self.buttons().and_then(|b| non_empty(b.size.as_ref())).unwrap_or(defaults::BUTTON_SIZE)
	}

	pub fn button_rounded(&self) -> bool {
		self.buttons().and_then(|b| b.rounded).unwrap_or(defaults::BUTTON_ROUNDED)
	}

	pub fn card_style(&self) -> &str {
		self.cards().and_then(|c| non_empty(c.style.as_ref())).unwrap_or(defaults::CARD_STYLE)
	}

	pub fn card_padding(&self) -> &str {
		self.cards().and_then(|c| non_empty(c.padding.as_ref())).unwrap_or(defaults::CARD_PADDING)
	}

	pub fn card_shadow(&self) -> &str {
		self.cards().and_then(|c| non_empty(c.shadow.as_ref())).unwrap_or(defaults::CARD_SHADOW)
	}

	pub fn input_style(&self) -> &str {
		self.inputs().and_then(|i| non_empty(i.style.as_ref())).unwrap_or(defaults::INPUT_STYLE)
	}

	pub fn input_size(&self) -> &str {
		self.inputs().and_then(|i| non_empty(i.size.as_ref())).unwrap_or(defaults::INPUT_SIZE)
	}

	pub fn input_focus_style(&self) -> &str {
		self.inputs()
			.and_then(|i| non_empty(i.focus_style.as_ref()))
			.unwrap_or(defaults::INPUT_FOCUS_STYLE)
	}

	pub fn sidebar_position(&self) -> &str {
		self.dashboard().and_then(|d| non_empty(d.sidebar.as_ref())).unwrap_or(defaults::SIDEBAR)
	}

	pub fn header_position(&self) -> &str {
		self.dashboard().and_then(|d| non_empty(d.header.as_ref())).unwrap_or(defaults::HEADER)
	}

	pub fn dashboard_grid(&self) -> &str {
		self.dashboard()
			.and_then(|d| non_empty(d.grid.as_ref()))
			.unwrap_or(defaults::DASHBOARD_GRID)
	}

	pub fn card_layout(&self) -> &str {
		self.dashboard()
			.and_then(|d| non_empty(d.card_layout.as_ref()))
			.unwrap_or(defaults::CARD_LAYOUT)
	}

	pub fn form_layout(&self) -> &str {
		self.forms().and_then(|f| non_empty(f.layout.as_ref())).unwrap_or(defaults::FORM_LAYOUT)
	}

	pub fn label_position(&self) -> &str {
		self.forms()
			.and_then(|f| non_empty(f.label_position.as_ref()))
			.unwrap_or(defaults::LABEL_POSITION)
	}

	pub fn form_spacing(&self) -> &str {
		self.forms().and_then(|f| non_empty(f.spacing.as_ref())).unwrap_or(defaults::FORM_SPACING)
	}

	pub fn table_borders(&self) -> bool {
		self.tables().and_then(|t| t.borders).unwrap_or(defaults::TABLE_BORDERS)
	}

	pub fn table_hover(&self) -> bool {
		self.tables().and_then(|t| t.hover).unwrap_or(defaults::TABLE_HOVER)
	}

	// Editing
	//*********
	fn typography_mut(&mut self) -> &mut Typography {
		self.typography.get_or_insert_with(Default::default)
	}

	fn buttons_mut(&mut self) -> &mut ButtonStyles {
		self.components.get_or_insert_with(Default::default).buttons.get_or_insert_with(Default::default)
	}

	fn cards_mut(&mut self) -> &mut CardStyles {
		self.components.get_or_insert_with(Default::default).cards.get_or_insert_with(Default::default)
	}

	fn inputs_mut(&mut self) -> &mut InputStyles {
		self.components.get_or_insert_with(Default::default).inputs.get_or_insert_with(Default::default)
	}

	fn dashboard_mut(&mut self) -> &mut DashboardLayout {
		self.layouts.get_or_insert_with(Default::default).dashboard.get_or_insert_with(Default::default)
	}

	fn forms_mut(&mut self) -> &mut FormLayout {
		self.layouts.get_or_insert_with(Default::default).forms.get_or_insert_with(Default::default)
	}

	fn tables_mut(&mut self) -> &mut TableLayout {
		self.layouts.get_or_insert_with(Default::default).tables.get_or_insert_with(Default::default)
	}

	/// Set (or clear, with `None`) a single leaf, creating intermediate levels
	pub fn set(&mut self, field: CustomizationField, value: Option<FieldValue>) -> ClResult<()> {
		use CustomizationField as F;

		if field.is_flag() {
			let flag = match value {
				None => None,
				Some(FieldValue::Flag(b)) => Some(b),
				Some(FieldValue::Text(_)) => {
					return Err(Error::ValidationError(format!("{} expects a boolean", field)));
				}
			};
			match field {
				F::ButtonRounded => self.buttons_mut().rounded = flag,
				F::TableBorders => self.tables_mut().borders = flag,
				F::TableHover => self.tables_mut().hover = flag,
				_ => {}
			}
			return Ok(());
		}

		let text = match value {
			None => None,
			Some(FieldValue::Text(s)) => Some(s),
			Some(FieldValue::Flag(_)) => {
				return Err(Error::ValidationError(format!("{} expects a string", field)));
			}
		};
		match field {
			F::Color(role) => self.colors.get_or_insert_with(Default::default).set(role, text),
			F::FontFamily => self.typography_mut().font_family = text,
			F::LineHeight => self.typography_mut().line_height = text,
			F::FontSize(key) => {
				self.typography_mut().font_size.get_or_insert_with(Default::default).set(key, text);
			}
			F::FontWeight(key) => {
				self.typography_mut().font_weight.get_or_insert_with(Default::default).set(key, text);
			}
			F::Spacing(key) => self.spacing.get_or_insert_with(Default::default).set(key, text),
			F::BorderRadius(key) => {
				self.border_radius.get_or_insert_with(Default::default).set(key, text);
			}
			F::Shadow(key) => self.shadows.get_or_insert_with(Default::default).set(key, text),
			F::ButtonStyle => self.buttons_mut().style = text,
			F::ButtonSize => self.buttons_mut().size = text,
			F::CardStyle => self.cards_mut().style = text,
			F::CardPadding => self.cards_mut().padding = text,
			F::CardShadow => self.cards_mut().shadow = text,
			F::InputStyle => self.inputs_mut().style = text,
			F::InputSize => self.inputs_mut().size = text,
			F::InputFocusStyle => self.inputs_mut().focus_style = text,
			F::DashboardSidebar => self.dashboard_mut().sidebar = text,
			F::DashboardHeader => self.dashboard_mut().header = text,
			F::DashboardGrid => self.dashboard_mut().grid = text,
			F::DashboardCardLayout => self.dashboard_mut().card_layout = text,
			F::FormLayout => self.forms_mut().layout = text,
			F::FormLabelPosition => self.forms_mut().label_position = text,
			F::FormSpacing => self.forms_mut().spacing = text,
			F::ButtonRounded | F::TableBorders | F::TableHover => {}
		}
		Ok(())
	}

	/// Stored (unresolved) value of a single leaf
	pub fn get(&self, field: CustomizationField) -> Option<FieldValue> {
		use CustomizationField as F;

		let text = |v: Option<&String>| v.cloned().map(FieldValue::Text);
		let typography = self.typography.as_ref();
		match field {
			F::Color(role) => self.colors.as_ref().and_then(|c| c.get(role)).map(FieldValue::from),
			F::FontFamily => text(typography.and_then(|t| t.font_family.as_ref())),
			F::LineHeight => text(typography.and_then(|t| t.line_height.as_ref())),
			F::FontSize(key) => typography
				.and_then(|t| t.font_size.as_ref())
				.and_then(|s| s.get(key))
				.map(FieldValue::from),
			F::FontWeight(key) => typography
				.and_then(|t| t.font_weight.as_ref())
				.and_then(|s| s.get(key))
				.map(FieldValue::from),
			F::Spacing(key) => self.spacing.as_ref().and_then(|s| s.get(key)).map(FieldValue::from),
			F::BorderRadius(key) => {
				self.border_radius.as_ref().and_then(|s| s.get(key)).map(FieldValue::from)
			}
			F::Shadow(key) => self.shadows.as_ref().and_then(|s| s.get(key)).map(FieldValue::from),
			F::ButtonStyle => text(self.buttons().and_then(|b| b.style.as_ref())),
			F::ButtonSize => text(self.buttons().and_then(|b| b.size.as_ref())),
			F::ButtonRounded => self.buttons().and_then(|b| b.rounded).map(FieldValue::Flag),
			F::CardStyle => text(self.cards().and_then(|c| c.style.as_ref())),
			F::CardPadding => text(self.cards().and_then(|c| c.padding.as_ref())),
			F::CardShadow => text(self.cards().and_then(|c| c.shadow.as_ref())),
			F::InputStyle => text(self.inputs().and_then(|i| i.style.as_ref())),
			F::InputSize => text(self.inputs().and_then(|i| i.size.as_ref())),
			F::InputFocusStyle => text(self.inputs().and_then(|i| i.focus_style.as_ref())),
			F::DashboardSidebar => text(self.dashboard().and_then(|d| d.sidebar.as_ref())),
			F::DashboardHeader => text(self.dashboard().and_then(|d| d.header.as_ref())),
			F::DashboardGrid => text(self.dashboard().and_then(|d| d.grid.as_ref())),
			F::DashboardCardLayout => text(self.dashboard().and_then(|d| d.card_layout.as_ref())),
			F::FormLayout => text(self.forms().and_then(|f| f.layout.as_ref())),
			F::FormLabelPosition => text(self.forms().and_then(|f| f.label_position.as_ref())),
			F::FormSpacing => text(self.forms().and_then(|f| f.spacing.as_ref())),
			F::TableBorders => self.tables().and_then(|t| t.borders).map(FieldValue::Flag),
			F::TableHover => self.tables().and_then(|t| t.hover).map(FieldValue::Flag),
		}
	}
}

// Typed leaf addressing //
//***********************//
/// Address of a single leaf in the customization record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomizationField {
	Color(ColorRole),
	FontFamily,
	LineHeight,
	FontSize(FontSizeKey),
	FontWeight(FontWeightKey),
	Spacing(SpacingKey),
	BorderRadius(RadiusKey),
	Shadow(ShadowKey),
	ButtonStyle,
	ButtonSize,
	ButtonRounded,
	CardStyle,
	CardPadding,
	CardShadow,
	InputStyle,
	InputSize,
	InputFocusStyle,
	DashboardSidebar,
	DashboardHeader,
	DashboardGrid,
	DashboardCardLayout,
	FormLayout,
	FormLabelPosition,
	FormSpacing,
	TableBorders,
	TableHover,
}

impl CustomizationField {
	/// Every addressable leaf, in record order
	pub fn all() -> Vec<CustomizationField> {
		use CustomizationField as F;

		let mut fields: Vec<F> = ColorRole::ALL.iter().copied().map(F::Color).collect();
		fields.extend([F::FontFamily, F::LineHeight]);
		fields.extend(FontSizeKey::ALL.iter().copied().map(F::FontSize));
		fields.extend(FontWeightKey::ALL.iter().copied().map(F::FontWeight));
		fields.extend(SpacingKey::ALL.iter().copied().map(F::Spacing));
		fields.extend(RadiusKey::ALL.iter().copied().map(F::BorderRadius));
		fields.extend(ShadowKey::ALL.iter().copied().map(F::Shadow));
		fields.extend([
			F::ButtonStyle,
			F::ButtonSize,
			F::ButtonRounded,
			F::CardStyle,
			F::CardPadding,
			F::CardShadow,
			F::InputStyle,
			F::InputSize,
			F::InputFocusStyle,
			F::DashboardSidebar,
			F::DashboardHeader,
			F::DashboardGrid,
			F::DashboardCardLayout,
			F::FormLayout,
			F::FormLabelPosition,
			F::FormSpacing,
			F::TableBorders,
			F::TableHover,
		]);
		fields
	}

	pub fn is_flag(self) -> bool {
		matches!(
			self,
			CustomizationField::ButtonRounded
				| CustomizationField::TableBorders
				| CustomizationField::TableHover
		)
	}

	/// Parse a dot-separated path such as `colors.primary` or
	/// `typography.fontSize.2xl`
	pub fn parse(path: &str) -> ClResult<Self> {
		use CustomizationField as F;

		let segments: Vec<&str> = path.split('.').collect();
		let field = match segments.as_slice() {
			["colors", key] => ColorRole::parse(key).map(F::Color),
			["typography", "fontFamily"] => Some(F::FontFamily),
			["typography", "lineHeight"] => Some(F::LineHeight),
			["typography", "fontSize", key] => FontSizeKey::parse(key).map(F::FontSize),
			["typography", "fontWeight", key] => FontWeightKey::parse(key).map(F::FontWeight),
			["spacing", key] => SpacingKey::parse(key).map(F::Spacing),
			["borderRadius", key] => RadiusKey::parse(key).map(F::BorderRadius),
			["shadows", key] => ShadowKey::parse(key).map(F::Shadow),
			["components", "buttons", "style"] => Some(F::ButtonStyle),
			["components", "buttons", "size"] => Some(F::ButtonSize),
			["components", "buttons", "rounded"] => Some(F::ButtonRounded),
			["components", "cards", "style"] => Some(F::CardStyle),
			["components", "cards", "padding"] => Some(F::CardPadding),
			["components", "cards", "shadow"] => Some(F::CardShadow),
			["components", "inputs", "style"] => Some(F::InputStyle),
			["components", "inputs", "size"] => Some(F::InputSize),
			["components", "inputs", "focusStyle"] => Some(F::InputFocusStyle),
			["layouts", "dashboard", "sidebar"] => Some(F::DashboardSidebar),
			["layouts", "dashboard", "header"] => Some(F::DashboardHeader),
			["layouts", "dashboard", "grid"] => Some(F::DashboardGrid),
			["layouts", "dashboard", "cardLayout"] => Some(F::DashboardCardLayout),
			["layouts", "forms", "layout"] => Some(F::FormLayout),
			["layouts", "forms", "labelPosition"] => Some(F::FormLabelPosition),
			["layouts", "forms", "spacing"] => Some(F::FormSpacing),
			["layouts", "tables", "borders"] => Some(F::TableBorders),
			["layouts", "tables", "hover"] => Some(F::TableHover),
			_ => None,
		};
		field.ok_or_else(|| Error::ValidationError(format!("unknown customization path '{}'", path)))
	}
}

impl std::fmt::Display for CustomizationField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use CustomizationField as F;

		match self {
			F::Color(role) => write!(f, "colors.{}", role.as_str()),
			F::FontFamily => write!(f, "typography.fontFamily"),
			F::LineHeight => write!(f, "typography.lineHeight"),
			F::FontSize(key) => write!(f, "typography.fontSize.{}", key.as_str()),
			F::FontWeight(key) => write!(f, "typography.fontWeight.{}", key.as_str()),
			F::Spacing(key) => write!(f, "spacing.{}", key.as_str()),
			F::BorderRadius(key) => write!(f, "borderRadius.{}", key.as_str()),
			F::Shadow(key) => write!(f, "shadows.{}", key.as_str()),
			F::ButtonStyle => write!(f, "components.buttons.style"),
			F::ButtonSize => write!(f, "components.buttons.size"),
			F::ButtonRounded => write!(f, "components.buttons.rounded"),
			F::CardStyle => write!(f, "components.cards.style"),
			F::CardPadding => write!(f, "components.cards.padding"),
			F::CardShadow => write!(f, "components.cards.shadow"),
			F::InputStyle => write!(f, "components.inputs.style"),
			F::InputSize => write!(f, "components.inputs.size"),
			F::InputFocusStyle => write!(f, "components.inputs.focusStyle"),
			F::DashboardSidebar => write!(f, "layouts.dashboard.sidebar"),
			F::DashboardHeader => write!(f, "layouts.dashboard.header"),
			F::DashboardGrid => write!(f, "layouts.dashboard.grid"),
			F::DashboardCardLayout => write!(f, "layouts.dashboard.cardLayout"),
			F::FormLayout => write!(f, "layouts.forms.layout"),
			F::FormLabelPosition => write!(f, "layouts.forms.labelPosition"),
			F::FormSpacing => write!(f, "layouts.forms.spacing"),
			F::TableBorders => write!(f, "layouts.tables.borders"),
			F::TableHover => write!(f, "layouts.tables.hover"),
		}
	}
}

/// Leaf value: text for style values, flag for the boolean knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	Text(String),
	Flag(bool),
}

impl From<&str> for FieldValue {
	fn from(s: &str) -> Self {
		FieldValue::Text(s.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(s: String) -> Self {
		FieldValue::Text(s)
	}
}

impl From<bool> for FieldValue {
	fn from(b: bool) -> Self {
		FieldValue::Flag(b)
	}
}

impl FieldValue {
	/// `null` clears the leaf
	pub fn from_json(value: serde_json::Value) -> ClResult<Option<Self>> {
		match value {
			serde_json::Value::Null => Ok(None),
			serde_json::Value::String(s) => Ok(Some(FieldValue::Text(s))),
			serde_json::Value::Bool(b) => Ok(Some(FieldValue::Flag(b))),
			serde_json::Value::Number(n) => Ok(Some(FieldValue::Text(n.to_string()))),
			_ => Err(Error::ValidationError("customization leaves must be scalars".into())),
		}
	}
}

/// A single editor change: set or clear one leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationEdit {
	pub field: CustomizationField,
	pub value: Option<FieldValue>,
}

impl CustomizationEdit {
	pub fn new(field: CustomizationField, value: impl Into<FieldValue>) -> Self {
		Self { field, value: Some(value.into()) }
	}

	pub fn clear(field: CustomizationField) -> Self {
		Self { field, value: None }
	}

	/// Build an edit from a dot path and a JSON value
	pub fn from_path(path: &str, value: serde_json::Value) -> ClResult<Self> {
		Ok(Self { field: CustomizationField::parse(path)?, value: FieldValue::from_json(value)? })
	}
}

impl TenantCustomization {
	pub fn apply_edit(&mut self, edit: CustomizationEdit) -> ClResult<()> {
		self.set(edit.field, edit.value)
	}
}


// vim: ts=4
