//! Whitelist validation of customization values
//!
//! Values end up inside CSS declarations and class names, so every leaf is
//! checked against the shape its property accepts before it is stored.

use regex::Regex;

use crate::prelude::*;
use clinictheme_types::customization::{
	CustomizationField, FieldValue, ShadowKey, SpacingKey, TenantCustomization,
};

pub const MAX_CUSTOM_CSS_LEN: usize = 64 * 1024;
const MAX_VALUE_LEN: usize = 200;

const BUTTON_STYLES: &[&str] = &["filled", "outlined", "ghost"];
const SIZES: &[&str] = &["sm", "md", "lg"];
const CARD_STYLES: &[&str] = &["elevated", "outlined", "flat"];
const INPUT_STYLES: &[&str] = &["outlined", "filled", "underlined"];
const FOCUS_STYLES: &[&str] = &["ring", "underline", "none"];
const SIDEBAR_POSITIONS: &[&str] = &["left", "right", "top", "bottom"];
const HEADER_POSITIONS: &[&str] = &["top", "fixed", "sticky"];
const DASHBOARD_GRIDS: &[&str] = &["auto-fit", "auto-fill", "fixed"];
const CARD_LAYOUTS: &[&str] = &["grid", "list", "masonry"];
const FORM_LAYOUTS: &[&str] = &["vertical", "horizontal", "inline"];
const LABEL_POSITIONS: &[&str] = &["top", "left", "inside"];

// One family name: quoted with a matching pair of quotes, or bare words
const FONT_FAMILY_ITEM: &str = r#"(?:"[A-Za-z0-9 _-]+"|'[A-Za-z0-9 _-]+'|[A-Za-z0-9_-]+(?: +[A-Za-z0-9_-]+)*)"#;

fn compile(pattern: &str) -> ClResult<Regex> {
	Regex::new(pattern).map_err(|e| Error::ConfigError(format!("regex error: {}", e)))
}

#[derive(Debug)]
pub struct ValueValidator {
	color: Regex,
	length: Regex,
	line_height: Regex,
	font_weight: Regex,
	font_family: Regex,
	shadow: Regex,
}

impl ValueValidator {
	pub fn new() -> ClResult<Self> {
		Ok(Self {
			color: compile(
				r"^(#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(rgb|rgba|hsl|hsla)\([0-9.,%/ ]+\)|[a-zA-Z]{3,20})$",
			)?,
			length: compile(r"^(0|[0-9]*\.?[0-9]+(px|rem|em|%|vh|vw))$")?,
			line_height: compile(r"^[0-9]*\.?[0-9]+(px|rem|em|%)?$")?,
			font_weight: compile(r"^([1-9]00|normal|bold|lighter|bolder)$")?,
			font_family: compile(&format!(
				r"^ *{item} *(?:, *{item} *)*$",
				item = FONT_FAMILY_ITEM
			))?,
			shadow: compile(r"^(none|[0-9a-zA-Z .,()%/#-]+)$")?,
		})
	}

	/// Validate a single leaf value
	pub fn validate_field(&self, field: CustomizationField, value: &FieldValue) -> ClResult<()> {
		use CustomizationField as F;

		let text = match value {
			FieldValue::Flag(_) if field.is_flag() => return Ok(()),
			FieldValue::Text(text) if !field.is_flag() => text.as_str(),
			_ => return Err(Error::ValidationError(format!("{}: wrong value type", field))),
		};
		if text.len() > MAX_VALUE_LEN {
			return Err(Error::ValidationError(format!("{}: value too long", field)));
		}

		let ok = match field {
			F::Color(_) => self.color.is_match(text),
			F::FontFamily => self.font_family.is_match(text),
			F::LineHeight => self.line_height.is_match(text),
			F::FontSize(_) | F::Spacing(_) | F::BorderRadius(_) => self.length.is_match(text),
			F::FontWeight(_) => self.font_weight.is_match(text),
			F::Shadow(_) => self.shadow.is_match(text),
			F::ButtonStyle => BUTTON_STYLES.contains(&text),
			F::ButtonSize | F::InputSize => SIZES.contains(&text),
			F::CardStyle => CARD_STYLES.contains(&text),
			F::CardPadding | F::FormSpacing => SpacingKey::parse(text).is_some(),
			F::CardShadow => ShadowKey::parse(text).is_some(),
			F::InputStyle => INPUT_STYLES.contains(&text),
			F::InputFocusStyle => FOCUS_STYLES.contains(&text),
			F::DashboardSidebar => SIDEBAR_POSITIONS.contains(&text),
			F::DashboardHeader => HEADER_POSITIONS.contains(&text),
			F::DashboardGrid => DASHBOARD_GRIDS.contains(&text),
			F::DashboardCardLayout => CARD_LAYOUTS.contains(&text),
			F::FormLayout => FORM_LAYOUTS.contains(&text),
			F::FormLabelPosition => LABEL_POSITIONS.contains(&text),
			F::ButtonRounded | F::TableBorders | F::TableHover => false,
		};

		if ok {
			Ok(())
		} else {
			Err(Error::ValidationError(format!("{}: invalid value '{}'", field, text)))
		}
	}

	/// Validate every stored leaf of a record
	pub fn validate(&self, ui: &TenantCustomization) -> ClResult<()> {
		for field in CustomizationField::all() {
			if let Some(value) = ui.get(field) {
				self.validate_field(field, &value)?;
			}
		}
		Ok(())
	}

	pub fn validate_custom_css(&self, css: &str) -> ClResult<()> {
		if css.len() > MAX_CUSTOM_CSS_LEN {
			return Err(Error::ValidationError("customCSS: too long".into()));
		}
		if css.contains("</") {
			return Err(Error::ValidationError("customCSS: markup is not allowed".into()));
		}
		Ok(())
	}
}


// vim: ts=4
