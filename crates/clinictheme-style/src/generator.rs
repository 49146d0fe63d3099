//! Tenant stylesheet generation with Handlebars
//!
//! The stylesheet is a fixed template: the `:root` block carries every custom
//! property of the tenant's `StyleState`, the rules below refer to them and to
//! the derived tokens. The tenant's raw custom CSS is appended verbatim at the
//! very end.

use handlebars::Handlebars;
use serde::Serialize;

use crate::prelude::*;
use crate::state::{StyleState, VarGroup};
use crate::tokens::DerivedTokens;
use clinictheme_types::tenant_adapter::TenantStyle;

const TEMPLATE_NAME: &str = "tenant";
const TENANT_TEMPLATE: &str = include_str!("../templates/tenant.css.hbs");

/// Served when the tenant's stylesheet cannot be generated
pub const FALLBACK_CSS: &str = "\
:root {
	--primary-color: #2563eb;
	--secondary-color: #059669;
	--background-color: #ffffff;
	--text-color: #1f2937;
}

body {
	font-family: Inter, system-ui, sans-serif;
	color: var(--text-color);
	background-color: var(--background-color);
}
";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateVars<'a> {
	tenant_name: &'a str,
	groups: &'a [VarGroup],
	#[serde(flatten)]
	tokens: DerivedTokens,
}

/// Result of a generation; the fallback is still valid CSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedCss {
	Rendered(String),
	Fallback(String),
}

impl GeneratedCss {
	pub fn is_fallback(&self) -> bool {
		matches!(self, GeneratedCss::Fallback(_))
	}

	pub fn as_str(&self) -> &str {
		match self {
			GeneratedCss::Rendered(css) | GeneratedCss::Fallback(css) => css,
		}
	}

	pub fn into_string(self) -> String {
		match self {
			GeneratedCss::Rendered(css) | GeneratedCss::Fallback(css) => css,
		}
	}
}

/// Stylesheet generator, immutable after construction
pub struct CssGenerator {
	handlebars: Handlebars<'static>,
}

impl std::fmt::Debug for CssGenerator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CssGenerator").finish_non_exhaustive()
	}
}

impl CssGenerator {
	pub fn new() -> ClResult<Self> {
		let mut handlebars = Handlebars::new();
		handlebars.set_strict_mode(true);
		handlebars.register_escape_fn(handlebars::no_escape);
		handlebars
			.register_template_string(TEMPLATE_NAME, TENANT_TEMPLATE)
			.map_err(|e| Error::ConfigError(format!("Invalid stylesheet template: {}", e)))?;

		Ok(Self { handlebars })
	}

	/// Generate the stylesheet of a loosely typed tenant record
	///
	/// Never fails: anything that cannot be rendered yields the fallback
	/// stylesheet.
	pub fn generate(&self, tenant: &serde_json::Value) -> GeneratedCss {
		let res = Self::parse_tenant(tenant).and_then(|tenant| self.render(&tenant));
		match res {
			Ok(css) => GeneratedCss::Rendered(css),
			Err(err) => {
				error!("Error generating CSS: {}", err);
				GeneratedCss::Fallback(FALLBACK_CSS.to_string())
			}
		}
	}

	fn parse_tenant(tenant: &serde_json::Value) -> ClResult<TenantStyle> {
		if !tenant.is_object() {
			return Err(Error::ValidationError("tenant record is not an object".into()));
		}
		serde_json::from_value(tenant.clone())
			.map_err(|e| Error::ValidationError(format!("malformed tenant record: {}", e)))
	}

	/// Render the stylesheet of a typed tenant record
	pub fn render(&self, tenant: &TenantStyle) -> ClResult<String> {
		let state = StyleState::render(tenant);
		let name = tenant.name.as_deref().filter(|name| !name.is_empty()).unwrap_or("Unknown");
		let name = name.replace("*/", "* /");

		let vars = TemplateVars {
			tenant_name: &name,
			groups: &state.groups,
			tokens: DerivedTokens::new(tenant.customization()),
		};
		let mut css = self
			.handlebars
			.render(TEMPLATE_NAME, &vars)
			.map_err(|e| Error::Internal(format!("Failed to render stylesheet: {}", e)))?;

		if let Some(custom_css) = &state.custom_css {
			css.push_str("\n/* Custom CSS Overrides */\n");
			css.push_str(custom_css);
			css.push('\n');
		}
		Ok(css)
	}
}


// vim: ts=4
