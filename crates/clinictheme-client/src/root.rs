//! Document root abstraction
//!
//! A `StyleRoot` is whatever holds the live style state of a rendered
//! document: custom properties on the root element, one replaceable custom CSS
//! block and the roundedness flag of buttons.

use parking_lot::Mutex;
use std::collections::BTreeMap;

pub trait StyleRoot: Send + Sync {
	fn set_property(&self, name: &str, value: &str);
	fn remove_property(&self, name: &str);
	fn property(&self, name: &str) -> Option<String>;
	/// Snapshot of every custom property currently set
	fn properties(&self) -> BTreeMap<String, String>;

	/// Creates or replaces the custom CSS block
	fn set_custom_css(&self, css: &str);
	fn remove_custom_css(&self);
	fn custom_css(&self) -> Option<String>;

	fn set_buttons_rounded(&self, rounded: bool);
	fn buttons_rounded(&self) -> bool;

	/// Makes pending style changes visible
	fn force_layout(&self) {}
}

#[derive(Debug, Default)]
struct RootState {
	properties: BTreeMap<String, String>,
	custom_css: Option<String>,
	buttons_rounded: bool,
	layouts: u64,
}

/// `StyleRoot` kept in memory, for headless clients and tests
#[derive(Debug, Default)]
pub struct InMemoryStyleRoot {
	state: Mutex<RootState>,
}

impl InMemoryStyleRoot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of forced layouts so far
	pub fn layout_count(&self) -> u64 {
		self.state.lock().layouts
	}
}

impl StyleRoot for InMemoryStyleRoot {
	fn set_property(&self, name: &str, value: &str) {
		self.state.lock().properties.insert(name.to_string(), value.to_string());
	}

	fn remove_property(&self, name: &str) {
		self.state.lock().properties.remove(name);
	}

	fn property(&self, name: &str) -> Option<String> {
		self.state.lock().properties.get(name).cloned()
	}

	fn properties(&self) -> BTreeMap<String, String> {
		self.state.lock().properties.clone()
	}

	fn set_custom_css(&self, css: &str) {
		self.state.lock().custom_css = Some(css.to_string());
	}

	fn remove_custom_css(&self) {
		self.state.lock().custom_css = None;
	}

	fn custom_css(&self) -> Option<String> {
		self.state.lock().custom_css.clone()
	}

	fn set_buttons_rounded(&self, rounded: bool) {
		self.state.lock().buttons_rounded = rounded;
	}

	fn buttons_rounded(&self) -> bool {
		self.state.lock().buttons_rounded
	}

	fn force_layout(&self) {
		self.state.lock().layouts += 1;
	}
}

// vim: ts=4
