//! Applies tenant styling to a document root
//!
//! Every apply renders the complete defaults-merged `StyleState` and writes
//! all of it, so switching between tenants (or between draft and baseline)
//! never leaves stale values on the root.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clinictheme_style::StyleState;
use clinictheme_style::state::KNOWN_VARIABLES;
use clinictheme_types::tenant_adapter::TenantStyle;

use crate::prelude::*;
use crate::root::StyleRoot;
use crate::storage::{ClientStorage, TENANT_INFO_KEY};

/// Write a rendered state to the root
pub fn apply(root: &dyn StyleRoot, state: &StyleState) {
	for var in state.vars() {
		root.set_property(&var.name, &var.value);
	}
	match &state.custom_css {
		Some(css) => root.set_custom_css(css),
		None => root.remove_custom_css(),
	}
	root.set_buttons_rounded(state.buttons_rounded);
	root.force_layout();
}

pub struct StylingApplier {
	root: Arc<dyn StyleRoot>,
	storage: Arc<dyn ClientStorage>,
	initialized: AtomicBool,
}

impl std::fmt::Debug for StylingApplier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StylingApplier")
			.field("initialized", &self.initialized.load(Ordering::Relaxed))
			.finish_non_exhaustive()
	}
}

impl StylingApplier {
	pub fn new(root: Arc<dyn StyleRoot>, storage: Arc<dyn ClientStorage>) -> Self {
		Self { root, storage, initialized: AtomicBool::new(false) }
	}

	pub fn root(&self) -> &Arc<dyn StyleRoot> {
		&self.root
	}

	pub fn apply_tenant_styling(&self, tenant: &TenantStyle) {
		debug!("Applying tenant styling: {}", tenant.name.as_deref().unwrap_or("-"));
		apply(self.root.as_ref(), &StyleState::render(tenant));
	}

	/// Remove everything an apply could have set
	pub fn reset_styling(&self) {
		debug!("Resetting tenant styling");
		for name in KNOWN_VARIABLES.iter() {
			self.root.remove_property(name);
		}
		self.root.remove_custom_css();
		self.root.set_buttons_rounded(false);
		self.root.force_layout();
	}

	/// Apply the cached tenant record, once per applier
	///
	/// Returns whether a cached record was applied. Unreadable caches are
	/// logged and skipped.
	pub fn initialize_from_storage(&self) -> bool {
		if self.initialized.swap(true, Ordering::AcqRel) {
			return false;
		}
		match self.cached_tenant() {
			Ok(Some(tenant)) => {
				self.apply_tenant_styling(&tenant);
				info!("Initialized tenant styling from storage");
				true
			}
			Ok(None) => false,
			Err(err) => {
				warn!("Cannot initialize tenant styling from storage: {}", err);
				false
			}
		}
	}

	pub fn update_tenant_in_storage(&self, tenant: &TenantStyle) -> ClResult<()> {
		let json = serde_json::to_string(tenant)?;
		self.storage.set_item(TENANT_INFO_KEY, &json)
	}

	pub fn cached_tenant(&self) -> ClResult<Option<TenantStyle>> {
		match self.storage.get_item(TENANT_INFO_KEY)? {
			Some(json) => Ok(Some(serde_json::from_str(&json)?)),
			None => Ok(None),
		}
	}

	/// Custom properties currently set on the root
	pub fn current_variables(&self) -> BTreeMap<String, String> {
		self.root.properties()
	}
}


// vim: ts=4
