//! Customization editor session
//!
//! Holds two copies of the tenant's customization record: the baseline (what
//! the backend has) and the draft (what the operator is editing). With preview
//! on, every draft change is pushed to the applier immediately.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use clinictheme_types::customization::{CustomizationEdit, TenantCustomization};
use clinictheme_types::tenant_adapter::TenantStyle;

use crate::applier::StylingApplier;
use crate::prelude::*;

/// Body of the config update request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
	pub ui_customization: TenantCustomization,
}

/// Backend the editor saves to
#[async_trait]
pub trait ConfigClient: Send + Sync {
	/// Persists the update and returns the updated tenant
	async fn update_config(&self, update: &ConfigUpdate) -> ClResult<TenantStyle>;
}

/// The human operating the editor
pub trait OperatorPrompt: Send + Sync {
	fn confirm(&self, message: &str) -> bool;
	fn notify(&self, message: &str);
}

pub struct CustomizerSession {
	tenant: TenantStyle,
	baseline: TenantCustomization,
	draft: TenantCustomization,
	dirty: bool,
	preview: bool,
	open: bool,
	saving: bool,
	applier: Arc<StylingApplier>,
	client: Arc<dyn ConfigClient>,
	prompt: Arc<dyn OperatorPrompt>,
}

impl std::fmt::Debug for CustomizerSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CustomizerSession")
			.field("draft", &self.draft)
			.field("dirty", &self.dirty)
			.field("preview", &self.preview)
			.field("open", &self.open)
			.finish_non_exhaustive()
	}
}

impl CustomizerSession {
	pub fn new(
		tenant: TenantStyle,
		applier: Arc<StylingApplier>,
		client: Arc<dyn ConfigClient>,
		prompt: Arc<dyn OperatorPrompt>,
	) -> Self {
		let baseline = tenant.customization().clone();
		Self {
			draft: baseline.clone(),
			baseline,
			tenant,
			dirty: false,
			preview: false,
			open: true,
			saving: false,
			applier,
			client,
			prompt,
		}
	}

	pub fn tenant(&self) -> &TenantStyle {
		&self.tenant
	}

	pub fn baseline(&self) -> &TenantCustomization {
		&self.baseline
	}

	pub fn draft(&self) -> &TenantCustomization {
		&self.draft
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	pub fn is_preview(&self) -> bool {
		self.preview
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn is_saving(&self) -> bool {
		self.saving
	}

	pub fn can_save(&self) -> bool {
		self.dirty && !self.saving
	}

	/// The session's tenant with `ui` as its customization
	fn tenant_with(&self, ui: &TenantCustomization) -> TenantStyle {
		TenantStyle { ui_customization: Some(ui.clone()), ..self.tenant.clone() }
	}

	pub fn handle_customization_change(&mut self, edit: CustomizationEdit) -> ClResult<()> {
		debug!("Changing {} to {:?}", edit.field, edit.value);
		self.draft.apply_edit(edit)?;
		self.dirty = true;

		if self.preview {
			self.applier.apply_tenant_styling(&self.tenant_with(&self.draft));
		}
		Ok(())
	}

	/// Dot-path form of [`Self::handle_customization_change`]
	pub fn handle_path_change(&mut self, path: &str, value: serde_json::Value) -> ClResult<()> {
		self.handle_customization_change(CustomizationEdit::from_path(path, value)?)
	}

	/// Returns the new preview state
	pub fn toggle_preview(&mut self) -> bool {
		self.preview = !self.preview;
		let ui = if self.preview { &self.draft } else { &self.baseline };
		self.applier.apply_tenant_styling(&self.tenant_with(ui));
		self.preview
	}

	/// Save the draft; on failure the session is left as it was
	///
	/// A clean draft is not sent.
	pub async fn handle_save(&mut self) -> ClResult<()> {
		if !self.dirty {
			debug!("Nothing to save");
			return Ok(());
		}
		if self.saving {
			return Err(Error::Conflict("save already in progress".into()));
		}
		self.saving = true;
		let update = ConfigUpdate { ui_customization: self.draft.clone() };
		let res = self.client.update_config(&update).await;
		self.saving = false;

		match res {
			Ok(updated) => {
				self.baseline = self.draft.clone();
				self.tenant = TenantStyle {
					ui_customization: Some(self.draft.clone()),
					..updated
				};
				self.dirty = false;
				self.applier.apply_tenant_styling(&self.tenant);
				if let Err(err) = self.applier.update_tenant_in_storage(&self.tenant) {
					warn!("Cannot update cached tenant: {}", err);
				}
				self.open = false;
				info!("Customization saved");
				self.prompt.notify("UI customization saved successfully!");
				Ok(())
			}
			Err(err) => {
				warn!("Error saving customization: {}", err);
				self.prompt.notify("Failed to save customization. Please try again.");
				Err(err)
			}
		}
	}

	/// Clear the whole customization after operator confirmation
	///
	/// Returns false when the operator declined.
	pub fn reset_to_defaults(&mut self) -> bool {
		if !self.prompt.confirm("Are you sure you want to reset all customizations to default?") {
			return false;
		}
		self.draft = TenantCustomization::default();
		self.baseline = TenantCustomization::default();
		self.dirty = true;
		self.applier.reset_styling();
		self.preview = false;
		true
	}

	pub fn handle_cancel(&mut self) {
		self.draft = self.baseline.clone();
		self.dirty = false;
		self.applier.apply_tenant_styling(&self.tenant_with(&self.baseline));
		self.preview = false;
		self.open = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::root::{InMemoryStyleRoot, StyleRoot};
	use crate::storage::MemoryStorage;
	use clinictheme_types::customization::{ColorRole, CustomizationField};
	use parking_lot::Mutex;
	use serde_json::json;

	#[derive(Default)]
	struct MockClient {
		fail: bool,
		sent: Mutex<Vec<serde_json::Value>>,
	}

	#[async_trait]
	impl ConfigClient for MockClient {
		async fn update_config(&self, update: &ConfigUpdate) -> ClResult<TenantStyle> {
			self.sent.lock().push(serde_json::to_value(update)?);
			if self.fail {
				return Err(Error::NetworkError("connection refused".into()));
			}
			Ok(TenantStyle {
				name: Some("City Clinic".into()),
				ui_customization: Some(update.ui_customization.clone()),
				..Default::default()
			})
		}
	}

	struct Prompt {
		answer: bool,
		notes: Mutex<Vec<String>>,
	}

	impl OperatorPrompt for Prompt {
		fn confirm(&self, _message: &str) -> bool {
			self.answer
		}

		fn notify(&self, message: &str) {
			self.notes.lock().push(message.to_string());
		}
	}

	struct Fixture {
		root: Arc<InMemoryStyleRoot>,
		applier: Arc<StylingApplier>,
		client: Arc<MockClient>,
		prompt: Arc<Prompt>,
		session: CustomizerSession,
	}

	fn fixture(fail: bool, answer: bool) -> Fixture {
		let root = Arc::new(InMemoryStyleRoot::new());
		let applier =
			Arc::new(StylingApplier::new(root.clone(), Arc::new(MemoryStorage::new())));
		let client = Arc::new(MockClient { fail, ..Default::default() });
		let prompt = Arc::new(Prompt { answer, notes: Mutex::new(Vec::new()) });
		let tenant: TenantStyle = serde_json::from_value(json!({
			"name": "City Clinic",
			"uiCustomization": {"colors": {"secondary": "#00ff00"}}
		}))
		.unwrap();
		applier.apply_tenant_styling(&tenant);
		let session =
			CustomizerSession::new(tenant, applier.clone(), client.clone(), prompt.clone());
		Fixture { root, applier, client, prompt, session }
	}

	fn primary(value: &str) -> CustomizationEdit {
		CustomizationEdit::new(CustomizationField::Color(ColorRole::Primary), value)
	}

	#[test]
	fn test_change_without_preview() {
		let mut f = fixture(false, true);
		f.session.handle_customization_change(primary("#ff0000")).unwrap();
		assert!(f.session.is_dirty());
		assert!(f.session.can_save());
		assert_eq!(f.session.draft().color(ColorRole::Primary), "#ff0000");
		assert_eq!(f.root.property("--primary-color").as_deref(), Some("#2563eb"));
	}

	#[test]
	fn test_preview_toggle() {
		let mut f = fixture(false, true);
		f.session.handle_customization_change(primary("#ff0000")).unwrap();
		assert!(f.session.toggle_preview());
		assert_eq!(f.root.property("--primary-color").as_deref(), Some("#ff0000"));

		f.session.handle_customization_change(primary("#00ffff")).unwrap();
		assert_eq!(f.root.property("--primary-color").as_deref(), Some("#00ffff"));

		assert!(!f.session.toggle_preview());
		assert_eq!(f.root.property("--primary-color").as_deref(), Some("#2563eb"));
		assert_eq!(f.root.property("--secondary-color").as_deref(), Some("#00ff00"));
		assert_eq!(f.session.draft().color(ColorRole::Primary), "#00ffff");
	}

	#[test]
	fn test_path_change() {
		let mut f = fixture(false, true);
		f.session.handle_path_change("layouts.dashboard.sidebar", json!("right")).unwrap();
		assert_eq!(f.session.draft().sidebar_position(), "right");
		assert!(f.session.handle_path_change("layouts.nowhere", json!("x")).is_err());
	}

	#[tokio::test]
	async fn test_save_success() {
		let mut f = fixture(false, true);
		f.session.handle_customization_change(primary("#ff0000")).unwrap();
		f.session.handle_save().await.unwrap();

		assert!(!f.session.is_dirty());
		assert!(!f.session.is_open());
		assert_eq!(f.session.baseline(), f.session.draft());
		assert_eq!(f.root.property("--primary-color").as_deref(), Some("#ff0000"));

		let cached = f.applier.cached_tenant().unwrap().unwrap();
		assert_eq!(cached.customization().color(ColorRole::Primary), "#ff0000");
		assert_eq!(cached.customization().color(ColorRole::Secondary), "#00ff00");

		let sent = f.client.sent.lock().clone();
		assert_eq!(
			sent,
			vec![json!({"uiCustomization": {"colors": {"primary": "#ff0000", "secondary": "#00ff00"}}})]
		);
		assert_eq!(f.prompt.notes.lock().len(), 1);
	}

	#[tokio::test]
	async fn test_save_clean_draft_sends_nothing() {
		let mut f = fixture(false, true);
		f.session.handle_save().await.unwrap();

		assert!(f.client.sent.lock().is_empty());
		assert!(f.session.is_open());
		assert!(f.prompt.notes.lock().is_empty());
		assert!(f.applier.cached_tenant().unwrap().is_none());
	}

	#[tokio::test]
	async fn test_save_failure_keeps_state() {
		let mut f = fixture(true, true);
		f.session.handle_customization_change(primary("#ff0000")).unwrap();
		let before = f.session.draft().clone();

		assert!(f.session.handle_save().await.is_err());
		assert!(f.session.is_dirty());
		assert!(f.session.is_open());
		assert!(!f.session.is_saving());
		assert_eq!(f.session.draft(), &before);
		assert_eq!(f.session.baseline().color(ColorRole::Primary), "#2563eb");
		assert!(f.applier.cached_tenant().unwrap().is_none());
		assert_eq!(
			f.prompt.notes.lock().as_slice(),
			["Failed to save customization. Please try again.".to_string()]
		);
	}

	#[test]
	fn test_reset_to_defaults() {
		let mut f = fixture(false, true);
		f.session.handle_customization_change(primary("#ff0000")).unwrap();
		f.session.toggle_preview();

		assert!(f.session.reset_to_defaults());
		assert!(f.session.draft().is_empty());
		assert!(f.session.baseline().is_empty());
		assert!(f.session.is_dirty());
		assert!(!f.session.is_preview());
		assert!(f.root.properties().is_empty());
	}

	#[test]
	fn test_reset_declined() {
		let mut f = fixture(false, false);
		f.session.handle_customization_change(primary("#ff0000")).unwrap();
		assert!(!f.session.reset_to_defaults());
		assert_eq!(f.session.draft().color(ColorRole::Primary), "#ff0000");
	}

	#[test]
	fn test_cancel() {
		let mut f = fixture(false, true);
		f.session.handle_customization_change(primary("#ff0000")).unwrap();
		f.session.toggle_preview();
		f.session.handle_cancel();

		assert_eq!(f.session.draft(), f.session.baseline());
		assert!(!f.session.is_dirty());
		assert!(!f.session.is_preview());
		assert!(!f.session.is_open());
		assert_eq!(f.root.property("--primary-color").as_deref(), Some("#2563eb"));
		assert!(!f.session.can_save());
	}
}

// vim: ts=4
