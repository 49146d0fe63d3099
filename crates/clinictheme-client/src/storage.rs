//! Persistent client storage
//!
//! String key/value store surviving client restarts. The tenant record is
//! cached as JSON under [`TENANT_INFO_KEY`].

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::prelude::*;

pub const TENANT_INFO_KEY: &str = "tenantInfo";

pub trait ClientStorage: Send + Sync {
	fn get_item(&self, key: &str) -> ClResult<Option<String>>;
	fn set_item(&self, key: &str, value: &str) -> ClResult<()>;
	fn remove_item(&self, key: &str) -> ClResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
	items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}
}

impl ClientStorage for MemoryStorage {
	fn get_item(&self, key: &str) -> ClResult<Option<String>> {
		Ok(self.items.lock().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> ClResult<()> {
		self.items.lock().insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove_item(&self, key: &str) -> ClResult<()> {
		self.items.lock().remove(key);
		Ok(())
	}
}

/// Storage backed by a single JSON object file
///
/// The whole file is rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
	path: PathBuf,
	lock: Mutex<()>,
}

impl FileStorage {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self { path: path.as_ref().to_path_buf(), lock: Mutex::new(()) }
	}

	fn load(&self) -> ClResult<HashMap<String, String>> {
		match std::fs::read_to_string(&self.path) {
			Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
			Ok(content) => Ok(serde_json::from_str(&content)?),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
			Err(err) => Err(err.into()),
		}
	}

	fn store(&self, items: &HashMap<String, String>) -> ClResult<()> {
		let tmp = self.path.with_extension("tmp");
		std::fs::write(&tmp, serde_json::to_vec(items)?)?;
		std::fs::rename(&tmp, &self.path)?;
		Ok(())
	}
}

impl ClientStorage for FileStorage {
	fn get_item(&self, key: &str) -> ClResult<Option<String>> {
		let _guard = self.lock.lock();
		Ok(self.load()?.remove(key))
	}

	fn set_item(&self, key: &str, value: &str) -> ClResult<()> {
		let _guard = self.lock.lock();
		let mut items = self.load()?;
		items.insert(key.to_string(), value.to_string());
		self.store(&items)
	}

	fn remove_item(&self, key: &str) -> ClResult<()> {
		let _guard = self.lock.lock();
		let mut items = self.load()?;
		if items.remove(key).is_some() {
			self.store(&items)?;
		}
		Ok(())
	}
}


// vim: ts=4
