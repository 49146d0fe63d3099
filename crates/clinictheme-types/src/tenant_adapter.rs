//! Adapter that stores tenants together with their UI customization record.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::{
	customization::TenantCustomization,
	prelude::*,
	types::serialize_timestamp_iso,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TenantType {
	Hospital,
	Clinic,
	MedicalCenter,
}

impl TenantType {
	pub fn as_str(self) -> &'static str {
		match self {
			TenantType::Hospital => "hospital",
			TenantType::Clinic => "clinic",
			TenantType::MedicalCenter => "medical-center",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"hospital" => Some(TenantType::Hospital),
			"clinic" => Some(TenantType::Clinic),
			"medical-center" => Some(TenantType::MedicalCenter),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
	#[default]
	Active,
	Inactive,
	Suspended,
}

impl TenantStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			TenantStatus::Active => "active",
			TenantStatus::Inactive => "inactive",
			TenantStatus::Suspended => "suspended",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"active" => Some(TenantStatus::Active),
			"inactive" => Some(TenantStatus::Inactive),
			"suspended" => Some(TenantStatus::Suspended),
			_ => None,
		}
	}
}

/// A tenant (hospital, clinic or medical center)
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
	#[serde(rename = "id")]
	pub tn_id: TnId,
	pub slug: Box<str>,
	pub name: Box<str>,
	#[serde(rename = "type")]
	pub typ: TenantType,
	pub email: Box<str>,
	pub phone: Option<Box<str>>,
	pub status: TenantStatus,
	pub ui_customization: TenantCustomization,
	#[serde(rename = "customCSS")]
	pub custom_css: Option<Box<str>>,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub created_at: Timestamp,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub updated_at: Timestamp,
}

/// Tenant record as seen by the styling layer
///
/// Unknown fields are ignored so that a full tenant JSON can be read into it.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantStyle {
	pub id: Option<TnId>,
	pub slug: Option<String>,
	pub name: Option<String>,
	pub ui_customization: Option<TenantCustomization>,
	#[serde(rename = "customCSS")]
	pub custom_css: Option<String>,
}

impl TenantStyle {
	pub fn customization(&self) -> &TenantCustomization {
		static EMPTY: TenantCustomization = TenantCustomization {
			colors: None,
			typography: None,
			spacing: None,
			border_radius: None,
			shadows: None,
			components: None,
			layouts: None,
		};
		self.ui_customization.as_ref().unwrap_or(&EMPTY)
	}

	/// Custom CSS, if the tenant has a non-empty one
	pub fn custom_css(&self) -> Option<&str> {
		self.custom_css.as_deref().filter(|css| !css.trim().is_empty())
	}
}

#[derive(Debug)]
pub struct CreateTenantData<'a> {
	pub slug: &'a str,
	pub name: &'a str,
	pub typ: TenantType,
	pub email: &'a str,
	pub phone: Option<&'a str>,
}

/// Partial tenant update
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantData {
	#[serde(default)]
	pub name: Patch<String>,
	#[serde(default)]
	pub status: Patch<TenantStatus>,
	#[serde(default)]
	pub ui_customization: Patch<TenantCustomization>,
	#[serde(default, rename = "customCSS")]
	pub custom_css: Patch<String>,
}

#[derive(Debug, Default)]
pub struct ListTenantOptions {
	pub status: Option<TenantStatus>,
}

#[async_trait]
pub trait TenantAdapter: Debug + Send + Sync {
	/// Creates a tenant with an empty customization record
	async fn create_tenant(&self, data: &CreateTenantData<'_>) -> ClResult<TnId>;

	async fn read_tenant(&self, tn_id: TnId) -> ClResult<Tenant>;

	/// Looks up a tenant by slug
	async fn read_tn_id(&self, slug: &str) -> ClResult<TnId>;

	/// Returns `{ name, uiCustomization, customCSS }` as stored, without
	/// interpreting the customization record
	async fn read_style_source(&self, tn_id: TnId) -> ClResult<serde_json::Value>;

	async fn list_tenants(&self, opts: &ListTenantOptions) -> ClResult<Vec<Tenant>>;

	async fn update_tenant(&self, tn_id: TnId, data: &UpdateTenantData) -> ClResult<()>;

	/// Deletes the tenant and its customization record
	async fn delete_tenant(&self, tn_id: TnId) -> ClResult<()>;
}


// vim: ts=4
