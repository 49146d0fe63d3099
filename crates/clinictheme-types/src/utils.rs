//! Utility functions

use crate::types::now;

/// Derive a URL-safe slug from a tenant name
///
/// Lowercases, collapses runs of non-alphanumeric characters into a single
/// `-` and trims leading/trailing dashes. Names with no usable characters get
/// a timestamp based slug.
///
/// # Examples
/// - `"St. Mary's Hospital"` → `"st-mary-s-hospital"`
/// - `"  City Clinic  "` → `"city-clinic"`
pub fn slugify(name: &str) -> String {
	let mut slug = String::with_capacity(name.len());
	let mut pending_dash = false;

	for c in name.chars() {
		if c.is_ascii_alphanumeric() {
			if pending_dash && !slug.is_empty() {
				slug.push('-');
			}
			pending_dash = false;
			slug.push(c.to_ascii_lowercase());
		} else {
			pending_dash = true;
		}
	}

	if slug.is_empty() {
		format!("tenant-{}", now())
	} else if slug.bytes().all(|b| b.is_ascii_digit()) {
		format!("tenant-{}", slug)
	} else {
		slug
	}
}

/// Accepts a non-empty trimmed string up to `max` characters
pub fn non_empty_trimmed(value: &str, max: usize) -> Option<&str> {
	let value = value.trim();
	(!value.is_empty() && value.chars().count() <= max).then_some(value)
}


// vim: ts=4
