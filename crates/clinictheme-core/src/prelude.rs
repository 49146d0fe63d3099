pub use crate::app::{App, AppState};
pub use clinictheme_types::prelude::*;

// vim: ts=4
