pub use clinictheme_core::prelude::*;

// vim: ts=4
