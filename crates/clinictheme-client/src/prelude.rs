pub use clinictheme_types::prelude::*;

// vim: ts=4
