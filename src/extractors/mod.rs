// src/extractors/mod.rs
pub mod field;
pub mod grid;
pub mod template;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use field::extract_field;
pub use grid::{tables_to_grids, TableGrid};
pub use template::{validate_layout, ChangeRequestForm, Field, TableRole};
