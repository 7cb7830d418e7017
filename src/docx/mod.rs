// src/docx/mod.rs
pub mod model;
pub mod reader;

#[cfg(test)]
pub mod fixture;

// Re-export key document types for convenience
pub use model::Document;
pub use reader::load;
