//! accord-core: vendor supply agreement engine.
//!
//! Turns a free-text prompt into a structured eleven-section agreement in
//! three stages: regex field extraction, fixed-template block rendering,
//! and delimiter parsing with all-or-nothing validation.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`generate_agreement()`] -- prompt to validated [`Agreement`]
//! - [`generate_block()`] -- prompt to one named block body
//! - [`extract_fields()`] -- prompt to [`ExtractedFields`]
//! - [`BlockName`] -- the closed set of eleven section names
//! - [`GenerateError`] -- generation error type
//!
//! Individual stage functions are also re-exported for callers that need
//! to render or parse on their own (the CLI's refine pass does both).

pub mod blocks;
pub mod error;
pub mod extract;
pub mod generate;
pub mod identifiers;
pub mod parse;
pub mod render;

// ── Convenience re-exports: key types ────────────────────────────────

pub use blocks::{Agreement, BlockName};
pub use error::GenerateError;
pub use extract::{EntityDetails, ExtractedFields, ExtractionRule, Field, EXTRACTION_RULES};
pub use identifiers::ContractIdentifiers;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use extract::{extract_entity, extract_field, extract_fields};
pub use generate::{generate_agreement, generate_block};
pub use parse::{parse_blocks, parse_document};
pub use render::{render_block, render_document};
