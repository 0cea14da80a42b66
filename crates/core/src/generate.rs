//! Generation pipeline: prompt in, agreement (or one block) out.
//!
//! Extraction, rendering, and parsing compose into two entry points. Both
//! are pure: the prompt and the reference date are the only inputs, so
//! concurrent callers can never observe each other's state and tests can
//! pin the date.

use time::Date;

use crate::blocks::{Agreement, BlockName};
use crate::error::GenerateError;
use crate::extract::extract_fields;
use crate::identifiers::ContractIdentifiers;
use crate::parse::{parse_blocks, parse_document};
use crate::render::{render_block, render_document};

/// Generate a complete agreement from a free-text prompt.
///
/// Renders all eleven blocks from the extracted fields and re-parses the
/// joined document, so the output is exactly what a later
/// [`parse_document`] of the rendered text would see.
pub fn generate_agreement(prompt: &str, today: Date) -> Result<Agreement, GenerateError> {
    let fields = extract_fields(prompt);
    let identifiers = ContractIdentifiers::from_date(today)?;
    let document = render_document(&fields, &identifiers);
    parse_document(&document)
}

/// Generate a single named block from a free-text prompt.
///
/// Extraction runs against the full prompt exactly as in
/// [`generate_agreement`]; only the requested block is rendered and
/// re-parsed. Returns the block body, or an empty string if the isolated
/// fragment cannot be parsed back or the contract dates cannot be derived.
pub fn generate_block(name: BlockName, prompt: &str, today: Date) -> String {
    let fields = extract_fields(prompt);
    let identifiers = match ContractIdentifiers::from_date(today) {
        Ok(identifiers) => identifiers,
        Err(_) => return String::new(),
    };
    let fragment = render_block(name, &fields, &identifiers);
    parse_blocks(&fragment).remove(&name).unwrap_or_default()
}
