//! Delimiter parsing: recover named blocks from rendered text and validate
//! a complete agreement.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::blocks::{Agreement, BlockName};
use crate::error::GenerateError;

/// Matches one delimited block: `[<NAME> BLOCK START]` through the nearest
/// following `[... BLOCK END]` marker. Marker names never contain brackets
/// or newlines, so a bracketed placeholder inside a body (`[BUYER ADDRESS]`)
/// does not terminate the capture. The closing marker's name is not required
/// to match the opening name: refined (model-edited) documents may come back
/// with mangled closers, so any end marker terminates the capture.
static BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[([^\[\]\n]*?) BLOCK START\](.*?)\[[^\[\]\n]*? BLOCK END\]")
        .expect("block pattern must compile")
});

/// Scan `content` for delimited blocks and return the recognized ones,
/// trimmed, keyed by name. Captured names are normalized (lower-cased,
/// spaces to underscores); unknown names are skipped; a repeated name keeps
/// its last occurrence.
pub fn parse_blocks(content: &str) -> BTreeMap<BlockName, String> {
    let mut blocks = BTreeMap::new();
    for caps in BLOCK_PATTERN.captures_iter(content) {
        let key = caps[1].to_lowercase().replace(' ', "_");
        if let Some(name) = BlockName::from_key(&key) {
            blocks.insert(name, caps[2].trim().to_string());
        }
    }
    blocks
}

/// Parse a rendered document into an [`Agreement`], requiring all eleven
/// blocks to be present with non-empty bodies. The error names the first
/// missing block in document order.
pub fn parse_document(content: &str) -> Result<Agreement, GenerateError> {
    let mut blocks = parse_blocks(content);
    let mut take = |name: BlockName| match blocks.remove(&name) {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(GenerateError::MissingBlock(name)),
    };
    Ok(Agreement {
        title: take(BlockName::Title)?,
        contract_id: take(BlockName::ContractId)?,
        parties_intro: take(BlockName::PartiesIntro)?,
        buyer: take(BlockName::Buyer)?,
        supplier: take(BlockName::Supplier)?,
        scope: take(BlockName::Scope)?,
        commercial: take(BlockName::Commercial)?,
        delivery: take(BlockName::Delivery)?,
        quality: take(BlockName::Quality)?,
        penalties: take(BlockName::Penalties)?,
        confidentiality: take(BlockName::Confidentiality)?,
    })
}
