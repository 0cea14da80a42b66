//! Block identity and the assembled agreement.
//!
//! A vendor supply agreement is made of eleven fixed sections. [`BlockName`]
//! is the closed set of their names; [`Agreement`] holds the eleven body
//! texts once a document has been parsed and validated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The eleven sections of a vendor supply agreement, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockName {
    Title,
    ContractId,
    PartiesIntro,
    Buyer,
    Supplier,
    Scope,
    Commercial,
    Delivery,
    Quality,
    Penalties,
    Confidentiality,
}

impl BlockName {
    /// All block names, in document order.
    pub const ALL: [BlockName; 11] = [
        BlockName::Title,
        BlockName::ContractId,
        BlockName::PartiesIntro,
        BlockName::Buyer,
        BlockName::Supplier,
        BlockName::Scope,
        BlockName::Commercial,
        BlockName::Delivery,
        BlockName::Quality,
        BlockName::Penalties,
        BlockName::Confidentiality,
    ];

    /// The snake_case key used in parsed agreements and API responses.
    pub fn key(self) -> &'static str {
        match self {
            BlockName::Title => "title",
            BlockName::ContractId => "contract_id",
            BlockName::PartiesIntro => "parties_intro",
            BlockName::Buyer => "buyer",
            BlockName::Supplier => "supplier",
            BlockName::Scope => "scope",
            BlockName::Commercial => "commercial",
            BlockName::Delivery => "delivery",
            BlockName::Quality => "quality",
            BlockName::Penalties => "penalties",
            BlockName::Confidentiality => "confidentiality",
        }
    }

    /// The uppercase label used inside `[<LABEL> BLOCK START]` delimiters.
    /// Multi-word labels use spaces, not underscores.
    pub fn marker(self) -> &'static str {
        match self {
            BlockName::Title => "TITLE",
            BlockName::ContractId => "CONTRACT ID",
            BlockName::PartiesIntro => "PARTIES INTRO",
            BlockName::Buyer => "BUYER",
            BlockName::Supplier => "SUPPLIER",
            BlockName::Scope => "SCOPE",
            BlockName::Commercial => "COMMERCIAL",
            BlockName::Delivery => "DELIVERY",
            BlockName::Quality => "QUALITY",
            BlockName::Penalties => "PENALTIES",
            BlockName::Confidentiality => "CONFIDENTIALITY",
        }
    }

    /// Resolve a snake_case key back to a block name.
    pub fn from_key(key: &str) -> Option<BlockName> {
        BlockName::ALL.iter().copied().find(|name| name.key() == key)
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete parsed agreement: all eleven block bodies, trimmed and
/// non-empty. Field order matches document order, so serialized output
/// lists the sections the way the document reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agreement {
    pub title: String,
    pub contract_id: String,
    pub parties_intro: String,
    pub buyer: String,
    pub supplier: String,
    pub scope: String,
    pub commercial: String,
    pub delivery: String,
    pub quality: String,
    pub penalties: String,
    pub confidentiality: String,
}

impl Agreement {
    /// Body text for one block.
    pub fn get(&self, name: BlockName) -> &str {
        match name {
            BlockName::Title => &self.title,
            BlockName::ContractId => &self.contract_id,
            BlockName::PartiesIntro => &self.parties_intro,
            BlockName::Buyer => &self.buyer,
            BlockName::Supplier => &self.supplier,
            BlockName::Scope => &self.scope,
            BlockName::Commercial => &self.commercial,
            BlockName::Delivery => &self.delivery,
            BlockName::Quality => &self.quality,
            BlockName::Penalties => &self.penalties,
            BlockName::Confidentiality => &self.confidentiality,
        }
    }
}
