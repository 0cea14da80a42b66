//! Field extraction: fixed regex rules over a free-text prompt.
//!
//! Each of the nine recognized fields has one rule in [`EXTRACTION_RULES`]:
//! a case-insensitive pattern with a single capture group, and a fallback
//! used when the pattern finds nothing. Extraction is total — a prompt that
//! matches no rule at all still yields a complete [`ExtractedFields`], every
//! value a fallback.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The nine fields the extractor recognizes, in rule-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BuyerName,
    SupplierName,
    Product,
    PoReference,
    Price,
    PaymentTerms,
    EffectiveDate,
    Delivery,
    QualityStandards,
}

impl Field {
    /// All fields, in rule-table order.
    pub const ALL: [Field; 9] = [
        Field::BuyerName,
        Field::SupplierName,
        Field::Product,
        Field::PoReference,
        Field::Price,
        Field::PaymentTerms,
        Field::EffectiveDate,
        Field::Delivery,
        Field::QualityStandards,
    ];

    /// The snake_case key used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            Field::BuyerName => "buyer_name",
            Field::SupplierName => "supplier_name",
            Field::Product => "product",
            Field::PoReference => "po_reference",
            Field::Price => "price",
            Field::PaymentTerms => "payment_terms",
            Field::EffectiveDate => "effective_date",
            Field::Delivery => "delivery",
            Field::QualityStandards => "quality_standards",
        }
    }

    fn rule(self) -> &'static ExtractionRule {
        &EXTRACTION_RULES[self as usize]
    }
}

/// One extraction rule: a pattern whose first capture group yields the
/// field's value, and the fallback substituted when the pattern does not
/// match or captures only whitespace.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRule {
    pub field: Field,
    pub pattern: &'static str,
    pub fallback: &'static str,
}

/// The extraction rule table, in [`Field`] order.
///
/// Patterns search the whole prompt (not anchored to line starts); the
/// first match anywhere wins. Fallbacks are bracketed uppercase
/// placeholders, except `quality_standards`, which falls back to a usable
/// default standards sentence.
pub const EXTRACTION_RULES: [ExtractionRule; 9] = [
    ExtractionRule {
        field: Field::BuyerName,
        pattern: r"(?i)(?:buyer|purchaser)[: ]([A-Za-z0-9 &]+)",
        fallback: "[BUYER NAME]",
    },
    ExtractionRule {
        field: Field::SupplierName,
        pattern: r"(?i)(?:supplier|vendor)[: ]([A-Za-z0-9 &]+)",
        fallback: "[SUPPLIER NAME]",
    },
    ExtractionRule {
        field: Field::Product,
        pattern: r"(?i)(?:product|item|scope)[: ]([^\n,.]+)",
        fallback: "[PRODUCT DESCRIPTION]",
    },
    ExtractionRule {
        field: Field::PoReference,
        pattern: r"(?i)(?:po|purchase order):?\s*(#?\w+)",
        fallback: "[PO REFERENCE]",
    },
    // The currency symbol stays outside the capture group; the value is
    // the digit run, re-prefixed with a fixed symbol by the template.
    ExtractionRule {
        field: Field::Price,
        pattern: r"(?i)(?:price|amount|value):?\s*(?:₹|\$|€)?(\d[\d,]*)",
        fallback: "[TOTAL VALUE]",
    },
    ExtractionRule {
        field: Field::PaymentTerms,
        pattern: r"(?i)(?:payment terms|payment)[: ]([^\n,.]+)",
        fallback: "[PAYMENT TERMS]",
    },
    ExtractionRule {
        field: Field::EffectiveDate,
        pattern: r"(?i)(?:effective date|start date)[: ]([^\n,.]+)",
        fallback: "[EFFECTIVE DATE]",
    },
    ExtractionRule {
        field: Field::Delivery,
        pattern: r"(?i)(?:delivery|shipping)[: ]([^\n,.]+)",
        fallback: "[DELIVERY SCHEDULE AND ADDRESS]",
    },
    ExtractionRule {
        field: Field::QualityStandards,
        pattern: r"(?i)(?:quality standards|standards)[: ]([^\n,.]+)",
        fallback: "ISO 22000 and FSSAI food safety standards",
    },
];

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    EXTRACTION_RULES
        .iter()
        .map(|rule| Regex::new(rule.pattern).expect("extraction pattern must compile"))
        .collect()
});

/// The nine extracted field values. Every field is always populated:
/// captured prompt text where a rule matched, the rule's fallback
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub buyer_name: String,
    pub supplier_name: String,
    pub product: String,
    pub po_reference: String,
    pub price: String,
    pub payment_terms: String,
    pub effective_date: String,
    pub delivery: String,
    pub quality_standards: String,
}

impl ExtractedFields {
    /// Value for one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::BuyerName => &self.buyer_name,
            Field::SupplierName => &self.supplier_name,
            Field::Product => &self.product,
            Field::PoReference => &self.po_reference,
            Field::Price => &self.price,
            Field::PaymentTerms => &self.payment_terms,
            Field::EffectiveDate => &self.effective_date,
            Field::Delivery => &self.delivery,
            Field::QualityStandards => &self.quality_standards,
        }
    }
}

/// Apply one field's rule to the prompt. Returns the trimmed capture, or
/// `None` when the rule does not match or the capture trims to nothing.
pub fn extract_field(field: Field, prompt: &str) -> Option<String> {
    let captured = PATTERNS[field as usize]
        .captures(prompt)
        .and_then(|caps| caps.get(1))?;
    let value = captured.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn value_or_fallback(field: Field, prompt: &str) -> String {
    extract_field(field, prompt).unwrap_or_else(|| field.rule().fallback.to_string())
}

/// Run all nine rules against the prompt. Never fails.
pub fn extract_fields(prompt: &str) -> ExtractedFields {
    ExtractedFields {
        buyer_name: value_or_fallback(Field::BuyerName, prompt),
        supplier_name: value_or_fallback(Field::SupplierName, prompt),
        product: value_or_fallback(Field::Product, prompt),
        po_reference: value_or_fallback(Field::PoReference, prompt),
        price: value_or_fallback(Field::Price, prompt),
        payment_terms: value_or_fallback(Field::PaymentTerms, prompt),
        effective_date: value_or_fallback(Field::EffectiveDate, prompt),
        delivery: value_or_fallback(Field::Delivery, prompt),
        quality_standards: value_or_fallback(Field::QualityStandards, prompt),
    }
}

/// A three-part entity description pulled from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDetails {
    pub name: String,
    pub address: String,
    pub representative: String,
}

/// Extract a `name, address, representative` triple introduced by `label`,
/// with the parts separated by commas or semicolons and an optional
/// "represented by" marker before the representative.
///
/// No internal caller uses this yet; it is kept as public capability for
/// richer party blocks.
pub fn extract_entity(prompt: &str, label: &str) -> Option<EntityDetails> {
    let pattern = format!(
        r"(?i){}[: ]([^\n,;]+)[,;]([^\n,;]+)[,;]\s*(?:represented by|rep|by)?\s*([^\n.]+)",
        regex::escape(label)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(prompt)?;
    Some(EntityDetails {
        name: caps[1].trim().to_string(),
        address: caps[2].trim().to_string(),
        representative: caps[3].trim().to_string(),
    })
}
