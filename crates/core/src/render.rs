//! Block rendering: fixed prose templates with extracted-field
//! substitution.
//!
//! Boilerplate clauses (penalty amounts, tax language, indemnity wording)
//! are invariant across every agreement; only the 0-3 substitution points
//! per block come from the prompt.

use crate::blocks::BlockName;
use crate::extract::ExtractedFields;
use crate::identifiers::ContractIdentifiers;

/// Wrap a block body in its delimiter pair, exactly once.
fn wrap(name: BlockName, body: &str) -> String {
    format!(
        "[{marker} BLOCK START]\n{body}\n[{marker} BLOCK END]",
        marker = name.marker(),
        body = body
    )
}

fn title_block() -> String {
    wrap(BlockName::Title, "Vendor Supply Agreement")
}

fn contract_id_block(identifiers: &ContractIdentifiers) -> String {
    wrap(
        BlockName::ContractId,
        &format!(
            "Contract ID: {}\nEffective Date: {}\nEnd Date: {}",
            identifiers.contract_id, identifiers.effective_date, identifiers.end_date
        ),
    )
}

fn parties_intro_block() -> String {
    wrap(BlockName::PartiesIntro, "This Agreement is made between:")
}

fn buyer_block(fields: &ExtractedFields) -> String {
    wrap(
        BlockName::Buyer,
        &format!(
            "Buyer:\n\
             Enterprise Name: {}\n\
             Address: [BUYER ADDRESS]\n\
             Authorized Representative: [BUYER REPRESENTATIVE]",
            fields.buyer_name
        ),
    )
}

fn supplier_block(fields: &ExtractedFields) -> String {
    wrap(
        BlockName::Supplier,
        &format!(
            "Supplier:\n\
             Vendor Name: {}\n\
             Address: [SUPPLIER ADDRESS]\n\
             Authorized Representative: [SUPPLIER REPRESENTATIVE]",
            fields.supplier_name
        ),
    )
}

fn scope_block(fields: &ExtractedFields) -> String {
    wrap(
        BlockName::Scope,
        &format!(
            "1. Scope of Agreement\n\
             Supplier agrees to supply {} as per the specifications and quantities \
             defined in PO-{}. Product must meet the food-grade quality standards \
             prescribed by FSSAI.",
            fields.product, fields.po_reference
        ),
    )
}

fn commercial_block(fields: &ExtractedFields) -> String {
    wrap(
        BlockName::Commercial,
        &format!(
            "2. Commercial Terms\n\
             Total Order Value: ₹{}\n\
             Payment Terms: {}\n\
             Price Validity: Fixed for the contract period\n\
             Taxes: Inclusive of GST (18%)",
            fields.price, fields.payment_terms
        ),
    )
}

fn delivery_block(fields: &ExtractedFields) -> String {
    wrap(
        BlockName::Delivery,
        &format!(
            "3. Delivery Terms\n\
             Delivery Schedule: {}\n\
             Delivery Address: [SPECIFY DELIVERY ADDRESS]\n\
             Delivery Delays: Subject to penalty of ₹2,000 per day beyond 3-day grace period",
            fields.delivery
        ),
    )
}

fn quality_block(fields: &ExtractedFields) -> String {
    wrap(
        BlockName::Quality,
        &format!(
            "4. Quality Assurance\n\
             Supplier must adhere to {}\n\
             Buyer reserves the right to conduct periodic inspections\n\
             Rejected material will be returned at supplier's cost within 7 days",
            fields.quality_standards
        ),
    )
}

fn penalties_block() -> String {
    wrap(
        BlockName::Penalties,
        "5. Penalties & Liabilities\n\
         Penalty Clause: 5% deduction for any batch with more than 2% foreign matter\n\
         Insurance: Supplier shall insure all shipments against transit damage\n\
         Indemnity: Supplier will indemnify the buyer against any third-party claims due to quality failure",
    )
}

fn confidentiality_block() -> String {
    wrap(
        BlockName::Confidentiality,
        "6. Confidentiality\n\
         Both parties agree to maintain the confidentiality of all business information\n\
         exchanged under this agreement and not disclose it to third parties without\n\
         prior written consent. This obligation survives termination of the agreement.",
    )
}

/// Render one named block, delimiters included.
pub fn render_block(
    name: BlockName,
    fields: &ExtractedFields,
    identifiers: &ContractIdentifiers,
) -> String {
    match name {
        BlockName::Title => title_block(),
        BlockName::ContractId => contract_id_block(identifiers),
        BlockName::PartiesIntro => parties_intro_block(),
        BlockName::Buyer => buyer_block(fields),
        BlockName::Supplier => supplier_block(fields),
        BlockName::Scope => scope_block(fields),
        BlockName::Commercial => commercial_block(fields),
        BlockName::Delivery => delivery_block(fields),
        BlockName::Quality => quality_block(fields),
        BlockName::Penalties => penalties_block(),
        BlockName::Confidentiality => confidentiality_block(),
    }
}

/// Render all eleven blocks in document order, joined by a blank line.
pub fn render_document(fields: &ExtractedFields, identifiers: &ContractIdentifiers) -> String {
    BlockName::ALL
        .iter()
        .map(|&name| render_block(name, fields, identifiers))
        .collect::<Vec<_>>()
        .join("\n\n")
}
