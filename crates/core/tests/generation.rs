//! End-to-end properties of the generation pipeline, exercised through the
//! public crate API only.

use accord_core::{
    extract_fields, generate_agreement, parse_blocks, parse_document, render_document, BlockName,
    ContractIdentifiers, GenerateError,
};
use time::macros::date;

#[test]
fn round_trip_recovers_exactly_the_eleven_block_names() {
    let fields = extract_fields("Buyer: Acme Foods, supplier: FreshCo");
    let identifiers = ContractIdentifiers::from_date(date!(2026 - 08 - 25)).unwrap();
    let document = render_document(&fields, &identifiers);
    let blocks = parse_blocks(&document);
    assert_eq!(blocks.len(), 11);
    for name in BlockName::ALL {
        assert!(blocks.contains_key(&name), "{name} not recovered");
    }
}

#[test]
fn realistic_prompt_populates_every_section() {
    let prompt = "Buyer: Metro Retail & Co\n\
                  Supplier: Gupta Mills\n\
                  Product: refined sunflower oil\n\
                  PO #2231\n\
                  price: ₹2,40,000\n\
                  payment terms: Net 45\n\
                  delivery: fortnightly to Nashik warehouse\n\
                  standards: FSSAI Schedule 4";
    let agreement = generate_agreement(prompt, date!(2026 - 08 - 25)).unwrap();
    assert!(agreement.buyer.contains("Enterprise Name: Metro Retail & Co"));
    assert!(agreement.supplier.contains("Vendor Name: Gupta Mills"));
    assert!(agreement.scope.contains("refined sunflower oil"));
    assert!(agreement.scope.contains("PO-#2231"));
    assert!(agreement.commercial.contains("Total Order Value: ₹2,40,000"));
    assert!(agreement.commercial.contains("Payment Terms: Net 45"));
    assert!(agreement.delivery.contains("fortnightly to Nashik warehouse"));
    assert!(agreement.quality.contains("FSSAI Schedule 4"));
    assert!(agreement.contract_id.contains("CTR-2026-0825"));
}

#[test]
fn truncating_the_document_invalidates_the_whole_agreement() {
    let fields = extract_fields("");
    let identifiers = ContractIdentifiers::from_date(date!(2026 - 08 - 25)).unwrap();
    let document = render_document(&fields, &identifiers);
    let cut = document.find("[CONFIDENTIALITY BLOCK START]").unwrap();
    let err = parse_document(&document[..cut]).unwrap_err();
    assert_eq!(err, GenerateError::MissingBlock(BlockName::Confidentiality));
    assert_eq!(err.to_string(), "missing required block: confidentiality");
}

#[test]
fn concurrent_generations_do_not_share_state() {
    let date = date!(2026 - 08 - 25);
    let acme = std::thread::spawn(move || {
        (0..50)
            .map(|_| generate_agreement("Buyer: Acme Foods", date).unwrap())
            .collect::<Vec<_>>()
    });
    let metro = std::thread::spawn(move || {
        (0..50)
            .map(|_| generate_agreement("Buyer: Metro Retail", date).unwrap())
            .collect::<Vec<_>>()
    });
    for agreement in acme.join().unwrap() {
        assert!(agreement.buyer.contains("Acme Foods"));
        assert!(!agreement.buyer.contains("Metro Retail"));
    }
    for agreement in metro.join().unwrap() {
        assert!(agreement.buyer.contains("Metro Retail"));
        assert!(!agreement.buyer.contains("Acme Foods"));
    }
}
