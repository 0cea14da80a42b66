//! Contract identifiers derived from a reference date.

use time::{Date, Duration};

use crate::error::GenerateError;

/// Contract term length used to derive the end date.
const CONTRACT_TERM_DAYS: i64 = 365;

/// The identifier set stamped into the contract-id block: a `CTR-` id plus
/// effective and end dates in long form (`August 25, 2026`).
///
/// Derived from a caller-supplied reference date rather than a process-wide
/// clock, so concurrent requests get independent values and tests can pin
/// the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractIdentifiers {
    /// `CTR-<year>-<month><day>`, e.g. `CTR-2026-0825`.
    pub contract_id: String,
    /// The reference date in long form.
    pub effective_date: String,
    /// Reference date plus the contract term, in long form.
    pub end_date: String,
}

impl ContractIdentifiers {
    /// Derive the identifier set from `today`. Fails when `today` is so
    /// close to the calendar maximum that the end date is not representable.
    pub fn from_date(today: Date) -> Result<Self, GenerateError> {
        let end = today
            .checked_add(Duration::days(CONTRACT_TERM_DAYS))
            .ok_or(GenerateError::EndDateOutOfRange(today))?;
        Ok(ContractIdentifiers {
            contract_id: format!(
                "CTR-{}-{:02}{:02}",
                today.year(),
                today.month() as u8,
                today.day()
            ),
            effective_date: long_date(today),
            end_date: long_date(end),
        })
    }
}

// time::Month displays as the full English month name, so the long form
// can be assembled without a format description.
fn long_date(date: Date) -> String {
    format!("{} {:02}, {}", date.month(), date.day(), date.year())
}
