//! Display formatting and ordering for bills

use chrono::Datelike;

use crate::domain::entities::{parse_iso_date, Bill};

/// French month abbreviations, first three letters capitalised
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO date as `D Mon. YY`, e.g. `2004-04-04` -> `4 Avr. 04`
///
/// Returns `None` when the input is not a calendar date.
pub fn format_date(raw: &str) -> Option<String> {
    let date = parse_iso_date(raw)?;
    Some(format!(
        "{} {}. {:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    ))
}

/// Most recent first. Bills whose date does not parse go last, in their
/// original order.
pub fn sort_by_date_desc(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
}
