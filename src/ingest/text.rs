//! Cell text cleanup and amount extraction

use std::sync::LazyLock;

use regex::Regex;

/// UTF-8 text that was decoded as Latin-1 somewhere upstream
const MOJIBAKE: [(&str, &str); 12] = [
    ("Ã¡", "á"),
    ("Ã©", "é"),
    ("Ã\u{ad}", "í"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã±", "ñ"),
    ("Ã\u{81}", "Á"),
    ("Ã‰", "É"),
    ("Ã\u{8d}", "Í"),
    ("Ã“", "Ó"),
    ("Ãš", "Ú"),
    ("Ã‘", "Ñ"),
];

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,]+\.?\d*").expect("amount pattern is valid"));

/// Repair common mojibake and trim whitespace
#[must_use]
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.trim_start_matches('\u{feff}').to_string();
    for (broken, fixed) in MOJIBAKE {
        if cleaned.contains(broken) {
            cleaned = cleaned.replace(broken, fixed);
        }
    }
    cleaned.trim().to_string()
}

/// Amount held in a commitment cell
///
/// A cell that parses as a positive number is the amount. Otherwise the first
/// run of digits (commas as thousands separators) is used. Anything else is 0.
#[must_use]
pub fn extract_amount(cell: &str) -> f64 {
    let cell = cell.trim();
    if let Ok(value) = cell.parse::<f64>()
        && value.is_finite()
        && value > 0.0
    {
        return value;
    }

    AMOUNT
        .find(cell)
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
