/// Glyph used for any currency code we don't know.
pub const FALLBACK_SYMBOL: &str = "$";

/// Currencies offered by the editor, in picker order.
pub const SUPPORTED: [(&str, &str); 7] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("INR", "₹"),
    ("CAD", "$"),
    ("AUD", "$"),
];

/// Display glyph for a currency code. Unknown codes get [`FALLBACK_SYMBOL`].
///
/// The code is a label only; no conversion ever happens.
pub fn symbol_for(code: &str) -> &'static str {
    SUPPORTED
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(FALLBACK_SYMBOL)
}

/// Picker labels such as `"€ EUR"`.
pub fn picker_labels() -> Vec<String> {
    SUPPORTED
        .iter()
        .map(|(code, symbol)| format!("{} {}", symbol, code))
        .collect()
}

/// Recovers the code from a label produced by [`picker_labels`].
pub fn code_from_label(label: &str) -> &str {
    label.rsplit(' ').next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(symbol_for("USD"), "$");
        assert_eq!(symbol_for("EUR"), "€");
        assert_eq!(symbol_for("GBP"), "£");
        assert_eq!(symbol_for("JPY"), "¥");
        assert_eq!(symbol_for("INR"), "₹");
        assert_eq!(symbol_for("CAD"), "$");
        assert_eq!(symbol_for("AUD"), "$");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(symbol_for("CHF"), FALLBACK_SYMBOL);
        assert_eq!(symbol_for(""), FALLBACK_SYMBOL);
        // lookup is exact, lowercase codes are not recognized
        assert_eq!(symbol_for("eur"), FALLBACK_SYMBOL);
    }

    #[test]
    fn test_picker_labels_round_trip_to_codes() {
        let labels = picker_labels();
        assert_eq!(labels[1], "€ EUR");
        let codes: Vec<&str> = labels.iter().map(|l| code_from_label(l)).collect();
        assert_eq!(codes, vec!["USD", "EUR", "GBP", "JPY", "INR", "CAD", "AUD"]);
    }
}
