use serde::Serialize;

use crate::item::LineItem;

/// Derived money figures for a bill. Never stored; recompute from the items.
///
/// Values are raw floating-point currency units. Rounding to cents only
/// happens in [`format_money`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// Reduces line items and percentage rates into [`Totals`].
///
/// Tax is charged on the pre-discount subtotal. Percentages are taken
/// literally, out-of-range values included.
pub fn compute_totals(items: &[LineItem], tax_pct: f64, discount_pct: f64) -> Totals {
    let subtotal: f64 = items.iter().map(LineItem::amount).sum();
    let discount_amount = subtotal * discount_pct / 100.0;
    let tax_amount = subtotal * tax_pct / 100.0;

    Totals {
        subtotal,
        discount_amount,
        tax_amount,
        total: subtotal - discount_amount + tax_amount,
    }
}

/// `"$1234.50"`, sign ahead of the glyph for negative values.
pub fn format_money(symbol: &str, value: f64) -> String {
    let cents = (value * 100.0).round();
    if cents == 0.0 {
        return format!("{}0.00", symbol);
    }
    let magnitude = cents.abs() / 100.0;
    if cents < 0.0 {
        format!("-{}{:.2}", symbol, magnitude)
    } else {
        format!("{}{:.2}", symbol, magnitude)
    }
}

/// Up to two decimals with trailing zeros trimmed: `2`, `1.5`, `0.25`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("1", "Service or Product 1", 1.0, 100.0),
            LineItem::new("2", "Service or Product 2", 2.0, 75.0),
        ]
    }

    #[test]
    fn test_tax_only_scenario() {
        let totals = compute_totals(&sample_items(), 10.0, 0.0);
        assert!(approx(totals.subtotal, 250.0));
        assert!(approx(totals.discount_amount, 0.0));
        assert!(approx(totals.tax_amount, 25.0));
        assert!(approx(totals.total, 275.0));
    }

    #[test]
    fn test_discount_only_scenario() {
        let totals = compute_totals(&sample_items(), 0.0, 20.0);
        assert!(approx(totals.subtotal, 250.0));
        assert!(approx(totals.discount_amount, 50.0));
        assert!(approx(totals.tax_amount, 0.0));
        assert!(approx(totals.total, 200.0));
    }

    #[test]
    fn test_tax_uses_pre_discount_subtotal() {
        let totals = compute_totals(&sample_items(), 10.0, 20.0);
        // 10% of 250, not of 200
        assert!(approx(totals.tax_amount, 25.0));
        assert!(approx(totals.total, 250.0 - 50.0 + 25.0));
        assert!(approx(
            totals.total,
            totals.subtotal - totals.discount_amount + totals.tax_amount
        ));
    }

    #[test]
    fn test_empty_items_are_all_zero() {
        let totals = compute_totals(&[], 10.0, 5.0);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_out_of_range_rates_pass_through() {
        let totals = compute_totals(&sample_items(), 150.0, -10.0);
        assert!(approx(totals.tax_amount, 375.0));
        assert!(approx(totals.discount_amount, -25.0));
        assert!(approx(totals.total, 250.0 + 25.0 + 375.0));
    }

    #[test]
    fn test_no_rounding_inside_engine() {
        let items = vec![LineItem::new("1", "Thirds", 1.0, 10.0 / 3.0)];
        let totals = compute_totals(&items, 7.0, 0.0);
        assert!(approx(totals.tax_amount, (10.0 / 3.0) * 0.07));
        assert_ne!(totals.tax_amount, 0.23);
        assert_eq!(format_money("$", totals.tax_amount), "$0.23");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 275.0), "$275.00");
        assert_eq!(format_money("€", 0.005), "€0.01");
        assert_eq!(format_money("£", 0.0), "£0.00");
        assert_eq!(format_money("$", -0.001), "$0.00");
        assert_eq!(format_money("$", -50.0), "-$50.00");
        assert_eq!(format_money("¥", 1234.5), "¥1234.50");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(7.126), "7.13");
    }
}
