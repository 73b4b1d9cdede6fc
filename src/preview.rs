//! Terminal output: a rendered bill as text, and the live totals card.

use comfy_table::presets::{NOTHING, UTF8_FULL, UTF8_HORIZONTAL_ONLY};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use crate::model::BillDocument;
use crate::template::{
    BillView, ColumnSplit, Emphasis, HeaderBand, ItemsBlock, Margin, RenderedBill, TableStyle,
    TotalKind, TotalsBlock,
};

const RULE_WIDTH: usize = 64;
const STRIPE: Color = Color::Rgb { r: 241, g: 245, b: 249 };
const GREEN: Color = Color::Rgb { r: 4, g: 120, b: 87 };

pub fn render_text(bill: &RenderedBill) -> String {
    let indent = match bill.margin {
        Margin::Standard => "",
        Margin::Wide => "    ",
    };
    let mut out: Vec<String> = Vec::new();

    // header
    let heavy = "━".repeat(RULE_WIDTH);
    if bill.header.band == HeaderBand::Dark {
        out.push(heavy.clone());
    }
    out.push(format!(
        "{}  |  {} {}",
        bill.header.company_name, bill.header.badge.label, bill.header.badge.number
    ));
    if let Some(logo) = &bill.header.logo {
        out.push(format!("[logo: {}]", logo));
    }
    out.extend(bill.header.company_lines.iter().cloned());
    match bill.header.band {
        HeaderBand::Dark | HeaderBand::Ruled => out.push(heavy),
        HeaderBand::Plain => {}
    }
    out.push(String::new());
    if bill.rule_dividers {
        out.push("─".repeat(RULE_WIDTH));
        out.push(String::new());
    }

    out.push(info_table(bill).to_string());
    out.push(String::new());

    match &bill.items {
        ItemsBlock::Table(table) => {
            let mut grid = Table::new();
            grid.load_preset(match table.style {
                TableStyle::Bordered => UTF8_FULL,
                TableStyle::Ruled | TableStyle::Shaded => UTF8_HORIZONTAL_ONLY,
                TableStyle::Grid => NOTHING,
            });
            grid.set_header(table.headings.iter().map(|heading| match table.style {
                TableStyle::Bordered | TableStyle::Shaded => {
                    Cell::new(heading).add_attribute(Attribute::Bold)
                }
                TableStyle::Ruled | TableStyle::Grid => Cell::new(heading),
            }));
            for row in &table.rows {
                let cells = [&row.description, &row.quantity, &row.rate, &row.amount]
                    .into_iter()
                    .map(|text| {
                        let cell = Cell::new(text);
                        if row.shaded { cell.bg(STRIPE) } else { cell }
                    });
                grid.add_row(cells);
            }
            for index in 1..4 {
                if let Some(column) = grid.column_mut(index) {
                    column.set_cell_alignment(CellAlignment::Right);
                }
            }
            out.push(grid.to_string());
        }
        ItemsBlock::Empty { message } => out.push(format!("({})", message)),
    }
    out.push(String::new());
    if bill.rule_dividers {
        out.push("─".repeat(RULE_WIDTH));
        out.push(String::new());
    }

    out.push(totals_table(&bill.totals).to_string());

    if let Some(notes) = &bill.notes {
        out.push(String::new());
        out.push(notes.title.clone());
        out.extend(notes.text.lines().map(str::to_string));
    }
    if let Some(footer) = &bill.footer {
        out.push(String::new());
        out.push(footer.clone());
    }

    out.iter()
        .flat_map(|block| block.split('\n'))
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn info_table(bill: &RenderedBill) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    let details_title = bill.info.details.title.clone().unwrap_or_default();
    let (client_title, details_heading) = match bill.info.split {
        ColumnSplit::Even => (bill.info.bill_to.title.clone(), details_title),
        ColumnSplit::ClientWide => (format!("{:<40}", bill.info.bill_to.title), details_title),
    };
    table.set_header(vec![
        Cell::new(client_title).add_attribute(Attribute::Bold),
        Cell::new(details_heading).add_attribute(Attribute::Bold),
    ]);

    let client = &bill.info.bill_to.lines;
    let fields = &bill.info.details.fields;
    for index in 0..client.len().max(fields.len()) {
        let left = client.get(index).cloned().unwrap_or_default();
        let right = fields
            .get(index)
            .map(|field| format!("{}: {}", field.label, field.value))
            .unwrap_or_default();
        table.add_row(vec![Cell::new(left), Cell::new(right)]);
    }
    table
}

fn totals_table(totals: &TotalsBlock) -> Table {
    let mut table = Table::new();
    table.load_preset(if totals.ruled_rows { UTF8_HORIZONTAL_ONLY } else { NOTHING });

    for row in &totals.rows {
        table.add_row(vec![Cell::new(&row.label), Cell::new(&row.value)]);
    }

    let grand = &totals.grand_total;
    let (label, value) = match grand.emphasis {
        Emphasis::Slab | Emphasis::Block => (
            Cell::new(&grand.label).add_attribute(Attribute::Reverse),
            Cell::new(&grand.value).add_attribute(Attribute::Reverse),
        ),
        Emphasis::Rule | Emphasis::ThinRule => (
            Cell::new(&grand.label).add_attribute(Attribute::Bold),
            Cell::new(&grand.value).add_attribute(Attribute::Bold),
        ),
    };
    table.add_row(vec![label, value]);

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Running summary of the current document, same rows as every template.
pub fn summary_table(doc: &BillDocument) -> Table {
    let view = BillView::new(doc);

    let mut table = Table::new();
    table.set_header(vec![Cell::new("Summary"), Cell::new("")]);
    for row in view.total_rows() {
        let value = match row.kind {
            TotalKind::Subtotal => Cell::new(row.value),
            TotalKind::Discount => Cell::new(row.value).fg(GREEN),
            TotalKind::Tax => Cell::new(format!("+{}", row.value)),
        };
        table.add_row(vec![Cell::new(row.label), value]);
    }
    let total = view.grand_total(Emphasis::Rule, "Total");
    table.add_row(vec![
        Cell::new(total.label).add_attribute(Attribute::Bold),
        Cell::new(total.value).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new(item_count(doc.items().len())), Cell::new("")]);

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn item_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::template::render;

    fn sample() -> BillDocument {
        BillDocument::starter(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
    }

    #[test]
    fn test_text_preview_contains_content() {
        let doc = sample();
        for id in ["modern", "classic", "minimalist", "corporate"] {
            let text = render_text(&render(&doc, id));
            assert!(text.contains("Your Company Name"), "{}", id);
            assert!(text.contains("INV-001"), "{}", id);
            assert!(text.contains("Service or Product 2"), "{}", id);
            assert!(text.contains("$150.00"), "{}", id);
            assert!(text.contains("$275.00"), "{}", id);
            assert!(text.contains("Tax (10%)"), "{}", id);
            assert!(!text.contains("Discount"), "{}", id);
        }
    }

    #[test]
    fn test_wide_margin_indents_every_line() {
        let text = render_text(&render(&sample(), "minimalist"));
        assert!(text.lines().all(|line| line.is_empty() || line.starts_with("    ")));
    }

    #[test]
    fn test_empty_state_preview() {
        let doc = sample().next_bill(NaiveDate::from_ymd_opt(2026, 9, 2).unwrap());
        let text = render_text(&render(&doc, "classic"));
        assert!(text.contains("(No items added yet)"));
        assert!(text.contains("$0.00"));
        assert!(!text.contains("Tax"));
    }

    #[test]
    fn test_summary_table() {
        let mut doc = sample();
        doc.discount = 20.0;
        let text = summary_table(&doc).to_string();
        assert!(text.contains("Discount (20%)"));
        assert!(text.contains("-$50.00"));
        assert!(text.contains("+$25.00"));
        assert!(text.contains("$225.00"));
        assert!(text.contains("2 items"));
    }

    #[test]
    fn test_summary_omits_zero_rates() {
        let mut doc = sample();
        doc.tax = 0.0;
        let text = summary_table(&doc).to_string();
        assert!(!text.contains("Tax"));
        assert!(!text.contains("Discount"));
        assert!(text.contains("$250.00"));
    }

    #[test]
    fn test_item_count() {
        assert_eq!(item_count(0), "0 items");
        assert_eq!(item_count(1), "1 item");
        assert_eq!(item_count(2), "2 items");
    }
}
