use super::{
    BadgeStyle, BillView, ColumnSplit, DetailsSection, DocumentBadge, Emphasis, Field, HeaderBand,
    HeaderBlock, InfoBlock, Margin, RenderedBill, Section, TableStyle, Template, TemplateInfo,
    TotalsBlock, TotalsWidth,
};

/// Bordered full-width table with striped rows; grand total in a bordered slab.
pub struct Classic;

impl Template for Classic {
    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "classic",
            name: "Classic",
            tagline: "Traditional professional",
        }
    }

    fn render(&self, view: &BillView<'_>) -> RenderedBill {
        let doc = view.doc();

        RenderedBill {
            template: self.info().id,
            margin: Margin::Standard,
            rule_dividers: false,
            header: HeaderBlock {
                band: HeaderBand::Ruled,
                company_name: doc.company.name.clone(),
                company_lines: view.lines([
                    &doc.company.address,
                    &doc.company.email,
                    &doc.company.phone,
                ]),
                logo: doc.company.logo.clone(),
                badge: DocumentBadge {
                    style: BadgeStyle::Inline,
                    label: "INVOICE".into(),
                    number: format!("#{}", doc.bill_number),
                },
            },
            info: InfoBlock {
                split: ColumnSplit::Even,
                bill_to: Section {
                    title: "Bill To".into(),
                    accent: true,
                    lines: view.lines([&doc.client.name, &doc.client.address, &doc.client.email]),
                },
                details: DetailsSection {
                    title: Some("Invoice Details".into()),
                    accent: true,
                    fields: vec![
                        Field {
                            label: "Issue Date".into(),
                            value: view.issue_date(),
                        },
                        Field {
                            label: "Due Date".into(),
                            value: view.due_date(),
                        },
                        Field {
                            label: "Currency".into(),
                            value: doc.currency.clone(),
                        },
                    ],
                },
            },
            items: view.item_table(TableStyle::Bordered, ["Description", "Qty", "Rate", "Amount"]),
            totals: TotalsBlock {
                width: TotalsWidth::Wide,
                ruled_rows: true,
                rows: view.total_rows(),
                grand_total: view.grand_total(Emphasis::Slab, "Total Amount"),
            },
            notes: view.notes("Notes & Terms", false),
            footer: None,
        }
    }
}
