use super::{
    BadgeStyle, BillView, ColumnSplit, DetailsSection, DocumentBadge, Emphasis, Field, HeaderBand,
    HeaderBlock, InfoBlock, Margin, RenderedBill, Section, TableStyle, Template, TemplateInfo,
    TotalsBlock, TotalsWidth,
};

/// Dark header band, ruled item table, totals in a narrow right column.
pub struct Modern;

impl Template for Modern {
    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "modern",
            name: "Modern",
            tagline: "Clean and contemporary",
        }
    }

    fn render(&self, view: &BillView<'_>) -> RenderedBill {
        let doc = view.doc();

        RenderedBill {
            template: self.info().id,
            margin: Margin::Standard,
            rule_dividers: false,
            header: HeaderBlock {
                band: HeaderBand::Dark,
                company_name: doc.company.name.clone(),
                company_lines: view.lines([
                    &doc.company.address,
                    &doc.company.email,
                    &doc.company.phone,
                ]),
                logo: doc.company.logo.clone(),
                badge: DocumentBadge {
                    style: BadgeStyle::Card,
                    label: "INVOICE".into(),
                    number: doc.bill_number.clone(),
                },
            },
            info: InfoBlock {
                split: ColumnSplit::Even,
                bill_to: Section {
                    title: "Bill To".into(),
                    accent: false,
                    lines: view.lines([&doc.client.name, &doc.client.address, &doc.client.email]),
                },
                details: DetailsSection {
                    title: None,
                    accent: false,
                    fields: vec![
                        Field {
                            label: "Issue Date".into(),
                            value: view.issue_date(),
                        },
                        Field {
                            label: "Due Date".into(),
                            value: view.due_date(),
                        },
                    ],
                },
            },
            items: view.item_table(TableStyle::Ruled, ["Description", "Quantity", "Rate", "Amount"]),
            totals: TotalsBlock {
                width: TotalsWidth::Narrow,
                ruled_rows: false,
                rows: view.total_rows(),
                grand_total: view.grand_total(Emphasis::Rule, "Total"),
            },
            notes: view.notes("Notes", false),
            footer: None,
        }
    }
}
