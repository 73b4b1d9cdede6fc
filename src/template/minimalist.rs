use super::{
    BadgeStyle, BillView, ColumnSplit, DetailsSection, DocumentBadge, Emphasis, Field, HeaderBand,
    HeaderBlock, InfoBlock, Margin, RenderedBill, Section, TableStyle, Template, TemplateInfo,
    TotalsBlock, TotalsWidth,
};

/// Wide margins, borderless column grid, thin rule dividers.
pub struct Minimalist;

impl Template for Minimalist {
    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "minimalist",
            name: "Minimalist",
            tagline: "Simple and elegant",
        }
    }

    fn render(&self, view: &BillView<'_>) -> RenderedBill {
        let doc = view.doc();

        // addresses are left out of this layout
        RenderedBill {
            template: self.info().id,
            margin: Margin::Wide,
            rule_dividers: true,
            header: HeaderBlock {
                band: HeaderBand::Plain,
                company_name: doc.company.name.clone(),
                company_lines: view.lines([&doc.company.email, &doc.company.phone]),
                logo: doc.company.logo.clone(),
                badge: DocumentBadge {
                    style: BadgeStyle::Inline,
                    label: "Invoice".into(),
                    number: doc.bill_number.clone(),
                },
            },
            info: InfoBlock {
                split: ColumnSplit::Even,
                bill_to: Section {
                    title: "To".into(),
                    accent: false,
                    lines: view.lines([&doc.client.name, &doc.client.email]),
                },
                details: DetailsSection {
                    title: None,
                    accent: false,
                    fields: vec![
                        Field {
                            label: "Issued".into(),
                            value: view.issue_date(),
                        },
                        Field {
                            label: "Due".into(),
                            value: view.due_date(),
                        },
                    ],
                },
            },
            items: view.item_table(TableStyle::Grid, ["Item", "Qty", "Rate", "Amount"]),
            totals: TotalsBlock {
                width: TotalsWidth::Narrow,
                ruled_rows: false,
                rows: view.total_rows(),
                grand_total: view.grand_total(Emphasis::ThinRule, "Total"),
            },
            notes: view.notes("Notes", false),
            footer: None,
        }
    }
}
