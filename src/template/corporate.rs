use super::{
    BadgeStyle, BillView, ColumnSplit, DetailsSection, DocumentBadge, Emphasis, Field, HeaderBand,
    HeaderBlock, InfoBlock, Margin, RenderedBill, Section, TableStyle, Template, TemplateInfo,
    TotalsBlock, TotalsWidth,
};

/// Dark band with an inset number card, client column wider than the
/// metadata, grand total in a solid block.
pub struct Corporate;

impl Template for Corporate {
    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "corporate",
            name: "Corporate",
            tagline: "Bold and structured",
        }
    }

    fn render(&self, view: &BillView<'_>) -> RenderedBill {
        let doc = view.doc();
        let contact = view.lines([&doc.company.email, &doc.company.phone]).join(" • ");

        RenderedBill {
            template: self.info().id,
            margin: Margin::Standard,
            rule_dividers: false,
            header: HeaderBlock {
                band: HeaderBand::Dark,
                company_name: doc.company.name.clone(),
                company_lines: view.lines([doc.company.address.as_str(), contact.as_str()]),
                logo: doc.company.logo.clone(),
                badge: DocumentBadge {
                    style: BadgeStyle::Inset,
                    label: "INVOICE".into(),
                    number: doc.bill_number.clone(),
                },
            },
            info: InfoBlock {
                split: ColumnSplit::ClientWide,
                bill_to: Section {
                    title: "BILL TO".into(),
                    accent: true,
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
            items: view.item_table(TableStyle::Shaded, ["DESCRIPTION", "QTY", "RATE", "AMOUNT"]),
            totals: TotalsBlock {
                width: TotalsWidth::Wide,
                ruled_rows: true,
                rows: view.total_rows(),
                grand_total: view.grand_total(Emphasis::Block, "TOTAL DUE"),
            },
            notes: view.notes("NOTES", true),
            footer: Some("Thank you for your business".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::BillDocument;

    #[test]
    fn test_corporate_layout() {
        let doc = BillDocument::starter(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap());
        let rendered = Corporate.render(&BillView::new(&doc));

        assert_eq!(rendered.header.badge.style, BadgeStyle::Inset);
        assert_eq!(
            rendered.header.company_lines[1],
            "hello@yourcompany.com • +1 (555) 123-4567"
        );
        assert_eq!(rendered.info.split, ColumnSplit::ClientWide);
        assert_eq!(rendered.totals.grand_total.emphasis, Emphasis::Block);
        assert_eq!(rendered.totals.grand_total.label, "TOTAL DUE");
        assert_eq!(rendered.footer.as_deref(), Some("Thank you for your business"));
    }

    #[test]
    fn test_contact_line_without_phone() {
        let mut doc = BillDocument::starter(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap());
        doc.company.phone.clear();
        let rendered = Corporate.render(&BillView::new(&doc));
        assert_eq!(rendered.header.company_lines[1], "hello@yourcompany.com");
    }
}
