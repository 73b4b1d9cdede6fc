//! Projects one [`BillDocument`] onto interchangeable layouts.
//!
//! Every template receives the same [`BillView`]: the document, its totals
//! computed once, and the shared formatting helpers. Templates only choose
//! labels and arrangement; they never compute money.

mod classic;
mod corporate;
pub mod layout;
mod minimalist;
mod modern;

use serde::Serialize;

use crate::item::LineItem;
use crate::model::BillDocument;
use crate::totals::{Totals, format_money, format_number};

pub use classic::Classic;
pub use corporate::Corporate;
pub use layout::*;
pub use minimalist::Minimalist;
pub use modern::Modern;

pub const DEFAULT_TEMPLATE: &str = "modern";

const DATE_FORMAT: &str = "%m/%d/%Y";
const EMPTY_ITEMS_MESSAGE: &str = "No items added yet";

/// Name and tagline shown in template pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub trait Template: Send + Sync {
    fn info(&self) -> TemplateInfo;

    /// Pure: the same view always yields the same layout.
    fn render(&self, view: &BillView<'_>) -> RenderedBill;
}

/// A document paired with its derived totals.
pub struct BillView<'a> {
    doc: &'a BillDocument,
    totals: Totals,
    symbol: &'static str,
}

impl<'a> BillView<'a> {
    pub fn new(doc: &'a BillDocument) -> Self {
        BillView {
            doc,
            totals: doc.totals(),
            symbol: doc.currency_symbol(),
        }
    }

    pub fn doc(&self) -> &BillDocument {
        self.doc
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn money(&self, value: f64) -> String {
        format_money(self.symbol, value)
    }

    pub fn issue_date(&self) -> String {
        self.doc.bill_date.format(DATE_FORMAT).to_string()
    }

    pub fn due_date(&self) -> String {
        self.doc.due_date.format(DATE_FORMAT).to_string()
    }

    /// Non-empty strings only, in the given order.
    pub fn lines<I, S>(&self, parts: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parts
            .into_iter()
            .map(|part| part.as_ref().trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Line items as a table, or the empty-state block when there are none.
    pub fn item_table(&self, style: TableStyle, headings: [&str; 4]) -> ItemsBlock {
        let items = self.doc.items();
        if items.is_empty() {
            return ItemsBlock::Empty {
                message: EMPTY_ITEMS_MESSAGE.to_string(),
            };
        }

        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| self.item_row(item, style == TableStyle::Bordered && index % 2 == 1))
            .collect();

        ItemsBlock::Table(ItemTable {
            style,
            headings: headings.map(str::to_string),
            rows,
        })
    }

    fn item_row(&self, item: &LineItem, shaded: bool) -> ItemRow {
        ItemRow {
            description: item.description().to_string(),
            quantity: format_number(item.quantity()),
            rate: self.money(item.rate()),
            amount: self.money(item.amount()),
            shaded,
        }
    }

    /// Subtotal, then discount and tax rows only when their rate is non-zero.
    /// A bill without items shows the subtotal alone.
    pub fn total_rows(&self) -> Vec<TotalRow> {
        let doc = self.doc;
        let has_items = !doc.items().is_empty();
        let mut rows = vec![TotalRow {
            kind: TotalKind::Subtotal,
            label: "Subtotal".to_string(),
            value: self.money(self.totals.subtotal),
        }];

        if has_items && doc.discount != 0.0 {
            rows.push(TotalRow {
                kind: TotalKind::Discount,
                label: format!("Discount ({}%)", format_number(doc.discount)),
                value: self.money(-self.totals.discount_amount),
            });
        }

        if has_items && doc.tax != 0.0 {
            rows.push(TotalRow {
                kind: TotalKind::Tax,
                label: format!("Tax ({}%)", format_number(doc.tax)),
                value: self.money(self.totals.tax_amount),
            });
        }

        rows
    }

    pub fn grand_total(&self, emphasis: Emphasis, label: &str) -> GrandTotal {
        GrandTotal {
            emphasis,
            label: label.to_string(),
            value: self.money(self.totals.total),
        }
    }

    pub fn notes(&self, title: &str, accent: bool) -> Option<NotesBlock> {
        let text = self.doc.notes.trim();
        if text.is_empty() {
            return None;
        }
        Some(NotesBlock {
            title: title.to_string(),
            accent,
            text: text.to_string(),
        })
    }
}

/// Templates keyed by id, with a default for ids nobody registered.
pub struct TemplateRegistry {
    templates: Vec<Box<dyn Template>>,
    default_id: &'static str,
}

impl TemplateRegistry {
    pub fn new(default: Box<dyn Template>) -> Self {
        let default_id = default.info().id;
        TemplateRegistry {
            templates: vec![default],
            default_id,
        }
    }

    /// The four stock layouts, `modern` as the default.
    pub fn builtin() -> Self {
        let mut registry = TemplateRegistry::new(Box::new(Modern));
        registry.register(Box::new(Classic));
        registry.register(Box::new(Minimalist));
        registry.register(Box::new(Corporate));
        registry
    }

    /// Adds a template, replacing any registered under the same id.
    pub fn register(&mut self, template: Box<dyn Template>) {
        let id = template.info().id;
        match self.templates.iter().position(|t| t.info().id == id) {
            Some(index) => self.templates[index] = template,
            None => self.templates.push(template),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.iter().any(|t| t.info().id == id)
    }

    pub fn default_id(&self) -> &'static str {
        self.default_id
    }

    /// Descriptors in registration order.
    pub fn infos(&self) -> Vec<TemplateInfo> {
        self.templates.iter().map(|t| t.info()).collect()
    }

    /// The template for `id`, or the default one.
    pub fn get(&self, id: &str) -> &dyn Template {
        let found = self
            .templates
            .iter()
            .find(|t| t.info().id == id)
            .or_else(|| {
                tracing::debug!(template = id, fallback = self.default_id, "unknown template");
                self.templates.iter().find(|t| t.info().id == self.default_id)
            });

        match found {
            Some(template) => template.as_ref(),
            // the default is registered in `new` and replacements keep its id
            None => self.templates[0].as_ref(),
        }
    }

    pub fn render(&self, doc: &BillDocument, id: &str) -> RenderedBill {
        self.get(id).render(&BillView::new(doc))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        TemplateRegistry::builtin()
    }
}

/// Renders with the stock templates.
pub fn render(doc: &BillDocument, template_id: &str) -> RenderedBill {
    TemplateRegistry::builtin().render(doc, template_id)
}
