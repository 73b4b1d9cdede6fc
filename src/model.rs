use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency;
use crate::error::{BillError, Result};
use crate::item::{ItemUpdate, LineItem};
use crate::totals::{Totals, compute_totals};

pub const DEFAULT_NOTES: &str = "Thank you for your business!";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const PAYMENT_TERM_DAYS: u64 = 30;

const FALLBACK_BILL_PREFIX: &str = "INV";
const BILL_NUMBER_WIDTH: usize = 3;

static BILL_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)-([^-]*)$").expect("bill number pattern is valid"));

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub logo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub name: String,
    pub address: String,
    pub email: String,
}

/// The invoice being edited. One is live at a time; callers replace it whole.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillDocument {
    #[serde(default)]
    pub company: CompanyInfo,
    #[serde(default)]
    pub client: ClientInfo,
    pub bill_number: String,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    items: Vec<LineItem>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn due_after(issued: NaiveDate) -> NaiveDate {
    issued
        .checked_add_days(Days::new(PAYMENT_TERM_DAYS))
        .unwrap_or(issued)
}

impl BillDocument {
    /// The fixed starting document, also the target of a reset.
    pub fn starter(today: NaiveDate) -> Self {
        BillDocument {
            company: CompanyInfo {
                name: "Your Company Name".into(),
                address: "123 Business Street, City, State 12345".into(),
                email: "hello@yourcompany.com".into(),
                phone: "+1 (555) 123-4567".into(),
                logo: None,
            },
            client: ClientInfo {
                name: "Client Name".into(),
                address: "456 Client Avenue, City, State 67890".into(),
                email: "client@email.com".into(),
            },
            bill_number: "INV-001".into(),
            bill_date: today,
            due_date: due_after(today),
            currency: default_currency(),
            items: vec![
                LineItem::new("1", "Service or Product 1", 1.0, 100.0),
                LineItem::new("2", "Service or Product 2", 2.0, 75.0),
            ],
            notes: DEFAULT_NOTES.into(),
            tax: 10.0,
            discount: 0.0,
        }
    }

    /// Next bill in the series: keeps the company and tax rate, clears the
    /// client and items, bumps the bill number and restarts the dates.
    pub fn next_bill(&self, today: NaiveDate) -> Self {
        BillDocument {
            company: self.company.clone(),
            client: ClientInfo::default(),
            bill_number: next_bill_number(&self.bill_number),
            bill_date: today,
            due_date: due_after(today),
            currency: self.currency.clone(),
            items: Vec::new(),
            notes: DEFAULT_NOTES.into(),
            tax: self.tax,
            discount: 0.0,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Recomputed on every call.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.tax, self.discount)
    }

    pub fn currency_symbol(&self) -> &'static str {
        currency::symbol_for(&self.currency)
    }

    pub fn item(&self, id: &str) -> Result<&LineItem> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| BillError::ItemNotFound(id.to_string()))
    }

    pub fn add_item(&mut self, description: impl Into<String>, quantity: f64, rate: f64) -> &LineItem {
        let id = self.fresh_item_id();
        self.push(LineItem::new(id, description, quantity, rate))
    }

    pub fn add_blank_item(&mut self) -> &LineItem {
        let id = self.fresh_item_id();
        self.push(LineItem::blank(id))
    }

    pub fn update_item(&mut self, id: &str, update: ItemUpdate) -> Result<&LineItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| BillError::ItemNotFound(id.to_string()))?;
        item.apply(update);
        Ok(&*item)
    }

    pub fn remove_item(&mut self, id: &str) -> Result<LineItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| BillError::ItemNotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Appends a copy of the item under a fresh id.
    pub fn duplicate_item(&mut self, id: &str) -> Result<&LineItem> {
        let copy = self.item(id)?.duplicate(self.fresh_item_id());
        Ok(self.push(copy))
    }

    fn push(&mut self, item: LineItem) -> &LineItem {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    fn fresh_item_id(&self) -> String {
        loop {
            let candidate = Uuid::new_v4().simple().to_string()[..8].to_string();
            if self.items.iter().all(|item| item.id() != candidate) {
                return candidate;
            }
        }
    }
}

/// `INV-007` → `INV-008`.
///
/// Everything before the last `-` is kept as the prefix. The suffix is
/// incremented and zero-padded to at least three digits. A suffix that isn't
/// a number counts as 1; a number with no `-` at all gets the `INV` prefix.
pub fn next_bill_number(current: &str) -> String {
    let (prefix, suffix) = match BILL_NUMBER_RE.captures(current.trim()) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()).to_string(),
            caps.get(2).map_or("", |m| m.as_str()).to_string(),
        ),
        None => (FALLBACK_BILL_PREFIX.to_string(), String::new()),
    };

    let parsed = suffix.parse::<u64>().ok();
    let next = parsed.unwrap_or(1).saturating_add(1);
    let width = match parsed {
        Some(_) => suffix.len().max(BILL_NUMBER_WIDTH),
        None => BILL_NUMBER_WIDTH,
    };

    format!("{}-{:0width$}", prefix, next, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_starter_document() {
        let doc = BillDocument::starter(day(2026, 3, 1));
        assert_eq!(doc.bill_number, "INV-001");
        assert_eq!(doc.due_date, day(2026, 3, 31));
        assert_eq!(doc.items().len(), 2);
        assert_eq!(doc.notes, DEFAULT_NOTES);
        assert_eq!(doc.tax, 10.0);
        assert_eq!(doc.discount, 0.0);
        assert_eq!(doc.totals().total, 275.0);
    }

    #[test]
    fn test_next_bill_derivation() {
        let mut doc = BillDocument::starter(day(2026, 1, 15));
        doc.bill_number = "INV-007".into();
        doc.tax = 8.5;
        doc.discount = 15.0;
        doc.notes = "Net 15".into();

        let next = doc.next_bill(day(2026, 2, 1));
        assert_eq!(next.bill_number, "INV-008");
        assert_eq!(next.client, ClientInfo::default());
        assert!(next.items().is_empty());
        assert_eq!(next.tax, 8.5);
        assert_eq!(next.discount, 0.0);
        assert_eq!(next.notes, DEFAULT_NOTES);
        assert_eq!(next.company, doc.company);
        assert_eq!(next.bill_date, day(2026, 2, 1));
        assert_eq!(next.due_date, day(2026, 3, 3));
    }

    #[test]
    fn test_next_bill_number() {
        assert_eq!(next_bill_number("INV-007"), "INV-008");
        assert_eq!(next_bill_number("INV-099"), "INV-100");
        assert_eq!(next_bill_number("INV-999"), "INV-1000");
        assert_eq!(next_bill_number("INV-0041"), "INV-0042");
        assert_eq!(next_bill_number("2026-Q1-009"), "2026-Q1-010");
        assert_eq!(next_bill_number("BILL-abc"), "BILL-002");
        assert_eq!(next_bill_number("INV-"), "INV-002");
        assert_eq!(next_bill_number("12"), "INV-002");
    }

    #[test]
    fn test_item_lifecycle() {
        let mut doc = BillDocument::starter(day(2026, 1, 1));
        let id = doc.add_blank_item().id().to_string();
        assert_eq!(doc.items().len(), 3);

        let updated = doc
            .update_item(
                &id,
                ItemUpdate {
                    quantity: Some(4.0),
                    rate: Some(25.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount(), 100.0);
        assert_eq!(doc.totals().subtotal, 350.0);

        let copy_id = doc.duplicate_item(&id).unwrap().id().to_string();
        assert_ne!(copy_id, id);
        assert_eq!(doc.item(&copy_id).unwrap().amount(), 100.0);

        let removed = doc.remove_item(&id).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(doc.items().last().unwrap().id(), copy_id);
    }

    #[test]
    fn test_unknown_item_id() {
        let mut doc = BillDocument::starter(day(2026, 1, 1));
        assert!(matches!(doc.remove_item("nope"), Err(BillError::ItemNotFound(_))));
        assert!(doc.duplicate_item("nope").is_err());
        assert!(doc.update_item("nope", ItemUpdate::default()).is_err());
        assert_eq!(doc.items().len(), 2);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let mut doc = BillDocument::starter(day(2026, 1, 1));
        for _ in 0..50 {
            doc.add_item("Line", 1.0, 1.0);
        }
        let mut ids: Vec<&str> = doc.items().iter().map(LineItem::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_due_date_before_issue_date_is_allowed() {
        let mut doc = BillDocument::starter(day(2026, 5, 10));
        doc.due_date = day(2026, 5, 1);
        assert!(doc.due_date < doc.bill_date);
        assert_eq!(doc.totals().subtotal, 250.0);
    }

    #[test]
    fn test_currency_symbol_fallback() {
        let mut doc = BillDocument::starter(day(2026, 1, 1));
        doc.currency = "EUR".into();
        assert_eq!(doc.currency_symbol(), "€");
        doc.currency = "XYZ".into();
        assert_eq!(doc.currency_symbol(), "$");
    }

    #[test]
    fn test_document_json_shape() {
        let doc = BillDocument::starter(day(2026, 4, 2));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["billNumber"], "INV-001");
        assert_eq!(json["billDate"], "2026-04-02");
        assert_eq!(json["company"]["name"], "Your Company Name");

        let restored: BillDocument = serde_json::from_value(json).unwrap();
        assert_eq!(restored, doc);
    }
}
