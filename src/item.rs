use serde::{Deserialize, Serialize};

pub const DEFAULT_DESCRIPTION: &str = "New Item";

/// One billable row.
///
/// `amount` is a cache of [`derive_amount`]. Quantity and rate can only change
/// through [`LineItem::reprice`], which recomputes it in the same call, so a
/// stored amount is never stale. Deserialization goes through the same path
/// and ignores any persisted amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredLineItem")]
pub struct LineItem {
    id: String,
    description: String,
    quantity: f64,
    rate: f64,
    amount: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLineItem {
    id: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    quantity: f64,
    #[serde(default)]
    rate: f64,
}

impl From<StoredLineItem> for LineItem {
    fn from(stored: StoredLineItem) -> Self {
        LineItem::new(stored.id, stored.description, stored.quantity, stored.rate)
    }
}

/// `amount = quantity * rate`.
pub fn derive_amount(quantity: f64, rate: f64) -> f64 {
    quantity * rate
}

impl LineItem {
    pub fn new(id: impl Into<String>, description: impl Into<String>, quantity: f64, rate: f64) -> Self {
        LineItem {
            id: id.into(),
            description: description.into(),
            quantity,
            rate,
            amount: derive_amount(quantity, rate),
        }
    }

    /// The row the editor adds on demand: default description, one unit at rate 0.
    pub fn blank(id: impl Into<String>) -> Self {
        LineItem::new(id, DEFAULT_DESCRIPTION, 1.0, 0.0)
    }

    /// Copy of this item under a new identifier.
    pub fn duplicate(&self, id: impl Into<String>) -> Self {
        LineItem {
            id: id.into(),
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The only mutation site for quantity and rate.
    pub fn reprice(&mut self, quantity: f64, rate: f64) {
        self.quantity = quantity;
        self.rate = rate;
        self.amount = derive_amount(quantity, rate);
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.reprice(quantity, self.rate);
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.reprice(self.quantity, rate);
    }

    pub fn apply(&mut self, update: ItemUpdate) {
        if let Some(description) = update.description {
            self.set_description(description);
        }
        self.reprice(
            update.quantity.unwrap_or(self.quantity),
            update.rate.unwrap_or(self.rate),
        );
    }
}

/// Partial edit of a line item; `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_amount() {
        let item = LineItem::new("1", "Design work", 2.0, 75.0);
        assert_eq!(item.amount(), 150.0);
    }

    #[test]
    fn test_amount_follows_every_mutation() {
        let mut item = LineItem::new("1", "Hosting", 1.0, 100.0);

        item.set_quantity(3.0);
        assert_eq!(item.amount(), item.quantity() * item.rate());
        assert_eq!(item.amount(), 300.0);

        item.set_rate(12.5);
        assert_eq!(item.amount(), 37.5);

        item.apply(ItemUpdate {
            quantity: Some(0.5),
            ..Default::default()
        });
        assert_eq!(item.amount(), 6.25);

        item.reprice(0.0, 99.0);
        assert_eq!(item.amount(), 0.0);
    }

    #[test]
    fn test_description_edit_keeps_amount() {
        let mut item = LineItem::new("1", "Old", 2.0, 10.0);
        item.apply(ItemUpdate {
            description: Some("New".to_string()),
            ..Default::default()
        });
        assert_eq!(item.description(), "New");
        assert_eq!(item.amount(), 20.0);
    }

    #[test]
    fn test_blank_item() {
        let item = LineItem::blank("x");
        assert_eq!(item.description(), DEFAULT_DESCRIPTION);
        assert_eq!(item.quantity(), 1.0);
        assert_eq!(item.rate(), 0.0);
        assert_eq!(item.amount(), 0.0);
    }

    #[test]
    fn test_duplicate_copies_all_but_id() {
        let original = LineItem::new("1", "Consulting", 4.0, 120.0);
        let copy = original.duplicate("2");
        assert_eq!(copy.id(), "2");
        assert_eq!(copy.description(), original.description());
        assert_eq!(copy.quantity(), original.quantity());
        assert_eq!(copy.rate(), original.rate());
        assert_eq!(copy.amount(), original.amount());
    }

    #[test]
    fn test_deserialize_rederives_stale_amount() {
        let json = r#"{"id":"7","description":"Tampered","quantity":2,"rate":5,"amount":999}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount(), 10.0);

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""amount":10.0"#));
    }
}
