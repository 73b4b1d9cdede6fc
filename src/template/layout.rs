//! Layout description produced by a template.
//!
//! Everything here is plain data: strings already formatted for display plus
//! enums naming the presentation policy. Front ends (terminal preview, HTML
//! export) only arrange what they are given and never touch a number.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedBill {
    pub template: &'static str,
    pub margin: Margin,
    /// Thin horizontal rules between the header, items and totals.
    pub rule_dividers: bool,
    pub header: HeaderBlock,
    pub info: InfoBlock,
    pub items: ItemsBlock,
    pub totals: TotalsBlock,
    pub notes: Option<NotesBlock>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Margin {
    Standard,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderBand {
    /// Full-bleed dark band with light text.
    Dark,
    /// Plain background closed by a heavy bottom rule.
    Ruled,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    /// Light card sitting on the band.
    Card,
    /// Card inset into the band with extra padding.
    Inset,
    /// Right-aligned text, no card.
    Inline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBlock {
    pub band: HeaderBand,
    pub company_name: String,
    pub company_lines: Vec<String>,
    pub logo: Option<String>,
    pub badge: DocumentBadge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBadge {
    pub style: BadgeStyle,
    pub label: String,
    pub number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSplit {
    Even,
    /// Client column takes two thirds, metadata one third.
    ClientWide,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoBlock {
    pub split: ColumnSplit,
    pub bill_to: Section,
    pub details: DetailsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    /// Left accent border.
    pub accent: bool,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsSection {
    pub title: Option<String>,
    pub accent: bool,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    /// Heavy rule under the header, thin rule between rows.
    Ruled,
    /// Outer border, dark header row, alternating row shading.
    Bordered,
    /// Borderless column grid.
    Grid,
    /// Shaded header row with a heavy rule, thin rule between rows.
    Shaded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemsBlock {
    Table(ItemTable),
    Empty { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemTable {
    pub style: TableStyle,
    pub headings: [String; 4],
    pub rows: Vec<ItemRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub description: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
    pub shaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalsWidth {
    Narrow,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalKind {
    Subtotal,
    Discount,
    Tax,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBlock {
    pub width: TotalsWidth,
    /// Thin rule under each row.
    pub ruled_rows: bool,
    pub rows: Vec<TotalRow>,
    pub grand_total: GrandTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalRow {
    pub kind: TotalKind,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Heavy rule above the total.
    Rule,
    /// Thin rule above the total.
    ThinRule,
    /// Dark bordered slab.
    Slab,
    /// Solid dark block with generous padding.
    Block,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrandTotal {
    pub emphasis: Emphasis,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesBlock {
    pub title: String,
    pub accent: bool,
    pub text: String,
}

impl TotalsBlock {
    pub fn row(&self, kind: TotalKind) -> Option<&TotalRow> {
        self.rows.iter().find(|row| row.kind == kind)
    }
}
