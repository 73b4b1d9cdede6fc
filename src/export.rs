use std::fs;
use std::path::{Path, PathBuf};

use slug::slugify;
use tera::{Context, Tera};

use crate::error::{BillError, Result};
use crate::model::BillDocument;
use crate::template::RenderedBill;

// Compiled into the binary
const BILL_TEMPLATE: &str = include_str!("../templates/bill.html.tera");
const TEMPLATE_NAME: &str = "bill.html";

/// Self-contained HTML page for a rendered bill.
pub fn to_html(bill: &RenderedBill) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, BILL_TEMPLATE)?;
    let context = Context::from_serialize(bill)?;
    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

/// `<output_dir>/INV-008_acme-corp.html`
pub fn default_export_path(output_dir: &Path, doc: &BillDocument) -> PathBuf {
    let client = match slugify(&doc.client.name) {
        slug if slug.is_empty() => "client".to_string(),
        slug => slug,
    };
    let number = match doc.bill_number.trim() {
        "" => "bill".to_string(),
        number => number.replace(['/', '\\'], "-"),
    };
    output_dir.join(format!("{}_{}.html", number, client))
}

pub fn write_html(bill: &RenderedBill, path: &Path) -> Result<()> {
    let html = to_html(bill)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| BillError::io(dir, e))?;
    }
    fs::write(path, html).map_err(|e| BillError::io(path, e))?;
    tracing::info!(path = %path.display(), template = bill.template, "exported");
    Ok(())
}
