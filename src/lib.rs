//! Billing documents with live totals and interchangeable layouts.
//!
//! The core is [`model::BillDocument`], the [`totals`] engine every consumer
//! shares, and the [`template`] registry that projects a document onto a
//! layout. [`store`], [`config`], [`preview`] and [`export`] sit around it.

pub mod config;
pub mod currency;
pub mod error;
pub mod export;
pub mod item;
pub mod model;
pub mod preview;
pub mod store;
pub mod template;
pub mod totals;

pub use error::{BillError, Result};
pub use item::{ItemUpdate, LineItem};
pub use model::{BillDocument, ClientInfo, CompanyInfo};
pub use template::{RenderedBill, Template, TemplateRegistry, render};
pub use totals::{Totals, compute_totals};
