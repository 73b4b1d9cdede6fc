use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use inquire::error::InquireError;
use inquire::{Confirm, DateSelect, Select, Text};
use tracing_subscriber::EnvFilter;

use bill_maker::config::{self, AppSettings};
use bill_maker::currency;
use bill_maker::export;
use bill_maker::item::{DEFAULT_DESCRIPTION, ItemUpdate};
use bill_maker::model::BillDocument;
use bill_maker::preview;
use bill_maker::store::{BILL_KEY, FileStore, Store, TEMPLATE_KEY};
use bill_maker::template::TemplateRegistry;
use bill_maker::totals::{format_money, format_number};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// CLI
// ==========================================

#[derive(Parser)]
#[command(name = "bill-maker", about = "Build a bill and preview it under different layouts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the current bill in the terminal
    Show {
        /// Template to render with (defaults to the selected one)
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Show live totals
    Summary,
    /// Set a bill field (prompts when the value is omitted)
    Set { field: BillField, value: Option<String> },
    /// Manage line items
    #[command(subcommand)]
    Item(ItemCommand),
    /// Select the active template
    Template { id: Option<String> },
    /// List available templates
    Templates,
    /// Start the next bill: same company and tax rate, new number, no client or items
    New {
        #[arg(short, long)]
        yes: bool,
    },
    /// Replace the current bill with the default one
    Reset {
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the rendered bill to a standalone HTML file
    Export {
        #[arg(short, long)]
        template: Option<String>,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Configure data directory and default template
    Config {
        #[arg(long)]
        data_dir: Option<String>,
        #[arg(long)]
        template: Option<String>,
    },
}

#[derive(Subcommand)]
enum ItemCommand {
    /// Add an item (interactive when no flags are given)
    Add {
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        quantity: Option<String>,
        #[arg(short, long)]
        rate: Option<String>,
    },
    /// Edit an item
    Update {
        id: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        quantity: Option<String>,
        #[arg(short, long)]
        rate: Option<String>,
    },
    /// Remove an item
    Remove { id: String },
    /// Append a copy of an item
    Duplicate { id: String },
    /// List items with their ids
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum BillField {
    CompanyName,
    CompanyAddress,
    CompanyEmail,
    CompanyPhone,
    CompanyLogo,
    ClientName,
    ClientAddress,
    ClientEmail,
    BillNumber,
    BillDate,
    DueDate,
    Currency,
    Tax,
    Discount,
    Notes,
}

// ==========================================
// Main Function
// ==========================================

fn main() {
    init_logging();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help().ok();
        return;
    };

    if let Err(e) = run(command) {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bill_maker=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    let config_path = config::config_path()?;
    let settings = config::load_settings(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let session = Session::open(settings);
    match command {
        Commands::Show { template } => {
            let id = template.unwrap_or_else(|| session.template_id());
            let rendered = session.registry.render(&session.bill(), &id);
            println!("{}", preview::render_text(&rendered));
        }
        Commands::Summary => {
            println!("{}", preview::summary_table(&session.bill()));
        }
        Commands::Set { field, value } => {
            let mut doc = session.bill();
            let value = match value {
                Some(value) => value,
                None => prompt_field(&doc, field)?,
            };
            set_field(&mut doc, field, &value)?;
            session.replace_bill(&doc)?;
            println!("✅ Updated.");
        }
        Commands::Item(item) => run_item(&session, item)?,
        Commands::Template { id } => select_template(&session, id)?,
        Commands::Templates => {
            let current = session.template_id();
            for info in session.registry.infos() {
                let marker = if info.id == current { "*" } else { " " };
                println!("{} {:<12} {:<12} {}", marker, info.id, info.name, info.tagline);
            }
        }
        Commands::New { yes } => {
            if yes || confirm("Create a new bill? Client, items and notes will be cleared.")? {
                let next = session.bill().next_bill(session.today);
                session.replace_bill(&next)?;
                println!("✅ Started {}", next.bill_number);
            }
        }
        Commands::Reset { yes } => {
            if yes || confirm("Reset to the default bill? This clears all current data.")? {
                session.replace_bill(&BillDocument::starter(session.today))?;
                println!("✅ Bill reset.");
            }
        }
        Commands::Export { template, out } => {
            let doc = session.bill();
            let id = template.unwrap_or_else(|| session.template_id());
            let rendered = session.registry.render(&doc, &id);
            let path = out.unwrap_or_else(|| {
                export::default_export_path(&session.settings.data_root().join("output"), &doc)
            });
            export::write_html(&rendered, &path)?;
            println!("✅ Exported: {}", path.display());
        }
        Commands::Config { data_dir, template } => {
            configure(&config_path, session.settings.clone(), data_dir, template)?
        }
    }
    Ok(())
}

// ==========================================
// Session: load / replace the live bill
// ==========================================

struct Session {
    settings: AppSettings,
    store: FileStore,
    registry: TemplateRegistry,
    today: NaiveDate,
}

impl Session {
    fn open(settings: AppSettings) -> Self {
        let store = FileStore::new(&settings.data_root());
        Session {
            settings,
            store,
            registry: TemplateRegistry::builtin(),
            today: Local::now().date_naive(),
        }
    }

    fn bill(&self) -> BillDocument {
        self.store.load(BILL_KEY, BillDocument::starter(self.today))
    }

    fn replace_bill(&self, doc: &BillDocument) -> anyhow::Result<()> {
        self.store.save(BILL_KEY, doc).context("saving bill")?;
        tracing::info!(bill = %doc.bill_number, items = doc.items().len(), "bill replaced");
        Ok(())
    }

    fn template_id(&self) -> String {
        let id: String = self.store.load(TEMPLATE_KEY, self.settings.default_template.clone());
        if !self.registry.contains(&id) {
            tracing::warn!(template = %id, fallback = self.registry.default_id(), "unknown template");
        }
        id
    }
}

// ==========================================
// Field & Item Editing
// ==========================================

/// Non-numeric input becomes 0.
fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT)
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", raw.trim()))
}

fn set_field(doc: &mut BillDocument, field: BillField, value: &str) -> anyhow::Result<()> {
    let text = value.to_string();
    match field {
        BillField::CompanyName => doc.company.name = text,
        BillField::CompanyAddress => doc.company.address = text,
        BillField::CompanyEmail => doc.company.email = text,
        BillField::CompanyPhone => doc.company.phone = text,
        BillField::CompanyLogo => {
            doc.company.logo = if text.trim().is_empty() { None } else { Some(text) }
        }
        BillField::ClientName => doc.client.name = text,
        BillField::ClientAddress => doc.client.address = text,
        BillField::ClientEmail => doc.client.email = text,
        BillField::BillNumber => doc.bill_number = text,
        BillField::BillDate => doc.bill_date = parse_date(value)?,
        BillField::DueDate => doc.due_date = parse_date(value)?,
        BillField::Currency => doc.currency = text.trim().to_uppercase(),
        BillField::Tax => doc.tax = parse_number(value),
        BillField::Discount => doc.discount = parse_number(value),
        BillField::Notes => doc.notes = text,
    }
    Ok(())
}

fn prompt_field(doc: &BillDocument, field: BillField) -> anyhow::Result<String> {
    let value = match field {
        BillField::BillDate | BillField::DueDate => {
            let current = match field {
                BillField::BillDate => doc.bill_date,
                _ => doc.due_date,
            };
            DateSelect::new("Date:")
                .with_default(current)
                .prompt()?
                .format(DATE_INPUT_FORMAT)
                .to_string()
        }
        BillField::Currency => {
            let label = Select::new("Currency:", currency::picker_labels()).prompt()?;
            currency::code_from_label(&label).to_string()
        }
        _ => {
            let current = current_text(doc, field);
            Text::new("Value:").with_default(&current).prompt()?
        }
    };
    Ok(value)
}

fn current_text(doc: &BillDocument, field: BillField) -> String {
    match field {
        BillField::CompanyName => doc.company.name.clone(),
        BillField::CompanyAddress => doc.company.address.clone(),
        BillField::CompanyEmail => doc.company.email.clone(),
        BillField::CompanyPhone => doc.company.phone.clone(),
        BillField::CompanyLogo => doc.company.logo.clone().unwrap_or_default(),
        BillField::ClientName => doc.client.name.clone(),
        BillField::ClientAddress => doc.client.address.clone(),
        BillField::ClientEmail => doc.client.email.clone(),
        BillField::BillNumber => doc.bill_number.clone(),
        BillField::BillDate => doc.bill_date.format(DATE_INPUT_FORMAT).to_string(),
        BillField::DueDate => doc.due_date.format(DATE_INPUT_FORMAT).to_string(),
        BillField::Currency => doc.currency.clone(),
        BillField::Tax => format_number(doc.tax),
        BillField::Discount => format_number(doc.discount),
        BillField::Notes => doc.notes.clone(),
    }
}

fn run_item(session: &Session, command: ItemCommand) -> anyhow::Result<()> {
    let mut doc = session.bill();
    match command {
        ItemCommand::Add {
            description: None,
            quantity: None,
            rate: None,
        } => {
            let added = enter_items(&mut doc)?;
            if added == 0 {
                println!("❌ No items entered.");
                return Ok(());
            }
            println!("✅ Added {}.", preview::item_count(added));
        }
        ItemCommand::Add {
            description,
            quantity,
            rate,
        } => {
            let item = doc.add_item(
                description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
                quantity.as_deref().map_or(1.0, parse_number),
                rate.as_deref().map_or(0.0, parse_number),
            );
            println!("✅ Added item {}", item.id());
        }
        ItemCommand::Update {
            id,
            description,
            quantity,
            rate,
        } => {
            let update = ItemUpdate {
                description,
                quantity: quantity.as_deref().map(parse_number),
                rate: rate.as_deref().map(parse_number),
            };
            let symbol = doc.currency_symbol();
            let item = doc.update_item(&id, update)?;
            println!("✅ {} = {}", item.id(), format_money(symbol, item.amount()));
        }
        ItemCommand::Remove { id } => {
            let removed = doc.remove_item(&id)?;
            println!("✅ Removed {}", removed.description());
        }
        ItemCommand::Duplicate { id } => {
            let copy = doc.duplicate_item(&id)?;
            println!("✅ Copied as {}", copy.id());
        }
        ItemCommand::List => {
            let symbol = doc.currency_symbol();
            for item in doc.items() {
                println!(
                    "{}  {:<32} {:>8} x {:>10} = {:>10}",
                    item.id(),
                    item.description(),
                    format_number(item.quantity()),
                    format_money(symbol, item.rate()),
                    format_money(symbol, item.amount()),
                );
            }
            println!("{}", preview::item_count(doc.items().len()));
            return Ok(());
        }
    }
    session.replace_bill(&doc)
}

fn enter_items(doc: &mut BillDocument) -> anyhow::Result<usize> {
    println!("\n--- Enter Line Items ---");
    println!("(Leave Description empty to finish)");

    let mut added = 0;
    loop {
        let description = Text::new("Description:").prompt()?;
        if description.trim().is_empty() {
            break;
        }
        let quantity = Text::new("Quantity:").with_default("1").prompt()?;
        let rate = Text::new("Rate:").with_default("0").prompt()?;

        doc.add_item(description, parse_number(&quantity), parse_number(&rate));
        added += 1;
    }
    Ok(added)
}

// ==========================================
// Templates & Config
// ==========================================

fn select_template(session: &Session, id: Option<String>) -> anyhow::Result<()> {
    let infos = session.registry.infos();
    let id = match id {
        Some(id) => id,
        None => {
            let options: Vec<String> = infos
                .iter()
                .map(|info| format!("{} - {}", info.name, info.tagline))
                .collect();
            let choice = Select::new("Choose your style:", options.clone()).prompt()?;
            let index = options.iter().position(|o| *o == choice).unwrap_or(0);
            infos[index].id.to_string()
        }
    };

    if !session.registry.contains(&id) {
        let known: Vec<&str> = infos.iter().map(|info| info.id).collect();
        bail!("unknown template '{}', expected one of: {}", id, known.join(", "));
    }
    session.store.save(TEMPLATE_KEY, &id).context("saving template choice")?;
    println!("✅ Template: {}", id);
    Ok(())
}

fn configure(
    path: &Path,
    mut settings: AppSettings,
    data_dir: Option<String>,
    template: Option<String>,
) -> anyhow::Result<()> {
    let registry = TemplateRegistry::builtin();
    if data_dir.is_none() && template.is_none() {
        println!("\n⚙️  --- Configuration Setup ---");
        settings.data_dir = Text::new("Data directory:")
            .with_default(&settings.data_dir)
            .prompt()?;
        let ids: Vec<&str> = registry.infos().iter().map(|info| info.id).collect();
        let start = ids
            .iter()
            .position(|id| *id == settings.default_template)
            .unwrap_or(0);
        settings.default_template = Select::new("Default template:", ids)
            .with_starting_cursor(start)
            .prompt()?
            .to_string();
    } else {
        if let Some(dir) = data_dir {
            settings.data_dir = dir;
        }
        if let Some(id) = template {
            if !registry.contains(&id) {
                bail!("unknown template '{}'", id);
            }
            settings.default_template = id;
        }
    }

    config::save_settings(path, &settings)?;
    println!("✅ Settings saved.");
    Ok(())
}

/// Esc or Ctrl-C counts as "no".
fn confirm(message: &str) -> anyhow::Result<bool> {
    match Confirm::new(message).with_default(false).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
