//! Register layer - the clerk-facing terminal interface.
//!
//! The register owns the catalog state and a purchase store, turns [`Command`]s into
//! calls on the core, and renders the results as text. The read loop is generic over
//! async readers and writers so a whole session can be driven from a test.

/// Command parsing and help text
pub mod commands;

pub use commands::{Command, HELP_TEXT};

use crate::{
    core::{
        billing::{self, BillOutcome},
        catalog::Catalog,
        purchase::PurchaseStore,
        report,
    },
    errors::{Error, Result},
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, instrument};

/// Greeting printed when the register starts.
pub const BANNER: &str = "Grocery Billing System\nSelect items, edit quantities, add custom items, then generate the bill.\nType `help` for commands.";

/// Shown when a bill is requested with nothing selected.
pub const NOTHING_SELECTED: &str = "No items selected. Please select at least one item.";

/// What the register wants the interface to do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show this text to the clerk
    Message(String),
    /// End the session
    Exit,
}

/// Session state: the catalog being billed and where sold lines are recorded.
pub struct Register<S> {
    catalog: Catalog,
    store: S,
}

impl<S: PurchaseStore> Register<S> {
    /// Creates a register over an initial catalog.
    #[must_use]
    pub const fn new(catalog: Catalog, store: S) -> Self {
        Self { catalog, store }
    }

    /// Current catalog and selection state.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The purchase store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Ends the session, handing back the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Parses and runs one input line. Blank lines produce no reply.
    pub async fn handle_line(&mut self, line: &str) -> Option<Reply> {
        if line.trim().is_empty() {
            return None;
        }
        match line.parse::<Command>() {
            Ok(command) => Some(self.handle(command).await),
            Err(e) => Some(Reply::Message(format_error(&e))),
        }
    }

    /// Runs a command against the session state.
    #[instrument(skip(self))]
    pub async fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::List => Reply::Message(render_catalog(&self.catalog)),
            Command::Toggle { name } => Reply::Message(match self.catalog.toggle_selection(&name) {
                Some(true) => format!("✅ Selected {name}."),
                Some(false) => format!("Deselected {name}."),
                None => unknown_item(&name),
            }),
            Command::Quantity { name, value } => {
                Reply::Message(match self.catalog.set_quantity(&name, &value) {
                    Some(quantity) => format!("Quantity for {name} set to {quantity}."),
                    None => unknown_item(&name),
                })
            }
            Command::Add { name, price } => {
                Reply::Message(match self.catalog.add_custom_item(&name, &price) {
                    Ok(item) => format!("✅ Added {} ({:.2}).", item.name, item.unit_price),
                    Err(e) => format_error(&e),
                })
            }
            Command::Bill => Reply::Message(self.bill().await),
            Command::Clear => {
                self.catalog.clear_all_selections();
                Reply::Message("All selections cleared.".to_string())
            }
            Command::History => {
                Reply::Message(match report::purchase_history_report(&self.store).await {
                    Ok(text) => text,
                    Err(e) => {
                        error!("Failed to load purchase history: {e}");
                        format_error(&e)
                    }
                })
            }
            Command::Help => Reply::Message(HELP_TEXT.to_string()),
            Command::Exit => Reply::Exit,
        }
    }

    async fn bill(&self) -> String {
        match billing::generate_bill(&self.catalog, &self.store).await {
            Ok(BillOutcome::Billed(bill)) => format!("🧾 Bill Summary\n{}", bill.summary()),
            Ok(BillOutcome::Empty) => NOTHING_SELECTED.to_string(),
            Err(e) => {
                error!("Bill generation failed: {e}");
                format_error(&e)
            }
        }
    }
}

fn unknown_item(name: &str) -> String {
    format!("❌ Unknown item '{name}'. Use `list` to see available items.")
}

/// Clerk-facing rendering of an error.
#[must_use]
pub fn format_error(error: &Error) -> String {
    format!("❌ {error}")
}

/// Numbered catalog listing with selection marks and quantities.
#[must_use]
pub fn render_catalog(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "The catalog is empty. Use `add <item> <price>` to add items.".to_string();
    }
    catalog
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mark = if entry.selection.selected { "x" } else { " " };
            format!(
                "{:>2}. [{mark}] {} ({:.2})  qty {}",
                index + 1,
                entry.item.name,
                entry.item.unit_price,
                entry.selection.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads commands from `input` until `exit` or end of input, writing replies to `output`.
///
/// # Errors
/// Returns an error only when reading input or writing output fails.
pub async fn run<S, R, W>(register: &mut Register<S>, input: R, output: &mut W) -> Result<()>
where
    S: PurchaseStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_line(output, BANNER).await?;

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };
        match register.handle_line(&line).await {
            Some(Reply::Message(text)) => write_line(output, &text).await?,
            Some(Reply::Exit) => break,
            None => {}
        }
    }

    write_line(output, "Goodbye.").await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
