//! Register commands - parsing clerk input into named operations.
//!
//! One command per line. The command word is case-insensitive; item names may contain
//! spaces, so commands that take a trailing value split on the last whitespace.

use crate::errors::{Error, Result};
use std::str::FromStr;

/// Summary of every command, shown by `help`.
pub const HELP_TEXT: &str = "Commands:\n\
    • `list` - Show items with price, selection, and quantity.\n\
    • `toggle <item>` - Select or deselect an item.\n\
    • `qty <item> <quantity>` - Set the quantity for an item.\n\
    • `add <item> <price>` - Add a custom item to the catalog.\n\
    • `bill` - Generate the bill for the selected items.\n\
    • `clear` - Deselect all items (quantities are kept).\n\
    • `history` - Show all recorded purchases, newest first.\n\
    • `help` - Show this help message.\n\
    • `exit` - Leave the register.";

/// A named register operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the catalog
    List,
    /// Flip an item's selection
    Toggle {
        /// Item name
        name: String,
    },
    /// Set an item's quantity from raw input
    Quantity {
        /// Item name
        name: String,
        /// Raw quantity text, coerced by the catalog
        value: String,
    },
    /// Add a custom item
    Add {
        /// Item name
        name: String,
        /// Raw price text, validated by the catalog
        price: String,
    },
    /// Generate the bill
    Bill,
    /// Deselect everything
    Clear,
    /// Show purchase history
    History,
    /// Show help
    Help,
    /// Leave the register
    Exit,
}

fn usage(text: &str) -> Error {
    Error::invalid_input(format!("Usage: {text}"))
}

/// Splits `<name> <value>` on the last whitespace.
fn name_and_value(rest: &str, usage_text: &str) -> Result<(String, String)> {
    let (name, value) = rest
        .trim()
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| usage(usage_text))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(usage(usage_text));
    }
    Ok((name.to_string(), value.to_string()))
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "toggle" | "select" => {
                if rest.is_empty() {
                    return Err(usage("toggle <item>"));
                }
                Ok(Self::Toggle {
                    name: rest.to_string(),
                })
            }
            "qty" | "quantity" => {
                let (name, value) = name_and_value(rest, "qty <item> <quantity>")?;
                Ok(Self::Quantity { name, value })
            }
            "add" => {
                let (name, price) = name_and_value(rest, "add <item> <price>")?;
                Ok(Self::Add { name, price })
            }
            "bill" => Ok(Self::Bill),
            "clear" => Ok(Self::Clear),
            "history" | "report" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            other => Err(Error::invalid_input(format!(
                "Unknown command '{other}'. Type `help` for a list of commands."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!("list".parse::<Command>().unwrap(), Command::List);
        assert_eq!("  BILL ".parse::<Command>().unwrap(), Command::Bill);
        assert_eq!("clear".parse::<Command>().unwrap(), Command::Clear);
        assert_eq!("history".parse::<Command>().unwrap(), Command::History);
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Exit);
    }

    #[test]
    fn test_toggle_keeps_full_name() {
        assert_eq!(
            "toggle Eggs (Dozen)".parse::<Command>().unwrap(),
            Command::Toggle {
                name: "Eggs (Dozen)".to_string()
            }
        );
        assert!("toggle".parse::<Command>().is_err());
    }

    #[test]
    fn test_quantity_splits_on_last_space() {
        assert_eq!(
            "qty Rice (1kg) 3".parse::<Command>().unwrap(),
            Command::Quantity {
                name: "Rice (1kg)".to_string(),
                value: "3".to_string()
            }
        );
        // Values are passed through raw; the catalog coerces them
        assert_eq!(
            "qty Milk abc".parse::<Command>().unwrap(),
            Command::Quantity {
                name: "Milk".to_string(),
                value: "abc".to_string()
            }
        );
        assert!("qty Milk".parse::<Command>().is_err());
    }

    #[test]
    fn test_add_command() {
        assert_eq!(
            "add Chilli Flakes 30.5".parse::<Command>().unwrap(),
            Command::Add {
                name: "Chilli Flakes".to_string(),
                price: "30.5".to_string()
            }
        );
        assert!(matches!(
            "add 30".parse::<Command>(),
            Err(Error::InvalidInput { message: _ })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let err = "checkout".parse::<Command>().unwrap_err();
        assert!(err.to_string().contains("Unknown command 'checkout'"));
    }
}
