//! ChefByte inventory assistant, terminal edition.
//!
//! Thin wiring around the real components: an OpenAI action source, the
//! reconciliation engine, and an in-memory store seeded with one `milk`
//! item. All decisions live in the library crates.

use std::io::{BufRead, Write};

use anyhow::Context;

use chefbyte_core::ItemName;
use chefbyte_llm::{ActionSource, OpenAiActionSource};
use chefbyte_reconcile::{ActionOutcome, OutcomeStatus, ReconciliationEngine};
use chefbyte_store::{InMemoryInventoryStore, InventoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    chefbyte_observability::init();

    let source =
        OpenAiActionSource::from_env().context("configuring the OpenAI action source")?;
    let store = InMemoryInventoryStore::new();
    seed(&store)?;

    let engine = ReconciliationEngine::new();
    let mut profile = std::env::var("CHEFBYTE_PROFILE").unwrap_or_default();

    println!("ChefByte inventory assistant");
    println!("Commands: inventory | image <path> | profile <text> | recipe <text> | quit");
    println!("Anything else is treated as an inventory change in natural language.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "inventory" => print_inventory(&store)?,
            _ if line.starts_with("profile ") => {
                profile = line["profile ".len()..].trim().to_string();
                println!("profile saved");
            }
            _ if line.starts_with("recipe ") => {
                let input = line["recipe ".len()..].trim();
                if profile.is_empty() {
                    println!("set a taste profile first: profile <text>");
                    continue;
                }
                let inventory = store.list_all()?;
                match source.suggest_recipe(input, &profile, &inventory, false).await {
                    Ok(suggestion) => println!("{suggestion}"),
                    Err(e) => tracing::error!(error = %e, "recipe suggestion failed"),
                }
            }
            _ if line.starts_with("image ") => {
                let path = line["image ".len()..].trim();
                match std::fs::read(path) {
                    Ok(bytes) => {
                        let inventory = store.list_all()?;
                        match source.propose_from_image(&bytes, &inventory).await {
                            Ok(actions) => {
                                let outcomes = engine.reconcile(&store, &actions)?;
                                print_outcomes(&outcomes);
                            }
                            Err(e) => tracing::error!(error = %e, "image extraction failed"),
                        }
                    }
                    Err(e) => tracing::error!(%path, error = %e, "could not read image"),
                }
            }
            input => {
                let inventory = store.list_all()?;
                match source.propose_from_text(input, &inventory).await {
                    Ok(actions) => {
                        let outcomes = engine.reconcile(&store, &actions)?;
                        print_outcomes(&outcomes);
                    }
                    Err(e) => tracing::error!(error = %e, "action extraction failed"),
                }
            }
        }
    }

    Ok(())
}

/// Start with one item, like the original deployment.
fn seed(store: &InMemoryInventoryStore) -> anyhow::Result<()> {
    if store.is_empty() {
        store.insert(&ItemName::new("milk")?, 1, None)?;
    }
    Ok(())
}

fn print_inventory(store: &InMemoryInventoryStore) -> anyhow::Result<()> {
    let items = store.list_all()?;
    if items.is_empty() {
        println!("inventory is empty");
        return Ok(());
    }
    for item in items {
        match item.expiration_date {
            Some(date) => println!("{:<30} {:>6}  expires {date}", item.name, item.quantity),
            None => println!("{:<30} {:>6}", item.name, item.quantity),
        }
    }
    Ok(())
}

fn print_outcomes(outcomes: &[ActionOutcome]) {
    for outcome in outcomes {
        let label = match outcome.status {
            OutcomeStatus::Applied => "ok",
            OutcomeStatus::Warned => "warn",
            OutcomeStatus::Rejected => "error",
        };
        println!("[{label}] {}", outcome.message);
    }
}
