//! The interactive management form.
//!
//! Re-renders the inventory, then loops over a three-way action menu until
//! the user exits. Validation failures print a message and leave the
//! inventory untouched; persistence failures abort the process through the
//! binary's error path.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use stockroom::{AddError, DeleteError, Item, Store};
use tracing::instrument;

use super::terminal::Colorize;

const ACTIONS: [&str; 3] = ["Add item", "Delete item", "Exit"];

/// Runs the form loop until the user picks Exit.
#[instrument]
pub fn run(root: &Path) -> anyhow::Result<()> {
    let mut store = super::open_store(root)?;
    let theme = ColorfulTheme::default();

    loop {
        render(store.snapshot());

        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => add_item(&mut store, &theme)?,
            1 => delete_item(&mut store, &theme)?,
            _ => break,
        }
        println!();
    }

    Ok(())
}

fn render(items: &[Item]) {
    println!("Inventory Items");
    if items.is_empty() {
        println!("  No items in inventory.");
    } else {
        for (index, item) in items.iter().enumerate() {
            println!("  [{}] {item}", index + 1);
        }
    }
    println!();
}

fn add_item(store: &mut Store, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Item Name")
        .allow_empty(true)
        .interact_text()?;
    let stock: String = Input::with_theme(theme)
        .with_prompt("Stock")
        .allow_empty(true)
        .interact_text()?;

    match store.add(&name, &stock) {
        Ok(position) => println!("{}", format!("Added item [{position}].").success()),
        Err(AddError::MissingFields) => {
            println!("{}", "Both name and stock are required.".dim());
        }
        Err(AddError::InvalidStock(_)) => println!("{}", "Invalid stock value.".warning()),
        Err(AddError::Save(e)) => return Err(e.into()),
    }
    Ok(())
}

fn delete_item(store: &mut Store, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Item ID to delete")
        .allow_empty(true)
        .interact_text()?;

    match store.delete_by_position(&id) {
        Ok(_) => println!("{}", format!("Item [{id}] deleted.").success()),
        Err(DeleteError::MissingId) => {
            println!("{}", "Please enter an item ID to delete.".warning());
        }
        Err(DeleteError::InvalidId(_)) => println!("{}", "Invalid item ID.".warning()),
        Err(DeleteError::Save(e)) => return Err(e.into()),
    }
    Ok(())
}
