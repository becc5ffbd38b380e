use std::path::Path;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use stockroom::Item;
use tracing::instrument;

use super::terminal;

/// Command arguments for `inv list`.
#[derive(Debug, Default, Parser)]
#[command(about = "List inventory items")]
pub struct List {
    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and format rows for scripting.
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    position: usize,
    name: &'a str,
    stock: i64,
}

impl List {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let store = super::open_store(root)?;
        let items = store.snapshot();

        match self.output {
            OutputFormat::Json => render_json(items),
            OutputFormat::Table => {
                render_table(items, self.quiet);
                Ok(())
            }
        }
    }
}

fn render_json(items: &[Item]) -> anyhow::Result<()> {
    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .map(|(index, item)| Row {
            position: index + 1,
            name: &item.name,
            stock: item.stock,
        })
        .collect();

    serde_json::to_writer_pretty(std::io::stdout(), &rows)
        .context("failed to render json output")?;
    println!();
    Ok(())
}

fn render_table(items: &[Item], quiet: bool) {
    if quiet {
        for (index, item) in items.iter().enumerate() {
            println!("{}\t{}\t{}", index + 1, item.name, item.stock);
        }
        return;
    }

    if items.is_empty() {
        println!("No items in inventory.");
        return;
    }

    if terminal::is_narrow() {
        for (index, item) in items.iter().enumerate() {
            println!("[{}] {item}", index + 1);
        }
        return;
    }

    let id_width = items.len().to_string().len() + 2;
    let name_width = items
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    println!("{:<id_width$}  {:<name_width$}  {:>6}", "ID", "NAME", "STOCK");
    println!("{:-<id_width$}  {:-<name_width$}  {:-<6}", "", "", "");

    for (index, item) in items.iter().enumerate() {
        let id = format!("[{}]", index + 1);
        println!("{id:<id_width$}  {:<name_width$}  {:>6}", item.name, item.stock);
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn run_succeeds_on_empty_inventory() {
        let tmp = tempdir().unwrap();

        List::default()
            .run(tmp.path())
            .expect("list should succeed with no inventory file");
    }

    #[test]
    fn run_succeeds_with_items_in_every_format() {
        let tmp = tempdir().unwrap();

        let mut store = super::super::open_store(tmp.path()).unwrap();
        store.add("Widget", "5").unwrap();
        store.add("Bolt", "-2").unwrap();
        drop(store);

        for output in [OutputFormat::Table, OutputFormat::Json] {
            let list = List {
                output,
                quiet: false,
            };
            list.run(tmp.path()).expect("list should succeed");
        }

        let quiet = List {
            output: OutputFormat::Table,
            quiet: true,
        };
        quiet.run(tmp.path()).expect("quiet list should succeed");
    }
}
