use std::path::{Path, PathBuf};

mod form;
mod list;
mod terminal;

use clap::ArgAction;
use dialoguer::Confirm;
use list::List;
use stockroom::Store;
use tracing::instrument;

/// Name of the per-directory configuration file.
const CONFIG_FILE: &str = ".inventory.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory holding the inventory file
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::List(List::default()))
            .run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List inventory items (default)
    List(List),

    /// Add a new item to the inventory
    Add(Add),

    /// Delete an item by its 1-based ID
    ///
    /// Deleting an item renumbers every item after it: positions are derived
    /// from list order, not stored.
    Delete(Delete),

    /// Manage the inventory through an interactive form
    Form,

    /// Show or modify configuration settings
    Config(Config),
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(root)?,
            Self::Add(command) => command.run(root)?,
            Self::Delete(command) => command.run(root)?,
            Self::Form => form::run(root)?,
            Self::Config(command) => command.run(root)?,
        }
        Ok(())
    }
}

/// Loads the configuration for `root`, falling back to defaults.
fn load_config(root: &Path) -> stockroom::Config {
    let path = root.join(CONFIG_FILE);
    stockroom::Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        stockroom::Config::default()
    })
}

/// Opens the store for `root` using the configured inventory file name.
fn open_store(root: &Path) -> anyhow::Result<Store> {
    let config = load_config(root);
    let store = Store::open(root.join(config.file()))?;
    Ok(store)
}

#[derive(Debug, clap::Parser)]
pub struct Add {
    /// The display name of the new item
    name: String,

    /// The stock quantity (any integer)
    stock: String,
}

impl Add {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        use terminal::Colorize;

        let mut store = open_store(root)?;
        let position = store.add(&self.name, &self.stock)?;

        println!(
            "{}",
            format!("Added [{position}] {} (Stock: {})", self.name, self.stock).success()
        );
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Delete {
    /// The 1-based ID of the item to delete
    id: String,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Delete {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        use terminal::Colorize;

        let mut store = open_store(root)?;

        if !self.yes {
            let target = self
                .id
                .parse::<stockroom::Position>()
                .ok()
                .and_then(|position| store.snapshot().get(position.index()))
                .map_or_else(
                    || format!("item [{}]", self.id),
                    |item| format!("item [{}] {}", self.id, item.name),
                );

            let proceed = Confirm::new()
                .with_prompt(format!("Delete {target}?"))
                .default(false)
                .interact()?;
            if !proceed {
                println!("Cancelled");
                return Ok(());
            }
        }

        let item = store.delete_by_position(&self.id)?;

        println!(
            "{}",
            format!("Item [{}] deleted. ({})", self.id, item.name).success()
        );
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Config {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl Config {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        use terminal::Colorize;

        let config_path = root.join(CONFIG_FILE);

        match self.command {
            ConfigCommand::Show => {
                let config = load_config(root);

                println!("Configuration:");
                println!("  file: {}", config.file());
            }
            ConfigCommand::Set { key, value } => {
                let mut config = load_config(root);

                match key.as_str() {
                    "file" => {
                        if value.is_empty() {
                            anyhow::bail!("Value must not be empty");
                        }

                        config.set_file(value);
                        config
                            .save(&config_path)
                            .map_err(|e| anyhow::anyhow!("{e}"))?;

                        println!(
                            "{}",
                            format!("Inventory file: {}", config.file()).success()
                        );
                    }
                    _ => {
                        anyhow::bail!("Unknown configuration key: '{key}'\nSupported keys: file");
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use stockroom::Store;
    use tempfile::tempdir;

    use super::*;

    fn names(root: &Path) -> Vec<String> {
        let store = open_store(root).unwrap();
        store
            .snapshot()
            .iter()
            .map(|item| item.name.clone())
            .collect()
    }

    #[test]
    fn add_run_appends_and_persists() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();

        let add = Add {
            name: "Widget".to_string(),
            stock: "5".to_string(),
        };
        add.run(root).expect("add command should succeed");

        assert_eq!(names(root), ["Widget"]);
    }

    #[test]
    fn add_run_rejects_invalid_stock() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();

        let add = Add {
            name: "Widget".to_string(),
            stock: "abc".to_string(),
        };
        assert!(add.run(root).is_err());

        assert!(names(root).is_empty());
    }

    #[test]
    fn delete_run_removes_and_renumbers() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();

        let mut store = open_store(root).unwrap();
        store.add("A", "1").unwrap();
        store.add("B", "2").unwrap();
        store.add("C", "3").unwrap();

        let delete = Delete {
            id: "2".to_string(),
            yes: true,
        };
        delete.run(root).expect("delete command should succeed");

        assert_eq!(names(root), ["A", "C"]);
    }

    #[test]
    fn delete_run_rejects_out_of_range_id() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();

        let mut store = open_store(root).unwrap();
        store.add("A", "1").unwrap();

        let delete = Delete {
            id: "5".to_string(),
            yes: true,
        };
        assert!(delete.run(root).is_err());

        assert_eq!(names(root), ["A"]);
    }

    #[test]
    fn config_set_file_redirects_the_store() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();

        let config = Config {
            command: ConfigCommand::Set {
                key: "file".to_string(),
                value: "warehouse.json".to_string(),
            },
        };
        config.run(root).expect("config set should succeed");

        let mut store = open_store(root).unwrap();
        store.add("Widget", "5").unwrap();

        assert!(root.join("warehouse.json").exists());
        assert!(!root.join("inventory.json").exists());
    }

    #[test]
    fn config_set_unknown_key_is_an_error() {
        let tmp = tempdir().unwrap();

        let config = Config {
            command: ConfigCommand::Set {
                key: "colour".to_string(),
                value: "blue".to_string(),
            },
        };
        assert!(config.run(tmp.path()).is_err());
    }

    #[test]
    fn open_store_surfaces_malformed_files() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("inventory.json"), "{ nope").unwrap();

        assert!(open_store(tmp.path()).is_err());
    }

    #[test]
    fn stores_opened_through_config_round_trip() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();

        let mut store = open_store(root).unwrap();
        store.add("Widget", "5").unwrap();
        drop(store);

        let store = Store::open(root.join("inventory.json")).unwrap();
        assert_eq!(store.snapshot()[0].stock, 5);
    }
}
