//! Command definitions and dispatch.

use std::path::PathBuf;

use clap::Subcommand;
use menudb_core::{normalize_name, Entity, MenuDb, Price, Quantity, SeedDocument};
use tracing::info;

use crate::error::CliError;
use crate::formatter::Formatter;

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the tables if they do not exist
    Init,

    /// Load menu items from a JSON document (`{"menu": {"pizza": 5000}}`)
    Seed {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Manage menu items
    #[command(subcommand)]
    Menu(MenuCommand),

    /// Manage orders
    #[command(subcommand)]
    Order(OrderCommand),

    /// Print the raw contents of both tables
    Dump,
}

/// Menu item commands.
#[derive(Subcommand, Debug)]
pub enum MenuCommand {
    /// List every menu item
    List,

    /// Show one menu item
    Show { id: i64 },

    /// Add a menu item
    Add { name: String, price: String },

    /// Replace the name and price of a menu item
    Edit { id: i64, name: String, price: String },

    /// Delete a menu item
    Delete { id: i64 },
}

/// Order commands.
#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Place an order for a product on the menu
    Add { product: String, quantity: String },

    /// List orders with their product names
    List,

    /// Delete an order
    Delete { id: i64 },
}

/// Execute a command against an open database and return formatted output.
pub fn execute(
    db: &MenuDb,
    command: &Command,
    formatter: &dyn Formatter,
) -> Result<String, CliError> {
    match command {
        // Opening the database already created the tables.
        Command::Init => {
            info!(path = %db.config().path.display(), "tables ready");
            Ok(formatter.format_message("tables ready"))
        }
        Command::Seed { file } => {
            let document = SeedDocument::from_path(file)?;
            let report = db.catalog().seed(&document)?;
            Ok(formatter.format_seed_report(&report))
        }
        Command::Menu(cmd) => execute_menu(db, cmd, formatter),
        Command::Order(cmd) => execute_order(db, cmd, formatter),
        Command::Dump => Ok(formatter.format_dump(&db.dump()?)),
    }
}

fn execute_menu(
    db: &MenuDb,
    command: &MenuCommand,
    formatter: &dyn Formatter,
) -> Result<String, CliError> {
    let catalog = db.catalog();

    match command {
        MenuCommand::List => Ok(formatter.format_menu(&catalog.list_all()?)),
        MenuCommand::Show { id } => {
            let item = catalog.get(*id)?.ok_or(menudb_core::Error::NotFound {
                entity: Entity::MenuItem,
                id: *id,
            })?;
            Ok(formatter.format_menu(&[item]))
        }
        MenuCommand::Add { name, price } => {
            let item = catalog.create(name, price.parse::<Price>()?)?;
            Ok(formatter.format_mutation_result(
                1,
                &format!("added '{}' with id {}", item.name, item.id),
            ))
        }
        MenuCommand::Edit { id, name, price } => {
            let price = price.parse::<Price>()?;
            catalog.update(*id, name, price)?.require(Entity::MenuItem, *id)?;
            Ok(formatter.format_mutation_result(1, &format!("updated menu item {}", id)))
        }
        MenuCommand::Delete { id } => {
            catalog.delete(*id)?.require(Entity::MenuItem, *id)?;
            Ok(formatter.format_mutation_result(1, &format!("deleted menu item {}", id)))
        }
    }
}

fn execute_order(
    db: &MenuDb,
    command: &OrderCommand,
    formatter: &dyn Formatter,
) -> Result<String, CliError> {
    let orders = db.orders();

    match command {
        OrderCommand::Add { product, quantity } => {
            let order = orders.create(product, quantity.parse::<Quantity>()?)?;
            // The lookup matched this exact name, so it is the menu's spelling.
            Ok(formatter.format_mutation_result(
                1,
                &format!(
                    "order {}: {} x{} = {:.2}",
                    order.id,
                    normalize_name(product),
                    order.quantity,
                    order.total
                ),
            ))
        }
        OrderCommand::List => Ok(formatter.format_orders(&orders.list_all()?)),
        OrderCommand::Delete { id } => {
            orders.delete(*id)?.require(Entity::Order, *id)?;
            Ok(formatter.format_mutation_result(1, &format!("deleted order {}", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{JsonFormatter, TableFormatter};
    use menudb_core::{OrderLine, StoreConfig};

    fn test_db() -> (MenuDb, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = MenuDb::open(StoreConfig::new(dir.path().join("restaurante.db"))).unwrap();
        (db, dir)
    }

    fn run(db: &MenuDb, command: Command) -> Result<String, CliError> {
        execute(db, &command, &TableFormatter)
    }

    #[test]
    fn test_menu_add_and_list() {
        let (db, _dir) = test_db();

        let output = run(
            &db,
            Command::Menu(MenuCommand::Add { name: " Pizza ".into(), price: "12000".into() }),
        )
        .unwrap();
        assert!(output.contains("added 'pizza'"));

        let listing = run(&db, Command::Menu(MenuCommand::List)).unwrap();
        assert!(listing.contains("pizza"));
        assert!(listing.contains("1 row(s)"));
    }

    #[test]
    fn test_duplicate_and_malformed_are_distinct() {
        let (db, _dir) = test_db();
        let add = |price: &str| {
            run(
                &db,
                Command::Menu(MenuCommand::Add { name: "soda".into(), price: price.into() }),
            )
        };

        add("3000").unwrap();
        assert!(matches!(
            add("3000"),
            Err(CliError::Store(menudb_core::Error::DuplicateName { .. }))
        ));
        assert!(matches!(
            add("three"),
            Err(CliError::Store(menudb_core::Error::MalformedInput { .. }))
        ));
    }

    #[test]
    fn test_edit_and_delete_missing_report_not_found() {
        let (db, _dir) = test_db();

        let edit = run(
            &db,
            Command::Menu(MenuCommand::Edit { id: 5, name: "x".into(), price: "1".into() }),
        );
        assert!(matches!(
            edit,
            Err(CliError::Store(menudb_core::Error::NotFound { entity: Entity::MenuItem, id: 5 }))
        ));

        let delete = run(&db, Command::Order(OrderCommand::Delete { id: 3 }));
        assert!(matches!(
            delete,
            Err(CliError::Store(menudb_core::Error::NotFound { entity: Entity::Order, id: 3 }))
        ));
    }

    #[test]
    fn test_seed_then_order() {
        let (db, dir) = test_db();
        let path = dir.path().join("datos.json");
        std::fs::write(&path, r#"{"menu": {"pizza": 12000, "soda": 3000}}"#).unwrap();

        let report = run(&db, Command::Seed { file: path }).unwrap();
        assert!(report.starts_with("2 inserted"));

        let placed = run(
            &db,
            Command::Order(OrderCommand::Add { product: "PIZZA ".into(), quantity: "2".into() }),
        )
        .unwrap();
        assert!(placed.ends_with("pizza x2 = 24000.00"));

        let output = execute(&db, &Command::Order(OrderCommand::List), &JsonFormatter).unwrap();
        let lines: Vec<OrderLine> = serde_json::from_str(&output).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product, "pizza");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].total, 24000.0);
    }

    #[test]
    fn test_dump_shows_both_tables() {
        let (db, _dir) = test_db();
        run(&db, Command::Menu(MenuCommand::Add { name: "pizza".into(), price: "10".into() }))
            .unwrap();
        run(
            &db,
            Command::Order(OrderCommand::Add { product: "pizza".into(), quantity: "1".into() }),
        )
        .unwrap();

        let output = run(&db, Command::Dump).unwrap();
        assert!(output.contains("product"));
        assert!(output.contains("menu_item_id"));

        let json = execute(&db, &Command::Dump, &JsonFormatter).unwrap();
        let dump: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(dump["menu"][0]["name"], "pizza");
        assert_eq!(dump["orders"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_init_prints_plain_message() {
        let (db, _dir) = test_db();
        assert_eq!(run(&db, Command::Init).unwrap(), "tables ready");
        assert_eq!(
            execute(&db, &Command::Init, &JsonFormatter).unwrap(),
            r#"{"message":"tables ready"}"#
        );
    }
}
