//! Output formatters for command results.

use clap::ValueEnum;
use comfy_table::Table;
use menudb_core::{MenuItem, Order, OrderLine, SeedReport, TableDump};
use serde::Serialize;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format menu items.
    fn format_menu(&self, items: &[MenuItem]) -> String;

    /// Format orders joined with their product names.
    fn format_orders(&self, lines: &[OrderLine]) -> String;

    /// Format raw order rows.
    fn format_raw_orders(&self, orders: &[Order]) -> String;

    /// Format the raw contents of both tables.
    fn format_dump(&self, dump: &TableDump) -> String;

    /// Format the summary of a seeding run.
    fn format_seed_report(&self, report: &SeedReport) -> String;

    /// Format a mutation result.
    fn format_mutation_result(&self, affected: usize, message: &str) -> String;

    /// Format an error message.
    fn format_error(&self, error: &str) -> String;

    /// Format a plain message.
    fn format_message(&self, message: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_menu(&self, items: &[MenuItem]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["id", "product", "price"]);
        for item in items {
            table.add_row(vec![
                item.id.to_string(),
                item.name.clone(),
                format_money(item.price),
            ]);
        }
        with_row_count(table, items.len())
    }

    fn format_orders(&self, lines: &[OrderLine]) -> String {
        if lines.is_empty() {
            return "No orders".to_string();
        }

        let mut table = Table::new();
        table.set_header(vec!["id", "product", "quantity", "total"]);
        for line in lines {
            table.add_row(vec![
                line.order_id.to_string(),
                line.product.clone(),
                line.quantity.to_string(),
                format_money(line.total),
            ]);
        }
        with_row_count(table, lines.len())
    }

    fn format_raw_orders(&self, orders: &[Order]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["id", "menu_item_id", "quantity", "total"]);
        for order in orders {
            table.add_row(vec![
                order.id.to_string(),
                order.menu_item_id.to_string(),
                order.quantity.to_string(),
                format_money(order.total),
            ]);
        }
        with_row_count(table, orders.len())
    }

    fn format_dump(&self, dump: &TableDump) -> String {
        format!(
            "menu\n{}\n\npedidos\n{}",
            self.format_menu(&dump.menu),
            self.format_raw_orders(&dump.orders)
        )
    }

    fn format_seed_report(&self, report: &SeedReport) -> String {
        let mut lines = vec![format!(
            "{} inserted, {} skipped, {} rejected; {} item(s) on the menu",
            report.inserted,
            report.skipped,
            report.rejected.len(),
            report.total_items
        )];
        for rejected in &report.rejected {
            lines.push(format!("  rejected '{}': {}", rejected.name, rejected.reason));
        }
        lines.join("\n")
    }

    fn format_mutation_result(&self, affected: usize, message: &str) -> String {
        if message.is_empty() {
            format!("{} row(s) affected", affected)
        } else {
            format!("{} row(s) affected: {}", affected, message)
        }
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_menu(&self, items: &[MenuItem]) -> String {
        to_json(items, "[]")
    }

    fn format_orders(&self, lines: &[OrderLine]) -> String {
        to_json(lines, "[]")
    }

    fn format_raw_orders(&self, orders: &[Order]) -> String {
        to_json(orders, "[]")
    }

    fn format_dump(&self, dump: &TableDump) -> String {
        to_json(dump, "{}")
    }

    fn format_seed_report(&self, report: &SeedReport) -> String {
        to_json(report, "{}")
    }

    fn format_mutation_result(&self, affected: usize, message: &str) -> String {
        serde_json::json!({
            "affected": affected,
            "message": message
        })
        .to_string()
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({
            "error": error
        })
        .to_string()
    }

    fn format_message(&self, message: &str) -> String {
        serde_json::json!({
            "message": message
        })
        .to_string()
    }
}

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_menu(&self, items: &[MenuItem]) -> String {
        let mut output = String::from("id,product,price\n");
        for item in items {
            output.push_str(&format!("{},\"{}\",{}\n", item.id, escape_csv(&item.name), item.price));
        }
        output
    }

    fn format_orders(&self, lines: &[OrderLine]) -> String {
        let mut output = String::from("id,product,quantity,total\n");
        for line in lines {
            output.push_str(&format!(
                "{},\"{}\",{},{}\n",
                line.order_id,
                escape_csv(&line.product),
                line.quantity,
                line.total
            ));
        }
        output
    }

    fn format_raw_orders(&self, orders: &[Order]) -> String {
        let mut output = String::from("id,menu_item_id,quantity,total\n");
        for order in orders {
            output.push_str(&format!(
                "{},{},{},{}\n",
                order.id, order.menu_item_id, order.quantity, order.total
            ));
        }
        output
    }

    // Each section starts with a `# <table>` line.
    fn format_dump(&self, dump: &TableDump) -> String {
        format!(
            "# menu\n{}# pedidos\n{}",
            self.format_menu(&dump.menu),
            self.format_raw_orders(&dump.orders)
        )
    }

    fn format_seed_report(&self, report: &SeedReport) -> String {
        format!(
            "inserted,skipped,rejected,total_items\n{},{},{},{}",
            report.inserted,
            report.skipped,
            report.rejected.len(),
            report.total_items
        )
    }

    fn format_mutation_result(&self, affected: usize, message: &str) -> String {
        format!("affected,message\n{},\"{}\"", affected, escape_csv(message))
    }

    fn format_error(&self, error: &str) -> String {
        format!("error\n\"{}\"", escape_csv(error))
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}

fn with_row_count(table: Table, rows: usize) -> String {
    format!("{}\n{} row(s)", table, rows)
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
}

/// Format an amount with two decimals.
fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            MenuItem { id: 1, name: "pizza".into(), price: 12000.0 },
            MenuItem { id: 2, name: "soda \"light\"".into(), price: 3000.5 },
        ]
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("hello"), "hello");
        assert_eq!(escape_csv("say \"hi\""), "say \"\"hi\"\"");
    }

    #[test]
    fn test_table_menu() {
        let output = TableFormatter.format_menu(&sample_menu());
        assert!(output.contains("pizza"));
        assert!(output.contains("12000.00"));
        assert!(output.ends_with("2 row(s)"));
    }

    #[test]
    fn test_table_empty_orders() {
        assert_eq!(TableFormatter.format_orders(&[]), "No orders");
    }

    #[test]
    fn test_json_orders_round_trip() {
        let lines = vec![OrderLine {
            order_id: 4,
            product: "pizza".into(),
            quantity: 2,
            total: 24000.0,
        }];
        let output = JsonFormatter.format_orders(&lines);
        let parsed: Vec<OrderLine> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, lines);
    }

    #[test]
    fn test_csv_menu() {
        let output = CsvFormatter.format_menu(&sample_menu());
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows[0], "id,product,price");
        assert_eq!(rows[1], "1,\"pizza\",12000");
        assert_eq!(rows[2], "2,\"soda \"\"light\"\"\",3000.5");
    }

    fn sample_dump() -> TableDump {
        TableDump {
            menu: sample_menu(),
            orders: vec![Order { id: 1, menu_item_id: 9, quantity: 2, total: 24000.0 }],
        }
    }

    #[test]
    fn test_json_dump_is_one_document() {
        let output = JsonFormatter.format_dump(&sample_dump());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["menu"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["orders"][0]["menu_item_id"], 9);
    }

    #[test]
    fn test_table_and_csv_dump_label_sections() {
        let table = TableFormatter.format_dump(&sample_dump());
        assert!(table.starts_with("menu\n"));
        assert!(table.contains("\n\npedidos\n"));

        let csv = CsvFormatter.format_dump(&sample_dump());
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows[0], "# menu");
        assert_eq!(rows[1], "id,product,price");
        assert_eq!(rows[4], "# pedidos");
        assert_eq!(rows[5], "id,menu_item_id,quantity,total");
        assert_eq!(rows[6], "1,9,2,24000");
    }

    #[test]
    fn test_messages() {
        assert_eq!(TableFormatter.format_message("tables ready"), "tables ready");
        assert_eq!(
            JsonFormatter.format_message("tables ready"),
            r#"{"message":"tables ready"}"#
        );
    }

    #[test]
    fn test_mutation_results() {
        assert_eq!(TableFormatter.format_mutation_result(1, ""), "1 row(s) affected");
        assert_eq!(
            JsonFormatter.format_mutation_result(0, "not found"),
            r#"{"affected":0,"message":"not found"}"#
        );
    }
}
