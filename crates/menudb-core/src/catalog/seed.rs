//! Bulk loading of the menu from a JSON document.
//!
//! The document has the shape `{"menu": {"pizza": 5000, "hamburguesa": 8000}}`.
//! Loading is idempotent: names that already exist are skipped, never
//! overwritten.

use std::path::Path;

use rusqlite::params;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::CatalogStore;
use crate::error::Result;
use crate::input::{Price, ProductName};

/// A parsed seed document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDocument {
    /// Product name to price, in document order. Prices may be numbers or
    /// numeric strings.
    #[serde(default)]
    pub menu: serde_json::Map<String, serde_json::Value>,
}

impl SeedDocument {
    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Build a document from name/price pairs.
    pub fn from_prices<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let menu = entries
            .into_iter()
            .map(|(name, price)| (name.into(), serde_json::Value::from(price)))
            .collect();
        Self { menu }
    }
}

/// An entry that could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedEntry {
    /// Name as written in the document.
    pub name: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Summary of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedReport {
    /// Entries inserted by this run.
    pub inserted: usize,
    /// Entries whose normalized name already existed.
    pub skipped: usize,
    /// Entries with an unusable name or price.
    pub rejected: Vec<RejectedEntry>,
    /// Menu size after the run.
    pub total_items: usize,
}

fn parse_entry(name: &str, price: &serde_json::Value) -> Result<(ProductName, Price)> {
    let name = ProductName::parse(name)?;
    let price = match price {
        serde_json::Value::String(s) => s.parse::<Price>()?,
        other => other.to_string().parse::<Price>()?,
    };
    Ok((name, price))
}

impl CatalogStore {
    /// Insert every entry of `document`, ignoring names that already exist.
    ///
    /// Runs in a single transaction, in document order: when two keys
    /// normalize to the same name, the first one wins. Entries with a
    /// malformed name or price are reported in [`SeedReport::rejected`] and
    /// do not stop the load.
    pub fn seed(&self, document: &SeedDocument) -> Result<SeedReport> {
        let mut conn = self.pool().get()?;
        let tx = conn.transaction()?;
        let mut report = SeedReport::default();

        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO menu (producto, precio) VALUES (?1, ?2)")?;

            for (raw_name, raw_price) in &document.menu {
                let (name, price) = match parse_entry(raw_name, raw_price) {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(name = %raw_name, error = %e, "seed entry rejected");
                        report.rejected.push(RejectedEntry {
                            name: raw_name.clone(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                };

                if stmt.execute(params![name.as_str(), price.value()])? == 0 {
                    report.skipped += 1;
                } else {
                    report.inserted += 1;
                }
            }
        }

        let total: i64 = tx.query_row("SELECT COUNT(*) FROM menu", [], |row| row.get(0))?;
        tx.commit()?;

        report.total_items = total as usize;
        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            rejected = report.rejected.len(),
            total_items = report.total_items,
            "menu seeded"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{open_pool, schema, StoreConfig};

    fn test_store() -> (CatalogStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let pool = open_pool(&StoreConfig::new(dir.path().join("menu.db"))).unwrap();
        schema::create_tables(&pool.get().unwrap()).unwrap();
        (CatalogStore::new(pool), dir)
    }

    #[test]
    fn test_parse_document() {
        let doc = SeedDocument::from_json_str(r#"{"menu": {"Pizza": 5000, "soda": "3000"}}"#)
            .unwrap();
        assert_eq!(doc.menu.len(), 2);

        let empty = SeedDocument::from_json_str("{}").unwrap();
        assert!(empty.menu.is_empty());

        assert!(SeedDocument::from_json_str("not json").is_err());
    }

    #[test]
    fn test_seed_inserts_normalized() {
        let (store, _dir) = test_store();
        let doc = SeedDocument::from_json_str(r#"{"menu": {" Pizza ": 5000, "Soda": "3000.5"}}"#)
            .unwrap();

        let report = store.seed(&doc).unwrap();
        assert_eq!(report.inserted, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.total_items, 2);

        assert_eq!(store.find_by_name("pizza").unwrap().unwrap().price, 5000.0);
        assert_eq!(store.find_by_name("soda").unwrap().unwrap().price, 3000.5);
    }

    #[test]
    fn test_seed_is_idempotent_and_does_not_overwrite() {
        let (store, _dir) = test_store();
        store.create("pizza", Price::new(9999.0).unwrap()).unwrap();

        let doc = SeedDocument::from_prices([("pizza", 5000.0), ("soda", 3000.0)]);
        let first = store.seed(&doc).unwrap();
        assert_eq!(first.inserted, 1);
        assert_eq!(first.skipped, 1);

        let second = store.seed(&doc).unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(second.total_items, 2);

        assert_eq!(store.find_by_name("pizza").unwrap().unwrap().price, 9999.0);
    }

    #[test]
    fn test_seed_first_duplicate_key_wins() {
        let (store, _dir) = test_store();
        let doc =
            SeedDocument::from_json_str(r#"{"menu": {"pizza": 6000, "PIZZA": 5000}}"#).unwrap();

        let report = store.seed(&doc).unwrap();
        assert_eq!(report.inserted, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(store.find_by_name("pizza").unwrap().unwrap().price, 6000.0);

        let reversed =
            SeedDocument::from_json_str(r#"{"menu": {"Soda": 1500, "soda": 2500}}"#).unwrap();
        store.seed(&reversed).unwrap();
        assert_eq!(store.find_by_name("soda").unwrap().unwrap().price, 1500.0);
    }

    #[test]
    fn test_seed_rejects_bad_entries() {
        let (store, _dir) = test_store();
        let doc = SeedDocument::from_json_str(
            r#"{"menu": {"pizza": 5000, "agua": "gratis", "  ": 10, "jugo": null}}"#,
        )
        .unwrap();

        let report = store.seed(&doc).unwrap();
        assert_eq!(report.inserted, 1);
        assert_eq!(report.rejected.len(), 3);
        assert_eq!(store.count().unwrap(), 1);

        let names: Vec<&str> = report.rejected.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"agua"));
        assert!(names.contains(&"jugo"));
    }
}
