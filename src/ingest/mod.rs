//! # Ingestion
//!
//! One-shot load of the Swiss food composition database into the `food` and `measures`
//! tables.
//!
//! 1. Fetch the xlsx snapshot (single attempt, any failure aborts the run).
//! 2. Clean: drop duplicate rows and metadata columns, normalize headers.
//! 3. Derive `measures` from the unit suffix still carried by each header.
//! 4. Derive `food` rows, coercing nutrient cells to numbers.
//! 5. Replace both tables in one transaction.
//!
//! Runs must not overlap against the same database; nothing here locks.
use log::info;
use reqwest::blocking::Client;

pub mod clean;
pub mod foods;
pub mod measures;
pub mod persist;
pub mod sheet;

use crate::{
    db::DbConnection,
    error::IngestError,
    models::{Food, Measure},
};
use sheet::Sheet;

/// Web archive snapshot, so the dataset behind a run never changes.
pub const DATASET_URL: &str = "https://web.archive.org/web/20240423194012/https://naehrwertdaten.ch/wp-content/uploads/2023/08/Base_de_donnees_suisse_des_valeurs_nutritives.xlsx";

#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    pub measures: Vec<Measure>,
    pub foods: Vec<Food>,
}

pub fn fetch_dataset(client: &Client, url: &str) -> Result<Vec<u8>, IngestError> {
    info!("Fetching dataset from {url}");
    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;
    info!("Fetched {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

/// Runs the cleaning and derivation stages on a sheet read from the dataset.
pub fn build_tables(sheet: Sheet) -> Result<Tables, IngestError> {
    info!("Read {} rows, {} columns", sheet.rows.len(), sheet.headers.len());
    let sheet = clean::clean(sheet);

    let measures = measures::derive_measures(&sheet)?;
    info!("Derived {} measures", measures.len());

    let foods = foods::derive_foods(&sheet)?;
    info!("Derived {} foods", foods.len());

    Ok(Tables { measures, foods })
}

pub fn store_tables(conn: &DbConnection, tables: &Tables) -> Result<(), IngestError> {
    persist::replace_tables(conn, &tables.measures, &tables.foods)?;
    info!(
        "Replaced tables: {} measures, {} foods",
        tables.measures.len(),
        tables.foods.len()
    );
    Ok(())
}

/// Fetches, cleans and stores the dataset.
pub fn run(client: &Client, url: &str, conn: &DbConnection) -> Result<Tables, IngestError> {
    let bytes = fetch_dataset(client, url)?;
    let tables = build_tables(Sheet::from_xlsx(bytes)?)?;
    store_tables(conn, &tables)?;
    Ok(tables)
}
