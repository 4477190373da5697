//! Ranks foods of the Swiss food composition database by nutrient content.
//!
//! Two entry points share this library:
//! - `nutrition-api`, read-only HTTP endpoints over the `food` table
//! - `populate`, the job that downloads the dataset and rebuilds `food` and `measures`
#[macro_use]
extern crate diesel;

pub mod config;
pub mod db;
pub mod error;
pub mod ingest;
pub mod matcher;
pub mod models;
pub mod nutrient;
pub mod phases;
pub mod query;
pub mod ranking;
pub mod routes;
pub mod schema;
pub mod seasonal;
