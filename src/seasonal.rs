//! Best-effort scrape of a seasonal produce calendar page.
use log::{info, warn};
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::error::IngestError;

/// Produce names listed on the page, or `None` when the page did not answer 200.
pub fn fetch_seasonal_produce(
    client: &Client,
    url: &str,
    selector: &str,
) -> Result<Option<Vec<String>>, IngestError> {
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        warn!("Seasonal calendar returned {}, skipping", response.status());
        return Ok(None);
    }

    let produce = parse_produce(&response.text()?, selector)?;
    info!("Found {} seasonal products", produce.len());
    Ok(Some(produce))
}

pub fn parse_produce(html: &str, selector: &str) -> Result<Vec<String>, IngestError> {
    let selector =
        Selector::parse(selector).map_err(|_| IngestError::Selector(selector.to_string()))?;
    let document = Html::parse_document(html);

    let mut produce: Vec<String> = Vec::new();
    for element in document.select(&selector) {
        let name = element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if !name.is_empty() && !produce.contains(&name) {
            produce.push(name);
        }
    }

    Ok(produce)
}
