use std::sync::LazyLock;

use log::{info, warn};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::sheet::Sheet;

/// Identifiers and bookkeeping columns that carry no nutrient data.
const DROPPED_COLUMNS: [&str; 4] = ["ID V 4.0", "ID SwissFIR", "Densité", "Entrée modifiée"];

static RE_DROPPED_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Source|Dérivation de la valeur|Activité de)").expect("Invalid regex")
});

/// A parenthetical group directly followed by another one.
static RE_DOUBLE_PARENTHESIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\([^)]+\)(\s*\([^)]+\))").expect("Invalid regex")
});

/// Removes duplicate rows and non-data columns, then normalizes the remaining headers.
pub fn clean(mut sheet: Sheet) -> Sheet {
    let duplicates = sheet.drop_duplicate_rows();
    info!("Dropped {duplicates} duplicate rows");

    for column in DROPPED_COLUMNS {
        if sheet.column(column).is_none() {
            warn!("Column {column} not found in dataset");
        }
    }

    let dropped = sheet.retain_columns(|header| {
        !DROPPED_COLUMNS.contains(&header) && !RE_DROPPED_PREFIX.is_match(header)
    });
    info!("Dropped {} columns", dropped.len());

    sheet.rename_columns(|header| normalize_header(&strip_double_parenthesis(header)));
    sheet
}

/// `"Vitamine B1 (thiamine) (mg)"` becomes `"Vitamine B1 (mg)"`; only the last group is kept.
pub fn strip_double_parenthesis(header: &str) -> String {
    let mut header = header.to_string();
    while RE_DOUBLE_PARENTHESIS.is_match(&header) {
        header = RE_DOUBLE_PARENTHESIS.replace_all(&header, "$1").into_owned();
    }
    header
}

/// Canonical column name: trimmed, no commas, `_` for spaces and hyphens, lowercase ASCII.
pub fn normalize_header(header: &str) -> String {
    let header = header
        .trim()
        .replace(',', "")
        .replace([' ', '-'], "_")
        .to_lowercase();
    remove_accents(&header)
}

/// Decomposes accented letters and drops the marks. The micro sign becomes `u`.
pub fn remove_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'µ' | 'μ' => 'u',
            other => other,
        })
        .nfkd()
        .filter(char::is_ascii)
        .collect()
}
