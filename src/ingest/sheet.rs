use std::{
    collections::HashSet,
    hash::{Hash, Hasher},
    io::Cursor,
};

use calamine::{Data, Reader, Xlsx};

use crate::error::IngestError;

/// Banner rows above the header row of the dataset.
const HEADER_ROW: usize = 2;

#[derive(Debug, Clone)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

/// Bit pattern used for equality and hashing: every NaN is one value and `-0.0 == 0.0`.
fn number_key(number: f64) -> u64 {
    if number.is_nan() {
        f64::NAN.to_bits()
    } else if number == 0.0 {
        0.0f64.to_bits()
    } else {
        number.to_bits()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Empty, Cell::Empty) => true,
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Number(a), Cell::Number(b)) => number_key(*a) == number_key(*b),
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Cell::Empty => 0u8.hash(state),
            Cell::Text(text) => {
                1u8.hash(state);
                text.hash(state);
            }
            Cell::Number(number) => {
                2u8.hash(state);
                number_key(*number).hash(state);
            }
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(text) => Cell::Text(text.clone()),
            Data::Float(number) => Cell::Number(*number),
            Data::Int(number) => Cell::Number(*number as f64),
            other => Cell::Text(other.to_string()),
        }
    }
}

/// A header row plus data rows, all the same width as the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Reads the first worksheet of an xlsx document held in memory.
    pub fn from_xlsx(bytes: Vec<u8>) -> Result<Self, IngestError> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(IngestError::EmptyWorkbook)?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // the range starts at the first used row, not at row 0 of the sheet
        let first_row = range.start().map_or(0, |(row, _)| row as usize);
        let mut rows = range.rows().skip(HEADER_ROW.saturating_sub(first_row));
        let headers = rows
            .next()
            .ok_or(IngestError::EmptyWorkbook)?
            .iter()
            .map(|data| data.to_string().trim().to_string())
            .collect();

        let rows = rows
            .map(|row| row.iter().map(Cell::from).collect::<Vec<_>>())
            .filter(|row| row.iter().any(|cell| *cell != Cell::Empty))
            .collect();

        Ok(Self::new(headers, rows))
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Keeps the first of every set of identical rows.
    pub fn drop_duplicate_rows(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen = HashSet::new();
        self.rows.retain(|row| seen.insert(row.clone()));
        before - self.rows.len()
    }

    /// Drops every column whose header fails `keep`, returning the dropped headers.
    pub fn retain_columns<F>(&mut self, mut keep: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        let kept: Vec<bool> = self.headers.iter().map(|h| keep(h)).collect();

        let mut dropped = Vec::new();
        let mut index = 0;
        self.headers.retain(|header| {
            let retained = kept[index];
            if !retained {
                dropped.push(header.clone());
            }
            index += 1;
            retained
        });

        for row in &mut self.rows {
            let mut index = 0;
            row.retain(|_| {
                let retained = kept[index];
                index += 1;
                retained
            });
        }

        dropped
    }

    pub fn rename_columns<F>(&mut self, rename: F)
    where
        F: FnMut(&String) -> String,
    {
        self.headers = self.headers.iter().map(rename).collect();
    }
}
