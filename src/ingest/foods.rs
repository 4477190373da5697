use super::{
    measures::base_name,
    sheet::{Cell, Sheet},
};
use crate::{
    error::IngestError,
    models::Food,
    nutrient::{Nutrient, NutrientKind},
};

/// Markers the dataset uses for "trace" and "not indicated"; both load as zero.
const ZERO_MARKERS: [&str; 2] = ["tr.", "n.i."];

struct Columns {
    id: usize,
    nom: usize,
    synonymes: Option<usize>,
    categorie: usize,
    unite_de_matrice: usize,
    nutrients: Vec<(Nutrient, usize)>,
}

impl Columns {
    fn locate(names: &[String]) -> Result<Self, IngestError> {
        let find = |name: &str| names.iter().position(|n| n == name);
        let require =
            |name: &str| find(name).ok_or_else(|| IngestError::MissingColumn(name.to_string()));

        let nutrients = Nutrient::ALL
            .iter()
            .map(|&nutrient| -> Result<_, IngestError> {
                Ok((nutrient, require(nutrient.column())?))
            })
            .collect::<Result<_, IngestError>>()?;

        Ok(Self {
            id: require("id")?,
            nom: require("nom")?,
            synonymes: find("synonymes"),
            categorie: require("categorie")?,
            unite_de_matrice: require("unite_de_matrice")?,
            nutrients,
        })
    }
}

/// Builds `food` rows from a cleaned sheet, zero-filling unmeasured nutrients.
pub fn derive_foods(sheet: &Sheet) -> Result<Vec<Food>, IngestError> {
    let names: Vec<String> = sheet.headers.iter().map(|h| base_name(h)).collect();
    let columns = Columns::locate(&names)?;

    sheet
        .rows
        .iter()
        .map(|row| -> Result<Food, IngestError> {
            let id = parse_number("id", &row[columns.id])?
                .filter(|id| id.fract() == 0.0)
                .ok_or_else(|| invalid("id", &row[columns.id]))?;

            let mut food = Food::new(
                id as i32,
                &text(&row[columns.nom]),
                &text(&row[columns.categorie]),
                &text(&row[columns.unite_de_matrice]),
            );
            food.synonymes = columns
                .synonymes
                .map(|index| text(&row[index]))
                .filter(|synonymes| !synonymes.is_empty());

            for &(nutrient, index) in &columns.nutrients {
                let cell = &row[index];
                let value = parse_number(nutrient.column(), cell)?.unwrap_or(0.0);
                if nutrient.kind() == NutrientKind::Integer && value.fract() != 0.0 {
                    return Err(invalid(nutrient.column(), cell));
                }
                food.set_nutrient(nutrient, value);
            }

            Ok(food)
        })
        .collect()
}

/// `None` for blank cells and zero markers, the parsed value otherwise.
fn parse_number(column: &str, cell: &Cell) -> Result<Option<f64>, IngestError> {
    match cell {
        Cell::Empty => Ok(None),
        Cell::Number(number) if number.is_finite() => Ok(Some(*number)),
        Cell::Number(_) => Err(invalid(column, cell)),
        Cell::Text(raw) => {
            let value = raw.trim();
            if value.is_empty() || ZERO_MARKERS.contains(&value) {
                return Ok(None);
            }
            value
                .replacen('<', "", 1)
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| invalid(column, cell))
        }
    }
}

fn text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => text.trim().to_string(),
        Cell::Number(number) => number.to_string(),
    }
}

fn invalid(column: &str, cell: &Cell) -> IngestError {
    IngestError::InvalidNumber {
        column: column.to_string(),
        value: text(cell),
    }
}
