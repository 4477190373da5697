use serde::{Deserialize, Serialize};

use crate::schema::{food, measures};

/// One row of the `food` table.
///
/// Nutrient columns are nullable: `None` means "not measured", which is not the same as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable, Insertable)]
#[table_name = "food"]
pub struct Food {
    pub id: i32,
    pub nom: String,
    pub synonymes: Option<String>,
    pub categorie: String,
    pub unite_de_matrice: String,
    pub energie_kilojoules: Option<i32>,
    pub energie_calories: Option<i32>,
    pub lipides_totaux: Option<f64>,
    pub acides_gras_satures: Option<f64>,
    pub acides_gras_mono_insatures: Option<f64>,
    pub acides_gras_poly_insatures: Option<f64>,
    pub acide_linoleique: Option<f64>,
    pub acide_alpha_linolenique: Option<f64>,
    pub cholesterol: Option<i32>,
    pub glucides_disponibles: Option<f64>,
    pub sucres: Option<f64>,
    pub amidon: Option<f64>,
    pub fibres_alimentaires: Option<f64>,
    pub proteines: Option<f64>,
    pub sel: Option<f64>,
    pub alcool: Option<f64>,
    pub eau: Option<f64>,
    pub retinol: Option<i32>,
    pub betacarotene: Option<f64>,
    pub vitamine_b1: Option<f64>,
    pub vitamine_b2: Option<f64>,
    pub vitamine_b6: Option<f64>,
    pub vitamine_b12: Option<f64>,
    pub niacine: Option<f64>,
    pub folate: Option<f64>,
    pub acide_pantothenique: Option<f64>,
    pub vitamine_c: Option<f64>,
    pub vitamine_d: Option<f64>,
    pub vitamine_e: Option<f64>,
    pub potassium: Option<f64>,
    pub sodium: Option<f64>,
    pub chlore: Option<f64>,
    pub calcium: Option<f64>,
    pub magnesium: Option<f64>,
    pub phosphore: Option<f64>,
    pub fer: Option<f64>,
    pub iode: Option<f64>,
    pub zinc: Option<f64>,
    pub selenium: Option<f64>,
}

impl Food {
    /// A record with identity fields set and every nutrient unmeasured.
    pub fn new(id: i32, nom: &str, categorie: &str, unite_de_matrice: &str) -> Self {
        Food {
            id,
            nom: nom.to_string(),
            categorie: categorie.to_string(),
            unite_de_matrice: unite_de_matrice.to_string(),
            ..Default::default()
        }
    }
}

/// Unit a nutrient column was expressed in, with its factor to the base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Insertable)]
#[table_name = "measures"]
pub struct Measure {
    pub name: String,
    pub unit: String,
    pub conversion: f64,
}

/// Response item of `/top-foods/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFoods {
    pub category: String,
    pub foods: Vec<String>,
}
