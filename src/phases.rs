//! Fixed nutrient priorities for the four phases of the menstrual cycle.
use std::{collections::BTreeMap, fmt, str::FromStr};

use diesel::QueryResult;

use crate::{
    db::DbConnection,
    error::ApiError,
    nutrient::Nutrient,
    ranking::{top_foods_by_nutrient, Percentage},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
}

/// One line of a phase's priority list.
///
/// `categories` are not applied when ranking; ranking always covers the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseNutrient {
    pub label: &'static str,
    pub nutrient: Nutrient,
    pub categories: &'static [&'static str],
}

const fn entry(
    label: &'static str,
    nutrient: Nutrient,
    categories: &'static [&'static str],
) -> PhaseNutrient {
    PhaseNutrient {
        label,
        nutrient,
        categories,
    }
}

const MENSTRUAL: &[PhaseNutrient] = &[
    entry("iron", Nutrient::Fer, &[]),
    entry("vitamin_c", Nutrient::VitamineC, &["Fruits", "Légumes"]),
    entry("magnesium", Nutrient::Magnesium, &[]),
    entry("alpha_linolenic_acid", Nutrient::AcideAlphaLinolenique, &["Poissons"]),
];

const FOLLICULAR: &[PhaseNutrient] = &[
    entry("protein", Nutrient::Proteines, &[]),
    entry("available_carbohydrates", Nutrient::GlucidesDisponibles, &["flocons et céréales"]),
];

// zinc is listed twice; the later entry wins in the result
const OVULATORY: &[PhaseNutrient] = &[
    entry("zinc", Nutrient::Zinc, &["Fruits de mer", "Viande"]),
    entry("dietary_fiber", Nutrient::FibresAlimentaires, &[]),
    entry("vitamin_c", Nutrient::VitamineC, &[]),
    entry("selenium", Nutrient::Selenium, &[]),
    entry("zinc", Nutrient::Zinc, &[]),
];

const LUTEAL: &[PhaseNutrient] = &[
    entry("vitamin_b", Nutrient::VitamineB6, &[]),
    entry("magnesium", Nutrient::Magnesium, &[]),
];

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Menstrual,
        Phase::Follicular,
        Phase::Ovulatory,
        Phase::Luteal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Menstrual => "menstrual",
            Phase::Follicular => "follicular",
            Phase::Ovulatory => "ovulatory",
            Phase::Luteal => "luteal",
        }
    }

    fn french_name(self) -> &'static str {
        match self {
            Phase::Menstrual => "menstruelle",
            Phase::Follicular => "folliculaire",
            Phase::Ovulatory => "ovulatoire",
            Phase::Luteal => "luteale",
        }
    }

    pub fn nutrients(self) -> &'static [PhaseNutrient] {
        match self {
            Phase::Menstrual => MENSTRUAL,
            Phase::Follicular => FOLLICULAR,
            Phase::Ovulatory => OVULATORY,
            Phase::Luteal => LUTEAL,
        }
    }
}

impl FromStr for Phase {
    type Err = ApiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.name() == name || phase.french_name() == name)
            .ok_or_else(|| {
                let valid: Vec<_> = Phase::ALL.iter().map(|p| p.name()).collect();
                ApiError::Validation(format!(
                    "Phase {name} not found. Valid phases: {}.",
                    valid.join(", ")
                ))
            })
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top foods for each nutrient of `phase`, keyed by entry label.
pub fn foods_for_phase(
    conn: &DbConnection,
    phase: Phase,
    percentage: Percentage,
) -> QueryResult<BTreeMap<String, Vec<String>>> {
    let mut top_foods = BTreeMap::new();

    for entry in phase.nutrients() {
        let names = top_foods_by_nutrient(conn, percentage, entry.nutrient)?
            .into_iter()
            .map(|food| food.nom)
            .collect();
        top_foods.insert(entry.label.to_string(), names);
    }

    Ok(top_foods)
}
