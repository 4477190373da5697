//! Registry of the numeric nutrient columns of the `food` table.
//!
//! Handlers receive nutrient names as strings; they are resolved here into a [`Nutrient`]
//! before any query is built, so unknown names never reach the store.
use std::{fmt, str::FromStr};

use diesel::prelude::*;
use diesel::query_builder::BoxedSelectStatement;

use crate::{db::Backend, error::ApiError, models::Food, schema::food};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientKind {
    Integer,
    Float,
}

impl NutrientKind {
    pub fn sql_type(self) -> &'static str {
        match self {
            NutrientKind::Integer => "INTEGER",
            NutrientKind::Float => "DOUBLE",
        }
    }
}

macro_rules! stored_value {
    (Integer, $value:expr) => {
        $value.round() as i32
    };
    (Float, $value:expr) => {
        $value
    };
}

macro_rules! nutrients {
    ($($variant:ident => $column:ident, $alias:literal, $kind:ident;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Nutrient {
            $($variant,)*
        }

        impl Nutrient {
            /// Every nutrient, in table column order.
            pub const ALL: &'static [Nutrient] = &[$(Nutrient::$variant,)*];

            /// Column name in the `food` table.
            pub fn column(self) -> &'static str {
                match self {
                    $(Nutrient::$variant => stringify!($column),)*
                }
            }

            /// English name accepted by the API next to the column name.
            pub fn alias(self) -> &'static str {
                match self {
                    $(Nutrient::$variant => $alias,)*
                }
            }

            pub fn kind(self) -> NutrientKind {
                match self {
                    $(Nutrient::$variant => NutrientKind::$kind,)*
                }
            }

            /// Orders by this nutrient, highest first, ties by id.
            pub(crate) fn order_desc<'a, ST>(
                self,
                query: BoxedSelectStatement<'a, ST, food::table, Backend>,
            ) -> BoxedSelectStatement<'a, ST, food::table, Backend> {
                match self {
                    $(Nutrient::$variant => query.order((food::$column.desc(), food::id.asc())),)*
                }
            }
        }

        impl Food {
            pub fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
                match nutrient {
                    $(Nutrient::$variant => self.$column.map(f64::from),)*
                }
            }

            /// Integer columns receive the value rounded; callers check integrality first.
            pub fn set_nutrient(&mut self, nutrient: Nutrient, value: f64) {
                match nutrient {
                    $(Nutrient::$variant => self.$column = Some(stored_value!($kind, value)),)*
                }
            }
        }
    };
}

nutrients! {
    EnergieKilojoules => energie_kilojoules, "energy_kj", Integer;
    EnergieCalories => energie_calories, "energy_kcal", Integer;
    LipidesTotaux => lipides_totaux, "total_fat", Float;
    AcidesGrasSatures => acides_gras_satures, "saturated_fat", Float;
    AcidesGrasMonoInsatures => acides_gras_mono_insatures, "monounsaturated_fat", Float;
    AcidesGrasPolyInsatures => acides_gras_poly_insatures, "polyunsaturated_fat", Float;
    AcideLinoleique => acide_linoleique, "linoleic_acid", Float;
    AcideAlphaLinolenique => acide_alpha_linolenique, "alpha_linolenic_acid", Float;
    Cholesterol => cholesterol, "cholesterol", Integer;
    GlucidesDisponibles => glucides_disponibles, "available_carbohydrates", Float;
    Sucres => sucres, "sugars", Float;
    Amidon => amidon, "starch", Float;
    FibresAlimentaires => fibres_alimentaires, "dietary_fiber", Float;
    Proteines => proteines, "protein", Float;
    Sel => sel, "salt", Float;
    Alcool => alcool, "alcohol", Float;
    Eau => eau, "water", Float;
    Retinol => retinol, "retinol", Integer;
    Betacarotene => betacarotene, "beta_carotene", Float;
    VitamineB1 => vitamine_b1, "vitamin_b1", Float;
    VitamineB2 => vitamine_b2, "vitamin_b2", Float;
    VitamineB6 => vitamine_b6, "vitamin_b6", Float;
    VitamineB12 => vitamine_b12, "vitamin_b12", Float;
    Niacine => niacine, "niacin", Float;
    Folate => folate, "folate", Float;
    AcidePantothenique => acide_pantothenique, "pantothenic_acid", Float;
    VitamineC => vitamine_c, "vitamin_c", Float;
    VitamineD => vitamine_d, "vitamin_d", Float;
    VitamineE => vitamine_e, "vitamin_e", Float;
    Potassium => potassium, "potassium", Float;
    Sodium => sodium, "sodium", Float;
    Chlore => chlore, "chloride", Float;
    Calcium => calcium, "calcium", Float;
    Magnesium => magnesium, "magnesium", Float;
    Phosphore => phosphore, "phosphorus", Float;
    Fer => fer, "iron", Float;
    Iode => iode, "iodine", Float;
    Zinc => zinc, "zinc", Float;
    Selenium => selenium, "selenium", Float;
}

impl FromStr for Nutrient {
    type Err = ApiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Nutrient::ALL
            .iter()
            .copied()
            .find(|n| n.column() == name || n.alias() == name)
            .ok_or_else(|| ApiError::Validation(format!("Nutrient {name} not found.")))
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
