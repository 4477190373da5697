//! Top-N ranking of foods by nutrient, where N is a share of the candidate rows.
use diesel::prelude::*;

use crate::{
    db::DbConnection,
    error::ApiError,
    matcher::{map_keywords, CategoryMatch},
    models::{CategoryFoods, Food},
    nutrient::Nutrient,
    query,
    schema::food,
};

/// Share of candidate rows to return, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage(f64);

impl Percentage {
    pub fn new(value: f64) -> Result<Self, ApiError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Percentage(value))
        } else {
            Err(ApiError::Validation(
                "Percentage must be between 0.0 and 1.0.".to_string(),
            ))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// `max(1, round(count * percentage))`, rounding halves to even.
pub fn limit_for(count: i64, percentage: Percentage) -> i64 {
    let scaled = (count as f64 * percentage.value()).round_ties_even();
    (scaled as i64).max(1)
}

/// Names of the foods in `categories` with the most of `nutrient`.
pub fn top_foods_by_category(
    conn: &DbConnection,
    categories: &[String],
    percentage: Percentage,
    nutrient: Nutrient,
) -> QueryResult<Vec<String>> {
    let count: i64 = food::table
        .filter(food::categorie.eq_any(categories.iter().map(String::as_str)))
        .count()
        .get_result(conn)?;

    if count == 0 {
        return Ok(Vec::new());
    }

    let query = food::table
        .select(food::nom)
        .filter(food::categorie.eq_any(categories.iter().map(String::as_str)))
        .into_boxed();

    nutrient
        .order_desc(query)
        .limit(limit_for(count, percentage))
        .load::<String>(conn)
}

/// Foods with the most of `nutrient` across the whole table.
pub fn top_foods_by_nutrient(
    conn: &DbConnection,
    percentage: Percentage,
    nutrient: Nutrient,
) -> QueryResult<Vec<Food>> {
    let count: i64 = food::table.count().get_result(conn)?;

    if count == 0 {
        return Ok(Vec::new());
    }

    nutrient
        .order_desc(food::table.into_boxed())
        .limit(limit_for(count, percentage))
        .load::<Food>(conn)
}

/// Ranks every keyword's categories, keeping the keyword order.
pub fn top_foods_by_keywords<K: AsRef<str>>(
    conn: &DbConnection,
    keywords: &[K],
    percentage: Percentage,
    nutrient: Nutrient,
) -> QueryResult<Vec<CategoryFoods>> {
    let known_categories = query::find_categories(conn)?;

    map_keywords(keywords, &known_categories)
        .into_iter()
        .map(|CategoryMatch { keyword, categories }| {
            Ok(CategoryFoods {
                foods: top_foods_by_category(conn, &categories, percentage, nutrient)?,
                category: keyword,
            })
        })
        .collect()
}
