use diesel::prelude::*;

use crate::{db::DbConnection, models::Food, schema::food};

pub fn find_all_foods(conn: &DbConnection) -> QueryResult<Vec<Food>> {
    food::table.order(food::id.asc()).load::<Food>(conn)
}

/// Rows with the given id; empty when there is none.
pub fn find_food(item_id: i32, conn: &DbConnection) -> QueryResult<Vec<Food>> {
    food::table
        .filter(food::id.eq(item_id))
        .load::<Food>(conn)
}

pub fn find_categories(conn: &DbConnection) -> QueryResult<Vec<String>> {
    food::table
        .select(food::categorie)
        .distinct()
        .order(food::categorie.asc())
        .load::<String>(conn)
}

pub fn find_names(conn: &DbConnection) -> QueryResult<Vec<String>> {
    food::table
        .select(food::nom)
        .distinct()
        .order(food::nom.asc())
        .load::<String>(conn)
}
