use diesel::prelude::*;

use crate::{
    db::DbConnection,
    models::{Food, Measure},
    nutrient::Nutrient,
    schema::{food, measures},
};

/// Rows per INSERT statement, kept well under placeholder limits.
const INSERT_CHUNK: usize = 500;

const MEASURES_COLUMNS: &str = "name TEXT NOT NULL, unit TEXT NOT NULL, conversion DOUBLE NOT NULL";

fn measures_ddl(create: &str) -> String {
    format!("{create} measures ({MEASURES_COLUMNS})")
}

fn food_ddl(create: &str) -> String {
    let mut columns = vec![
        "id INTEGER PRIMARY KEY NOT NULL".to_string(),
        "nom TEXT NOT NULL".to_string(),
        "synonymes TEXT".to_string(),
        "categorie TEXT NOT NULL".to_string(),
        "unite_de_matrice TEXT NOT NULL".to_string(),
    ];
    columns.extend(
        Nutrient::ALL
            .iter()
            .map(|n| format!("{} {}", n.column(), n.kind().sql_type())),
    );
    format!("{create} food ({})", columns.join(", "))
}

/// Drops and recreates both tables, leaving them empty.
pub fn create_tables(conn: &DbConnection) -> QueryResult<()> {
    diesel::sql_query("DROP TABLE IF EXISTS measures").execute(conn)?;
    diesel::sql_query("DROP TABLE IF EXISTS food").execute(conn)?;
    diesel::sql_query(measures_ddl("CREATE TABLE")).execute(conn)?;
    diesel::sql_query(food_ddl("CREATE TABLE")).execute(conn)?;
    Ok(())
}

/// SQLite keeps DDL inside the surrounding transaction, so the tables are recreated there.
#[cfg(not(feature = "mysql"))]
fn prepare_tables(_conn: &DbConnection) -> QueryResult<()> {
    Ok(())
}

#[cfg(not(feature = "mysql"))]
fn reset_tables(conn: &DbConnection) -> QueryResult<()> {
    create_tables(conn)
}

/// MySQL commits on DDL, so tables are created before the transaction and only emptied in it.
#[cfg(feature = "mysql")]
fn prepare_tables(conn: &DbConnection) -> QueryResult<()> {
    diesel::sql_query(measures_ddl("CREATE TABLE IF NOT EXISTS")).execute(conn)?;
    diesel::sql_query(food_ddl("CREATE TABLE IF NOT EXISTS")).execute(conn)?;
    Ok(())
}

#[cfg(feature = "mysql")]
fn reset_tables(conn: &DbConnection) -> QueryResult<()> {
    diesel::delete(measures::table).execute(conn)?;
    diesel::delete(food::table).execute(conn)?;
    Ok(())
}

/// Replaces the contents of `measures` and `food` wholesale.
///
/// A failed insert rolls back to the previous contents on both backends.
pub fn replace_tables(
    conn: &DbConnection,
    measure_rows: &[Measure],
    food_rows: &[Food],
) -> QueryResult<()> {
    prepare_tables(conn)?;

    conn.transaction(|| {
        reset_tables(conn)?;

        for chunk in measure_rows.chunks(INSERT_CHUNK) {
            diesel::insert_into(measures::table)
                .values(chunk)
                .execute(conn)?;
        }

        for chunk in food_rows.chunks(INSERT_CHUNK) {
            diesel::insert_into(food::table).values(chunk).execute(conn)?;
        }

        Ok(())
    })
}
