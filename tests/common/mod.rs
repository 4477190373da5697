#![allow(dead_code)]

use diesel::r2d2::{ConnectionManager, Pool};

use nutrition_ranking::{
    db::DbPool,
    ingest::{
        persist,
        sheet::{Cell, Sheet},
    },
    models::Food,
    nutrient::Nutrient,
};

/// Single-connection pool, so every checkout sees the same in-memory database.
pub fn memory_pool() -> DbPool {
    let pool = Pool::builder()
        .max_size(1)
        .build(ConnectionManager::new(":memory:"))
        .unwrap();
    persist::create_tables(&pool.get().unwrap()).unwrap();
    pool
}

pub fn seed(pool: &DbPool, foods: &[Food]) {
    persist::replace_tables(&pool.get().unwrap(), &[], foods).unwrap();
}

pub fn food(id: i32, nom: &str, categorie: &str, nutrients: &[(Nutrient, f64)]) -> Food {
    let mut food = Food::new(id, nom, categorie, "par 100 g comestible");
    for &(nutrient, value) in nutrients {
        food.set_nutrient(nutrient, value);
    }
    food
}

/// Headers as they appear in the published spreadsheet, one per nutrient column.
pub const NUTRIENT_HEADERS: [&str; 39] = [
    "Energie, kilojoules (kJ)",
    "Energie, calories (kcal)",
    "Lipides, totaux (g)",
    "Acides gras, saturés (g)",
    "Acides gras, mono-insaturés (g)",
    "Acides gras, poly-insaturés (g)",
    "Acide linoléique (g)",
    "Acide alpha-linolénique (g)",
    "Cholestérol (mg)",
    "Glucides, disponibles (g)",
    "Sucres (g)",
    "Amidon (g)",
    "Fibres alimentaires (g)",
    "Protéines (g)",
    "Sel (NaCl) (g)",
    "Alcool (g)",
    "Eau (g)",
    "Rétinol (µg)",
    "Bêtacarotène (µg)",
    "Vitamine B1 (thiamine) (mg)",
    "Vitamine B2 (riboflavine) (mg)",
    "Vitamine B6 (pyridoxine) (mg)",
    "Vitamine B12 (cobalamine) (µg)",
    "Niacine (mg)",
    "Folate (µg)",
    "Acide pantothénique (mg)",
    "Vitamine C (acide ascorbique) (mg)",
    "Vitamine D (calciférol) (µg)",
    "Vitamine E (α-tocophérol) (mg)",
    "Potassium (K) (mg)",
    "Sodium (Na) (mg)",
    "Chlore (Cl) (mg)",
    "Calcium (Ca) (mg)",
    "Magnésium (Mg) (mg)",
    "Phosphore (P) (mg)",
    "Fer (Fe) (mg)",
    "Iode (I) (µg)",
    "Zinc (Zn) (mg)",
    "Sélénium (Se) (µg)",
];

fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

/// A sheet shaped like the raw dataset: metadata columns, source columns after every
/// nutrient, and a duplicated row.
pub fn raw_sheet() -> Sheet {
    let mut headers: Vec<String> = [
        "ID",
        "ID V 4.0",
        "ID SwissFIR",
        "Nom",
        "Synonymes",
        "Catégorie",
        "Densité",
        "Unité de matrice",
        "Entrée modifiée",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();

    for (index, header) in NUTRIENT_HEADERS.iter().enumerate() {
        headers.push(header.to_string());
        headers.push(if index == 0 {
            "Source".to_string()
        } else {
            format!("Source.{index}")
        });
        headers.push(format!("Dérivation de la valeur.{index}"));
    }

    let pomme = raw_row(1.0, "Pomme", text("Pomme crue"), "Fruits frais", |index| {
        match index {
            10 => text("tr."),
            15 => text("n.i."),
            35 => text("<0.1"),
            _ => Cell::Number(index as f64),
        }
    });
    let boeuf = raw_row(2.0, "Bœuf, filet", Cell::Empty, "Viande et abats", |index| {
        Cell::Number((index * 2) as f64)
    });

    Sheet::new(headers, vec![pomme.clone(), boeuf, pomme])
}

fn raw_row<F>(id: f64, nom: &str, synonymes: Cell, categorie: &str, fill: F) -> Vec<Cell>
where
    F: Fn(usize) -> Cell,
{
    let mut row = vec![
        Cell::Number(id),
        Cell::Number(id + 1000.0),
        Cell::Empty,
        text(nom),
        synonymes,
        text(categorie),
        Cell::Number(1.0),
        text("par 100 g comestible"),
        text("2023-08-01"),
    ];
    for index in 0..NUTRIENT_HEADERS.len() {
        row.push(fill(index));
        row.push(text("Swiss Food Composition Database"));
        row.push(text("calculé"));
    }
    row
}
