#![cfg(not(feature = "mysql"))]

mod common;

use std::collections::BTreeSet;

use nutrition_ranking::{
    matcher::TOP_FOOD_KEYWORDS,
    models::Food,
    nutrient::Nutrient,
    phases::{foods_for_phase, Phase},
    ranking::{top_foods_by_category, top_foods_by_keywords, top_foods_by_nutrient, Percentage},
};

use common::{food, memory_pool, seed};

fn pct(value: f64) -> Percentage {
    Percentage::new(value).unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Ten meats with protein 1..=10, plus a few other categories.
fn pantry() -> Vec<Food> {
    let mut foods: Vec<Food> = (1..=10)
        .map(|i| {
            food(
                i,
                &format!("Viande {i}"),
                "Viande et abats",
                &[(Nutrient::Proteines, i as f64), (Nutrient::Zinc, (11 - i) as f64)],
            )
        })
        .collect();

    foods.extend([
        food(11, "Pomme", "Fruits frais", &[(Nutrient::VitamineC, 5.0), (Nutrient::Magnesium, 5.0)]),
        food(12, "Kiwi", "Fruits frais", &[(Nutrient::VitamineC, 90.0), (Nutrient::Magnesium, 17.0)]),
        food(13, "Moules", "Fruits de mer", &[(Nutrient::Zinc, 40.0), (Nutrient::Proteines, 24.0)]),
        food(14, "Épinards", "Légumes cuits", &[(Nutrient::Magnesium, 80.0), (Nutrient::Fer, 3.6)]),
        food(15, "Limonade", "Boissons sucrées", &[(Nutrient::VitamineC, 120.0)]),
        food(16, "Amandes", "Noix et graines", &[(Nutrient::Magnesium, 270.0), (Nutrient::VitamineB6, 0.1)]),
        food(17, "Levure", "Divers", &[(Nutrient::VitamineB6, 1.5), (Nutrient::Magnesium, 60.0)]),
        food(18, "Flocons d'avoine", "Produits céréaliers", &[(Nutrient::Magnesium, 130.0)]),
        food(19, "Lait entier", "Lait et produits laitiers", &[(Nutrient::Proteines, 3.3)]),
        food(20, "Oeuf", "Œufs", &[(Nutrient::Proteines, 12.6), (Nutrient::VitamineB6, 0.12)]),
    ]);
    foods
}

#[test]
fn test_limit_applied_in_nutrient_order() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let top = top_foods_by_category(
        &conn,
        &strings(&["Viande et abats"]),
        pct(0.2),
        Nutrient::Proteines,
    )
    .unwrap();

    assert_eq!(top, ["Viande 10", "Viande 9"]);
}

#[test]
fn test_full_percentage_returns_every_match() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let top = top_foods_by_category(
        &conn,
        &strings(&["Viande et abats", "Fruits frais"]),
        pct(1.0),
        Nutrient::Zinc,
    )
    .unwrap();

    assert_eq!(top.len(), 12);
    assert_eq!(top[0], "Viande 1");
    // fruits have no zinc measured and come last, by id
    assert_eq!(&top[10..], ["Pomme", "Kiwi"]);
}

#[test]
fn test_small_percentage_still_returns_one() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let top = top_foods_by_category(
        &conn,
        &strings(&["Fruits frais"]),
        pct(0.01),
        Nutrient::VitamineC,
    )
    .unwrap();

    assert_eq!(top, ["Kiwi"]);
}

#[test]
fn test_unmatched_categories_return_nothing() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let none = top_foods_by_category(&conn, &strings(&["Plats"]), pct(1.0), Nutrient::Fer).unwrap();
    assert!(none.is_empty());

    let empty = top_foods_by_category(&conn, &[], pct(1.0), Nutrient::Fer).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_rank_size_bounded_by_count() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();
    let categories = strings(&["Viande et abats", "Fruits frais", "Fruits de mer"]);

    for step in 1..=10 {
        let top =
            top_foods_by_category(&conn, &categories, pct(step as f64 / 10.0), Nutrient::Zinc)
                .unwrap();
        assert!(!top.is_empty() && top.len() <= 13, "step {step}");
    }
}

#[test]
fn test_absolute_ranking_ignores_categories() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let top = top_foods_by_nutrient(&conn, pct(0.1), Nutrient::Magnesium).unwrap();
    let names: Vec<_> = top.iter().map(|f| f.nom.as_str()).collect();

    assert_eq!(names, ["Amandes", "Flocons d'avoine"]);
    assert_eq!(top[0].magnesium, Some(270.0));
}

#[test]
fn test_absolute_ranking_on_empty_table() {
    let pool = memory_pool();
    let conn = pool.get().unwrap();

    assert!(top_foods_by_nutrient(&conn, pct(1.0), Nutrient::Fer)
        .unwrap()
        .is_empty());
}

#[test]
fn test_keywords_ranked_in_order() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let ranked =
        top_foods_by_keywords(&conn, &TOP_FOOD_KEYWORDS, pct(1.0), Nutrient::VitamineC).unwrap();

    let keywords: Vec<_> = ranked.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(keywords, TOP_FOOD_KEYWORDS);

    // seafood and sweet drinks are kept out of fruits
    assert_eq!(ranked[0].foods, ["Kiwi", "Pomme"]);
    assert_eq!(ranked[1].foods, ["Épinards"]);
    assert_eq!(ranked[2].foods, ["Lait entier"]);
    assert!(ranked[3].foods.is_empty());
    assert_eq!(ranked[8].foods.len(), 10);
}

#[test]
fn test_luteal_phase() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let top = foods_for_phase(&conn, Phase::Luteal, pct(0.1)).unwrap();

    let keys: BTreeSet<_> = top.keys().map(String::as_str).collect();
    assert_eq!(keys, BTreeSet::from(["magnesium", "vitamin_b"]));
    assert_eq!(top["vitamin_b"], ["Levure", "Oeuf"]);
    assert_eq!(top["magnesium"], ["Amandes", "Flocons d'avoine"]);
}

#[test]
fn test_repeated_nutrient_keeps_one_key() {
    let pool = memory_pool();
    seed(&pool, &pantry());
    let conn = pool.get().unwrap();

    let top = foods_for_phase(&conn, Phase::Ovulatory, pct(0.05)).unwrap();

    let keys: Vec<_> = top.keys().map(String::as_str).collect();
    assert_eq!(keys, ["dietary_fiber", "selenium", "vitamin_c", "zinc"]);
    assert_eq!(top["zinc"], ["Moules"]);
}
