//! Maps short category keywords ("Fruits", "viande") onto the full category strings of the
//! `food` table.

const EXCLUDED_TERMS: [&str; 3] = ["boissons", "sucreries", "bonbons"];

const FRUIT_KEYWORD: &str = "Fruits";
const SEAFOOD: &str = "fruits de mer";

/// Category keywords queried by `/top-foods/`, in response order.
pub const TOP_FOOD_KEYWORDS: [&str; 10] = [
    "Fruits",
    "Légumes",
    "Lait",
    "Poisson",
    "Œufs",
    "Produits céréaliers",
    "Noix",
    "arômes",
    "viande",
    "petit-déjeuner",
];

/// Categories matched by one keyword, in the order of the known category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub keyword: String,
    pub categories: Vec<String>,
}

/// Filters out drinks and sweets, and seafood when the keyword is exactly `Fruits`.
pub fn valid_category(category: &str, keyword: &str) -> bool {
    let category = category.to_lowercase();

    if EXCLUDED_TERMS.iter().any(|term| category.contains(term)) {
        return false;
    }

    !(keyword == FRUIT_KEYWORD && category.contains(SEAFOOD))
}

/// Case-insensitive substring match of every keyword against the known categories.
///
/// Keywords without a match keep an empty list. A keyword given twice keeps its first
/// position and its (identical) matches.
pub fn map_keywords<K, C>(keywords: &[K], known_categories: &[C]) -> Vec<CategoryMatch>
where
    K: AsRef<str>,
    C: AsRef<str>,
{
    let mut mapping: Vec<CategoryMatch> = Vec::with_capacity(keywords.len());

    for keyword in keywords.iter().map(AsRef::as_ref) {
        if mapping.iter().any(|m| m.keyword == keyword) {
            continue;
        }

        let needle = keyword.to_lowercase();
        let categories = known_categories
            .iter()
            .map(AsRef::as_ref)
            .filter(|category| {
                category.to_lowercase().contains(&needle) && valid_category(category, keyword)
            })
            .map(str::to_string)
            .collect();

        mapping.push(CategoryMatch {
            keyword: keyword.to_string(),
            categories,
        });
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_categories() {
        assert!(!valid_category("Lait et Boissons au lait", "Lait"));
        assert!(!valid_category("Desserts et sucreries", "Desserts"));
        assert!(!valid_category("Bonbons à la menthe", "Bonbons"));
        assert!(!valid_category("BOISSONS", "Fruits"));
    }

    #[test]
    fn test_seafood_only_excluded_for_fruits() {
        assert!(!valid_category("Fruits de mer", "Fruits"));
        assert!(!valid_category("Poissons et FRUITS DE MER", "Fruits"));
        assert!(valid_category("Fruits de mer et poissons", "Poisson"));
        // exact keyword only
        assert!(valid_category("Fruits de mer", "fruits"));
    }

    #[test]
    fn test_valid_categories() {
        assert!(valid_category("Légumes frais", "Légumes"));
        assert!(valid_category("Fruits", "Fruits"));
    }

    #[test]
    fn test_map_keywords() {
        let known = [
            "Fruits frais",
            "Fruits de mer",
            "Légumes cuits",
            "Boissons sucrées",
        ];
        let mapping = map_keywords(&["Fruits", "Légumes"], &known);

        assert_eq!(
            mapping,
            vec![
                CategoryMatch {
                    keyword: "Fruits".to_string(),
                    categories: vec!["Fruits frais".to_string()],
                },
                CategoryMatch {
                    keyword: "Légumes".to_string(),
                    categories: vec!["Légumes cuits".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_keyword_without_match() {
        let mapping = map_keywords(&["Noix"], &["Fruits frais"]);
        assert_eq!(mapping.len(), 1);
        assert!(mapping[0].categories.is_empty());
    }

    #[test]
    fn test_case_insensitive_and_ordered() {
        let known = [
            "Viande et abats",
            "Plats à base de viande",
            "Œufs",
            "Viande séchée",
        ];
        let mapping = map_keywords(&["viande", "Œufs"], &known);

        assert_eq!(
            mapping[0].categories,
            ["Viande et abats", "Plats à base de viande", "Viande séchée"]
        );
        assert_eq!(mapping[1].categories, ["Œufs"]);
    }

    #[test]
    fn test_matches_come_from_known_list() {
        let known = ["Lait", "Produits laitiers", "Lait et Boissons au lait", "Noix"];
        for m in map_keywords(&TOP_FOOD_KEYWORDS, &known) {
            for category in &m.categories {
                assert!(known.contains(&category.as_str()));
                assert!(category.to_lowercase().contains(&m.keyword.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_duplicate_keyword_kept_once() {
        let mapping = map_keywords(&["Noix", "Noix"], &["Noix et graines"]);
        assert_eq!(mapping.len(), 1);
    }
}
