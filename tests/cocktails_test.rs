//! カクテル照合テスト
//!
//! 在庫と組み込みカタログ・外部カタログの照合を検証

use bottle_scan::config::Config;
use bottle_scan::error::BottleScanError;
use bottle_scan::inventory::{Inventory, NewBottle};
use bottle_scan::matcher;
use bottle_scan_common::{AvailabilityFilter, BottleStatus, Category};
use tempfile::tempdir;

fn stocked(dir: &std::path::Path, categories: &[Category]) -> Inventory {
    let mut inventory = Inventory::open(dir).unwrap();
    for (i, category) in categories.iter().enumerate() {
        inventory
            .add_bottle(NewBottle {
                name: format!("Bottle {}", i + 1),
                category: *category,
                ..Default::default()
            })
            .unwrap();
    }
    inventory
}

/// 空の在庫では何も作れない
#[test]
fn test_empty_inventory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let inventory = Inventory::open(dir.path()).unwrap();
    let recipes = matcher::load_catalog(&Config::default()).unwrap();

    let results = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::All, None);
    assert_eq!(results.len(), recipes.len());
    assert!(results.iter().all(|r| !r.can_make));

    let can_make = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::CanMake, None);
    assert!(can_make.is_empty());
}

/// 作れるものが先、次に不足の少ない順
#[test]
fn test_gin_and_vodka() {
    let dir = tempdir().expect("Failed to create temp dir");
    let inventory = stocked(dir.path(), &[Category::Gin, Category::Vodka]);
    let recipes = matcher::load_catalog(&Config::default()).unwrap();

    let can_make: Vec<String> = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::CanMake, None)
        .into_iter()
        .map(|r| r.recipe.name)
        .collect();
    assert_eq!(can_make, vec!["Moscow Mule", "Gin and Tonic"]);

    let results = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::All, None);
    let first_missing: Vec<&str> = results
        .iter()
        .filter(|r| r.missing_categories.len() == 1)
        .map(|r| r.recipe.name.as_str())
        .collect();
    assert_eq!(first_missing, vec!["Martini", "Cosmopolitan", "Black Russian"]);

    let mut previous = (false, 0usize);
    for (idx, r) in results.iter().enumerate() {
        let key = (!r.can_make, r.missing_categories.len());
        if idx > 0 {
            assert!(key >= previous);
        }
        previous = key;
    }
}

/// 空のボトルは数えない
#[test]
fn test_empty_bottle_excluded() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut inventory = stocked(dir.path(), &[Category::Gin]);
    inventory.update_status(1, BottleStatus::Empty).unwrap();

    let recipes = matcher::load_catalog(&Config::default()).unwrap();
    let results = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::CanMake, None);
    assert!(results.is_empty());
}

/// 不足2つ以下の絞り込みと検索
#[test]
fn test_need_more_and_search() {
    let dir = tempdir().expect("Failed to create temp dir");
    let inventory = stocked(dir.path(), &[Category::Gin]);
    let recipes = matcher::load_catalog(&Config::default()).unwrap();

    let near = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::NeedMore, None);
    assert!(!near.is_empty());
    assert!(near.iter().all(|r| !r.can_make && r.missing_categories.len() <= 2));
    assert!(near.iter().any(|r| r.recipe.name == "Negroni"));

    let found = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::All, Some("TONIC"));
    assert_eq!(found.len(), 1);
    assert!(found[0].can_make);

    let sours = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::All, Some("sour"));
    assert!(sours.iter().all(|r| r.recipe.category == "Sour" || r.recipe.name.contains("Sour")));
}

/// 外部カタログの読み込み
#[test]
fn test_load_catalog_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("recipes.json");
    let json = r#"[{
        "id": 1,
        "name": "Rum Cola",
        "category": "Highball",
        "difficulty": "easy",
        "requiredCategories": ["rum"],
        "ingredients": [
            {"name": "Dark Rum", "amount": "50 ml", "isAlcohol": true, "alcoholType": "rum"},
            {"name": "Cola", "amount": "top", "isAlcohol": false}
        ],
        "instructions": "Build over ice."
    }]"#;
    std::fs::write(&path, json).unwrap();

    let recipes = matcher::load_catalog_file(&path).unwrap();
    assert_eq!(recipes.len(), 1);

    let inventory = stocked(dir.path(), &[Category::Rum]);
    let results = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::CanMake, None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipe.name, "Rum Cola");

    let config = Config {
        catalog_path: Some(path),
        ..Config::default()
    };
    assert_eq!(matcher::load_catalog(&config).unwrap().len(), 1);
}

/// カタログのエラー
#[test]
fn test_load_catalog_file_errors() {
    let dir = tempdir().expect("Failed to create temp dir");

    let missing = matcher::load_catalog_file(&dir.path().join("missing.json"));
    assert!(matches!(missing, Err(BottleScanError::FileNotFound(_))));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "[{ invalid").unwrap();
    assert!(matches!(
        matcher::load_catalog_file(&broken),
        Err(BottleScanError::InvalidCatalog(_))
    ));
}
