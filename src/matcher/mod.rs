//! カクテル照合
//!
//! 在庫の利用可能カテゴリとレシピカタログを照合し、作れる順に並べる。

use crate::config::Config;
use crate::error::{BottleScanError, Result};
use crate::inventory::Inventory;
use bottle_scan_common::catalog;
use bottle_scan_common::{AvailabilityFilter, AvailabilityResult, Recipe, filter_results, match_availability};
use std::fmt::Write;
use std::path::Path;
use tracing::debug;

/// 設定に応じてレシピカタログを読み込む
pub fn load_catalog(config: &Config) -> Result<Vec<Recipe>> {
    match &config.catalog_path {
        Some(path) => load_catalog_file(path),
        None => Ok(catalog::builtin_recipes()),
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Vec<Recipe>> {
    if !path.exists() {
        return Err(BottleScanError::FileNotFound(path.display().to_string()));
    }

    catalog::from_file(path)
        .map_err(|e| BottleScanError::InvalidCatalog(format!("{}: {}", path.display(), e)))
}

/// 在庫とカタログを照合して絞り込む
pub fn match_inventory(
    inventory: &Inventory,
    recipes: &[Recipe],
    filter: AvailabilityFilter,
    query: Option<&str>,
) -> Vec<AvailabilityResult> {
    let available = inventory.available_categories();
    debug!(?available, recipes = recipes.len(), "matching cocktails");

    let ranked = match_availability(&available, recipes);
    filter_results(&ranked, filter, query)
}

/// IDまたは名前で1件探す（名前は完全一致を優先し、なければ部分一致の先頭）
pub fn find_cocktail<'a>(results: &'a [AvailabilityResult], key: &str) -> Result<&'a AvailabilityResult> {
    let key = key.trim();

    if let Ok(id) = key.parse::<u32>() {
        if let Some(found) = results.iter().find(|r| r.recipe.id == id) {
            return Ok(found);
        }
    }

    let lower = key.to_lowercase();
    if !lower.is_empty() {
        let exact = results.iter().find(|r| r.recipe.name.to_lowercase() == lower);
        let partial = || results.iter().find(|r| r.recipe.name.to_lowercase().contains(&lower));
        if let Some(found) = exact.or_else(partial) {
            return Ok(found);
        }
    }

    Err(BottleScanError::CocktailNotFound(key.to_string()))
}

/// レシピ詳細の表示用テキスト（不足している材料に印を付ける）
pub fn format_detail(result: &AvailabilityResult) -> String {
    let recipe = &result.recipe;
    let mut out = String::new();

    let _ = writeln!(out, "#{} {} ({}, {})", recipe.id, recipe.name, recipe.category, recipe.difficulty);
    if result.can_make {
        let _ = writeln!(out, "✔ 作成可能");
    } else {
        let missing: Vec<&str> = result.missing_categories.iter().map(|c| c.as_str()).collect();
        let _ = writeln!(out, "✗ 不足: {}", missing.join(", "));
    }

    let _ = writeln!(out, "\n材料:");
    for ingredient in &recipe.ingredients {
        let mark = if result.missing_ingredient_names.contains(&ingredient.name) { "✗" } else { "-" };
        let _ = writeln!(out, "  {} {} {}", mark, ingredient.name, ingredient.amount);
    }

    let _ = writeln!(out, "\n作り方:\n  {}", recipe.instructions);
    if let Some(garnish) = &recipe.garnish {
        let _ = writeln!(out, "ガーニッシュ: {}", garnish);
    }
    if let Some(glass) = &recipe.glass_type {
        let _ = writeln!(out, "グラス: {}", glass);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bottle_scan_common::{Category, catalog};
    use std::collections::BTreeSet;

    fn ranked(available: &[Category]) -> Vec<AvailabilityResult> {
        let available: BTreeSet<Category> = available.iter().copied().collect();
        match_availability(&available, &catalog::builtin_recipes())
    }

    #[test]
    fn test_find_cocktail_by_id_and_name() {
        let results = ranked(&[Category::Gin]);

        assert_eq!(find_cocktail(&results, "3").unwrap().recipe.name, "Martini");
        assert_eq!(find_cocktail(&results, " negroni ").unwrap().recipe.id, 4);
        assert_eq!(find_cocktail(&results, "island").unwrap().recipe.name, "Long Island Iced Tea");
        assert!(matches!(
            find_cocktail(&results, "Zombie"),
            Err(BottleScanError::CocktailNotFound(_))
        ));
        assert!(find_cocktail(&results, "").is_err());
    }

    #[test]
    fn test_find_cocktail_exact_name_first() {
        let results = ranked(&[]);
        assert_eq!(find_cocktail(&results, "sour").unwrap().recipe.name, "Whiskey Sour");
        assert_eq!(find_cocktail(&results, "MARTINI").unwrap().recipe.name, "Martini");
    }

    #[test]
    fn test_format_detail_marks_missing() {
        let results = ranked(&[Category::Gin]);
        let negroni = find_cocktail(&results, "Negroni").unwrap();
        let text = format_detail(negroni);

        assert!(text.contains("#4 Negroni (Classic, easy)"));
        assert!(text.contains("✗ 不足: liqueur, wine"));
        assert!(text.contains("  - Gin 30 ml"));
        assert!(text.contains("  ✗ Campari 30 ml"));
        assert!(text.contains("  ✗ Sweet Vermouth 30 ml"));
        assert!(text.contains("ガーニッシュ: Orange peel"));
        assert!(text.contains("グラス: Rocks"));
    }

    #[test]
    fn test_format_detail_makeable() {
        let results = ranked(&[Category::Rum]);
        let daiquiri = find_cocktail(&results, "daiquiri").unwrap();
        let text = format_detail(daiquiri);

        assert!(text.contains("✔ 作成可能"));
        assert!(!text.contains("✗"));
        assert!(!text.contains("ガーニッシュ"));
        assert!(text.contains("グラス: Coupe"));
    }
}
