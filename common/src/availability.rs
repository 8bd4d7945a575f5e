//! 在庫とレシピの照合
//!
//! 手持ちのカテゴリとレシピの必要カテゴリの差集合から、作れるかどうかと
//! 足りない材料を求め、作れるものを先頭に並べる。

use crate::category::Category;
use crate::types::{AvailabilityResult, Recipe};
use std::collections::BTreeSet;

/// 一覧の絞り込み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    /// 作れるもののみ
    CanMake,
    /// あと少しで作れるもの（不足カテゴリが `NEED_MORE_MAX_MISSING` 以下）
    NeedMore,
}

/// 「あと少し」とみなす不足カテゴリ数の上限
pub const NEED_MORE_MAX_MISSING: usize = 2;

/// 各レシピの作成可否を判定して並べ替える
///
/// 並び順: 作れるもの → 不足カテゴリ数の少ない順。同順位は入力順を保つ。
pub fn match_availability(
    available: &BTreeSet<Category>,
    recipes: &[Recipe],
) -> Vec<AvailabilityResult> {
    let mut results: Vec<AvailabilityResult> = recipes
        .iter()
        .map(|recipe| check_recipe(available, recipe))
        .collect();

    // sort_by_key は安定ソート
    results.sort_by_key(|r| (!r.can_make, r.missing_categories.len()));

    results
}

/// 1レシピを判定
pub fn check_recipe(available: &BTreeSet<Category>, recipe: &Recipe) -> AvailabilityResult {
    let missing_categories: BTreeSet<Category> = recipe
        .required_categories
        .difference(available)
        .copied()
        .collect();

    let missing_ingredient_names = recipe
        .ingredients
        .iter()
        .filter(|ing| ing.is_alcohol)
        .filter(|ing| {
            ing.alcohol_type
                .is_some_and(|category| missing_categories.contains(&category))
        })
        .map(|ing| ing.name.clone())
        .collect();

    AvailabilityResult {
        recipe: recipe.clone(),
        can_make: missing_categories.is_empty(),
        missing_categories,
        missing_ingredient_names,
    }
}

/// 絞り込みと名前/分類ラベルの部分一致検索（大文字小文字無視）
pub fn filter_results(
    results: &[AvailabilityResult],
    filter: AvailabilityFilter,
    query: Option<&str>,
) -> Vec<AvailabilityResult> {
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    results
        .iter()
        .filter(|r| match filter {
            AvailabilityFilter::All => true,
            AvailabilityFilter::CanMake => r.can_make,
            AvailabilityFilter::NeedMore => {
                !r.can_make && r.missing_categories.len() <= NEED_MORE_MAX_MISSING
            }
        })
        .filter(|r| match &query {
            Some(q) => {
                r.recipe.name.to_lowercase().contains(q.as_str())
                    || r.recipe.category.to_lowercase().contains(q.as_str())
            }
            None => true,
        })
        .cloned()
        .collect()
}
