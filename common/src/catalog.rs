//! カクテルレシピカタログ
//!
//! 組み込みの定番レシピと、JSONファイルからの読み込み。

use crate::category::Category;
use crate::error::{Error, Result};
use crate::types::{Difficulty, Ingredient, Recipe};
use std::collections::BTreeSet;

/// 組み込みレシピ一覧（id は1から連番）
pub fn builtin_recipes() -> Vec<Recipe> {
    use Category::*;
    use Difficulty::*;

    let mut recipes = vec![
        recipe("Margarita", "Sour", Medium, vec![
            alcohol("Tequila", "50 ml", Tequila),
            alcohol("Triple Sec", "20 ml", Liqueur),
            mixer("Lime Juice", "25 ml"),
        ], "Shake with ice and strain into a salt-rimmed glass.", Some("Lime wheel"), Some("Coupe")),
        recipe("Mojito", "Highball", Medium, vec![
            alcohol("White Rum", "50 ml", Rum),
            mixer("Lime Juice", "25 ml"),
            mixer("Sugar Syrup", "15 ml"),
            mixer("Mint Leaves", "8"),
            mixer("Soda Water", "top"),
        ], "Muddle mint with syrup and lime, add rum and crushed ice, top with soda.", Some("Mint sprig"), Some("Highball")),
        recipe("Martini", "Classic", Medium, vec![
            alcohol("Gin", "60 ml", Gin),
            alcohol("Dry Vermouth", "10 ml", Wine),
        ], "Stir with ice and strain into a chilled glass.", Some("Olive or lemon twist"), Some("Martini")),
        recipe("Negroni", "Classic", Easy, vec![
            alcohol("Gin", "30 ml", Gin),
            alcohol("Campari", "30 ml", Liqueur),
            alcohol("Sweet Vermouth", "30 ml", Wine),
        ], "Stir with ice and strain over a large cube.", Some("Orange peel"), Some("Rocks")),
        recipe("Old Fashioned", "Classic", Medium, vec![
            alcohol("Bourbon", "60 ml", Whiskey),
            mixer("Sugar Cube", "1"),
            mixer("Angostura Bitters", "2 dashes"),
        ], "Muddle sugar with bitters, add whiskey and ice, stir.", Some("Orange peel"), Some("Rocks")),
        recipe("Manhattan", "Classic", Medium, vec![
            alcohol("Rye Whiskey", "50 ml", Whiskey),
            alcohol("Sweet Vermouth", "20 ml", Wine),
            mixer("Angostura Bitters", "2 dashes"),
        ], "Stir with ice and strain into a chilled glass.", Some("Cherry"), Some("Coupe")),
        recipe("Whiskey Sour", "Sour", Medium, vec![
            alcohol("Bourbon", "50 ml", Whiskey),
            mixer("Lemon Juice", "25 ml"),
            mixer("Sugar Syrup", "15 ml"),
            mixer("Egg White", "1"),
        ], "Dry shake, shake again with ice and strain.", Some("Cherry"), Some("Rocks")),
        recipe("Cosmopolitan", "Sour", Medium, vec![
            alcohol("Citrus Vodka", "40 ml", Vodka),
            alcohol("Cointreau", "15 ml", Liqueur),
            mixer("Cranberry Juice", "30 ml"),
            mixer("Lime Juice", "15 ml"),
        ], "Shake with ice and strain into a chilled glass.", Some("Orange peel"), Some("Martini")),
        recipe("Moscow Mule", "Highball", Easy, vec![
            alcohol("Vodka", "50 ml", Vodka),
            mixer("Ginger Beer", "120 ml"),
            mixer("Lime Juice", "10 ml"),
        ], "Build over ice in a copper mug.", Some("Lime wedge"), Some("Copper mug")),
        recipe("Daiquiri", "Sour", Easy, vec![
            alcohol("White Rum", "60 ml", Rum),
            mixer("Lime Juice", "25 ml"),
            mixer("Sugar Syrup", "15 ml"),
        ], "Shake with ice and strain into a chilled glass.", None, Some("Coupe")),
        recipe("Sidecar", "Sour", Medium, vec![
            alcohol("Cognac", "50 ml", Brandy),
            alcohol("Triple Sec", "20 ml", Liqueur),
            mixer("Lemon Juice", "20 ml"),
        ], "Shake with ice and strain into a sugar-rimmed glass.", Some("Orange twist"), Some("Coupe")),
        recipe("Aperol Spritz", "Spritz", Easy, vec![
            alcohol("Prosecco", "90 ml", Wine),
            alcohol("Aperol", "60 ml", Liqueur),
            mixer("Soda Water", "30 ml"),
        ], "Build over ice in a wine glass.", Some("Orange slice"), Some("Wine glass")),
        recipe("Black Russian", "Classic", Easy, vec![
            alcohol("Vodka", "50 ml", Vodka),
            alcohol("Kahlua", "20 ml", Liqueur),
        ], "Build over ice and stir.", None, Some("Rocks")),
        recipe("Gin and Tonic", "Highball", Easy, vec![
            alcohol("Gin", "50 ml", Gin),
            mixer("Tonic Water", "150 ml"),
        ], "Build over ice.", Some("Lime wedge"), Some("Highball")),
        recipe("Paloma", "Highball", Easy, vec![
            alcohol("Tequila", "50 ml", Tequila),
            mixer("Grapefruit Soda", "150 ml"),
            mixer("Lime Juice", "10 ml"),
        ], "Build over ice in a salt-rimmed glass.", Some("Grapefruit wedge"), Some("Highball")),
        recipe("Long Island Iced Tea", "Highball", Hard, vec![
            alcohol("Vodka", "15 ml", Vodka),
            alcohol("Gin", "15 ml", Gin),
            alcohol("White Rum", "15 ml", Rum),
            alcohol("Tequila", "15 ml", Tequila),
            alcohol("Triple Sec", "15 ml", Liqueur),
            mixer("Lemon Juice", "25 ml"),
            mixer("Cola", "top"),
        ], "Build over ice and top with cola.", Some("Lemon wedge"), Some("Highball")),
        recipe("Michelada", "Beer", Easy, vec![
            alcohol("Mexican Lager", "1 bottle", Beer),
            mixer("Lime Juice", "30 ml"),
            mixer("Hot Sauce", "2 dashes"),
        ], "Build over ice in a salt-rimmed glass.", Some("Lime wedge"), Some("Pint")),
    ];

    for (idx, r) in recipes.iter_mut().enumerate() {
        r.id = idx as u32 + 1;
    }

    recipes
}

/// JSON文字列から読み込み
pub fn from_json(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    validate(&recipes)?;
    Ok(recipes)
}

/// JSONファイルから読み込み
pub fn from_file(path: &std::path::Path) -> Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

/// id 重複と、材料に現れるカテゴリの必要カテゴリ漏れを検査
fn validate(recipes: &[Recipe]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for r in recipes {
        if !seen.insert(r.id) {
            return Err(Error::Parse(format!("レシピIDが重複しています: {}", r.id)));
        }
        for ing in r.ingredients.iter().filter(|i| i.is_alcohol) {
            if let Some(category) = ing.alcohol_type {
                if !r.required_categories.contains(&category) {
                    return Err(Error::Parse(format!(
                        "{}: 材料 {} のカテゴリ {} が requiredCategories にありません",
                        r.name, ing.name, category
                    )));
                }
            }
        }
    }
    Ok(())
}

fn recipe(
    name: &str,
    label: &str,
    difficulty: Difficulty,
    ingredients: Vec<Ingredient>,
    instructions: &str,
    garnish: Option<&str>,
    glass_type: Option<&str>,
) -> Recipe {
    let required_categories = ingredients
        .iter()
        .filter_map(|i| i.alcohol_type)
        .collect();

    Recipe {
        id: 0,
        name: name.into(),
        category: label.into(),
        difficulty,
        required_categories,
        ingredients,
        instructions: instructions.into(),
        garnish: garnish.map(Into::into),
        glass_type: glass_type.map(Into::into),
    }
}

fn alcohol(name: &str, amount: &str, category: Category) -> Ingredient {
    Ingredient {
        name: name.into(),
        amount: amount.into(),
        is_alcohol: true,
        alcohol_type: Some(category),
    }
}

fn mixer(name: &str, amount: &str) -> Ingredient {
    Ingredient {
        name: name.into(),
        amount: amount.into(),
        is_alcohol: false,
        alcohol_type: None,
    }
}
