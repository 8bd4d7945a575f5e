//! 酒類カテゴリ
//!
//! 分類結果・在庫・レシピで共有する閉じた列挙型。
//! `Other` は未分類時のフォールバックで、常に有効な値。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 酒類カテゴリ
///
/// 宣言順はキーワード表の並びと一致し、分類スコアが同点のときの優先順位になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vodka,
    Whiskey,
    Rum,
    Gin,
    Tequila,
    Brandy,
    Liqueur,
    Wine,
    Beer,
    #[default]
    Other,
}

impl Category {
    /// 全カテゴリ（同点時の優先順）
    pub const ALL: [Category; 10] = [
        Category::Vodka,
        Category::Whiskey,
        Category::Rum,
        Category::Gin,
        Category::Tequila,
        Category::Brandy,
        Category::Liqueur,
        Category::Wine,
        Category::Beer,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vodka => "vodka",
            Category::Whiskey => "whiskey",
            Category::Rum => "rum",
            Category::Gin => "gin",
            Category::Tequila => "tequila",
            Category::Brandy => "brandy",
            Category::Liqueur => "liqueur",
            Category::Wine => "wine",
            Category::Beer => "beer",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vodka" => Ok(Category::Vodka),
            "whiskey" | "whisky" => Ok(Category::Whiskey),
            "rum" => Ok(Category::Rum),
            "gin" => Ok(Category::Gin),
            "tequila" => Ok(Category::Tequila),
            "brandy" => Ok(Category::Brandy),
            "liqueur" => Ok(Category::Liqueur),
            "wine" => Ok(Category::Wine),
            "beer" => Ok(Category::Beer),
            "other" => Ok(Category::Other),
            _ => Err(Error::Parse(format!(
                "不明なカテゴリ: {} (vodka/whiskey/rum/gin/tequila/brandy/liqueur/wine/beer/other)",
                s
            ))),
        }
    }
}
