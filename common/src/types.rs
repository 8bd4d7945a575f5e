//! 共有型定義
//!
//! - OcrResult: 画像1枚の解析結果（保存はしない）
//! - Bottle: 在庫のボトル
//! - Recipe / Ingredient: カクテルレシピ（読み取り専用）
//! - AvailabilityResult: 在庫とレシピの照合結果

use crate::category::Category;
use crate::classifier::ClassificationResult;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 画像解析結果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResult {
    /// OCRの生テキスト
    pub raw_text: String,
    /// 推定ボトル名（空なら手入力が必要）
    pub extracted_name: String,
    pub classification: ClassificationResult,
    /// 総合信頼度 0.0〜1.0
    pub confidence: f32,
}

impl OcrResult {
    /// 何も検出できなかった場合の結果
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn needs_manual_entry(&self) -> bool {
        self.extracted_name.trim().is_empty()
    }
}

/// ボトルの残量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleStatus {
    #[default]
    Full,
    Low,
    Empty,
}

impl std::fmt::Display for BottleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BottleStatus::Full => write!(f, "full"),
            BottleStatus::Low => write!(f, "low"),
            BottleStatus::Empty => write!(f, "empty"),
        }
    }
}

impl std::str::FromStr for BottleStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(BottleStatus::Full),
            "low" => Ok(BottleStatus::Low),
            "empty" => Ok(BottleStatus::Empty),
            _ => Err(Error::Parse(format!("不明な残量: {} (full/low/empty)", s))),
        }
    }
}

/// 在庫ボトル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottle {
    pub id: u64,
    pub name: String,
    pub category: Category,

    #[serde(default)]
    pub photo_path: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default)]
    pub status: BottleStatus,

    /// 登録日時（RFC 3339）
    pub date_added: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// 空でないボトルのカテゴリ一覧（重複なし）
pub fn available_categories(bottles: &[Bottle]) -> BTreeSet<Category> {
    bottles
        .iter()
        .filter(|b| b.status != BottleStatus::Empty)
        .map(|b| b.category)
        .collect()
}

/// レシピの難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// 材料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// 分量（"50 ml" など表記のまま）
    pub amount: String,
    #[serde(default)]
    pub is_alcohol: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_type: Option<Category>,
}

/// カクテルレシピ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    /// 分類ラベル（"Classic", "Sour" など）
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub required_categories: BTreeSet<Category>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garnish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass_type: Option<String>,
}

/// 在庫との照合結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// `missing_categories` が空のときだけ true
    pub can_make: bool,
    pub missing_categories: BTreeSet<Category>,
    pub missing_ingredient_names: Vec<String>,
}
