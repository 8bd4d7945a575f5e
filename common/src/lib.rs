//! Bottle Scan Common Library
//!
//! CLIと将来のフロントエンドで共有される型と解析ロジック

pub mod analyzer;
pub mod availability;
pub mod catalog;
pub mod category;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod keywords;
pub mod types;

pub use analyzer::analyze_text;
pub use availability::{AvailabilityFilter, filter_results, match_availability};
pub use category::Category;
pub use classifier::{ClassificationResult, classify, classify_category};
pub use error::{Error, Result};
pub use extractor::extract_name;
pub use types::{
    AvailabilityResult, Bottle, BottleStatus, Difficulty, Ingredient, OcrResult, Recipe,
    available_categories,
};
