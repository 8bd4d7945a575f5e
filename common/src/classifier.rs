//! キーワードによる酒類分類
//!
//! OCRテキストに含まれるキーワードをスコアリングし、最も確からしいカテゴリを返す。
//!
//! ## スコア
//! `キーワード長 + 単語一致ボーナス(10) + ブランドボーナス(長さ8超で5)`
//!
//! 先勝ちではなく加点方式なので、"original" の中の "gin" のような部分一致より
//! 単語として現れる短いキーワードや長いブランド名が優先される。

use crate::category::Category;
use crate::keywords::KEYWORD_TABLE;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 単語境界で一致した場合のボーナス
pub const WHOLE_WORD_BONUS: u32 = 10;
/// ブランド名（長いキーワード）のボーナス
pub const BRAND_BONUS: u32 = 5;
/// ブランドボーナス対象となるキーワード長（これを超える長さ）
pub const BRAND_MIN_LEN: usize = 8;
/// 信頼度算出用の目安最大スコア（超えた分は1.0に丸める）
pub const MAX_SCORE: f32 = 30.0;

/// 分類結果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    /// 0.0〜1.0 のヒューリスティック値（確率ではない）
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
}

impl ClassificationResult {
    /// 一致なし: `other` / 信頼度0
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// テキストから酒類カテゴリを分類する
///
/// 失敗することはなく、一致なしの場合は `Category::Other`・信頼度0を返す。
/// カテゴリ間でスコアが同点の場合は `KEYWORD_TABLE` で先に定義されたカテゴリを採用する。
pub fn classify(text: &str) -> ClassificationResult {
    let lower = text.to_lowercase();

    let mut best: Option<(Category, u32, &'static str)> = None;

    for (category, keywords) in KEYWORD_TABLE {
        let Some((score, keyword)) = best_keyword(&lower, keywords) else {
            continue;
        };

        // 厳密に上回った場合のみ更新（同点は先勝ち）
        if best.map_or(true, |(_, best_score, _)| score > best_score) {
            best = Some((*category, score, keyword));
        }
    }

    match best {
        Some((category, score, keyword)) => {
            let confidence = (score as f32 / MAX_SCORE).min(1.0);
            debug!(%category, score, keyword, confidence, "classified");
            ClassificationResult {
                category,
                confidence,
                matched_keyword: Some(keyword.to_string()),
            }
        }
        None => ClassificationResult::unknown(),
    }
}

/// カテゴリのみを返す簡易版
pub fn classify_category(text: &str) -> Category {
    classify(text).category
}

/// カテゴリ内で最高スコアのキーワードを選ぶ（同点は先勝ち）
fn best_keyword(lower_text: &str, keywords: &[&'static str]) -> Option<(u32, &'static str)> {
    let mut best: Option<(u32, &'static str)> = None;

    for &keyword in keywords {
        if let Some(score) = keyword_score(lower_text, keyword) {
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, keyword));
            }
        }
    }

    best
}

/// 小文字化済みテキストに対するキーワードのスコア
///
/// 含まれない場合は `None`。
pub fn keyword_score(lower_text: &str, keyword: &str) -> Option<u32> {
    if keyword.is_empty() || !lower_text.contains(keyword) {
        return None;
    }

    let len = keyword.chars().count();
    let mut score = len as u32;

    if contains_whole_word(lower_text, keyword) {
        score += WHOLE_WORD_BONUS;
    }
    if len > BRAND_MIN_LEN {
        score += BRAND_BONUS;
    }

    Some(score)
}

/// 前後が英数字以外（または文字列端）で囲まれた出現があるか
pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let idx = start + pos;
        let end = idx + needle.len();

        let before_ok = haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return true;
        }

        // 重なった出現も検査するため1文字だけ進める
        let step = haystack[idx..].chars().next().map_or(1, |c| c.len_utf8());
        start = idx + step;
    }

    false
}
