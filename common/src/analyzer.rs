//! 解析ロジック（CLI/WASM共通）
//!
//! OCRテキストからボトル名とカテゴリを推定し、1つの結果にまとめる。
//! OCR呼び出し自体は呼び出し側の責務。

use crate::classifier::classify;
use crate::extractor::extract_name;
use crate::types::OcrResult;

/// 名前が抽出できたときの信頼度寄与
const NAME_CONFIDENCE: f32 = 0.5;

/// OCRテキストを解析
///
/// 空白のみのテキストは何も検出できなかったものとして扱う。
/// 総合信頼度は「名前の有無(0.5/0)」と分類信頼度の平均。
pub fn analyze_text(raw_text: &str) -> OcrResult {
    if raw_text.trim().is_empty() {
        return OcrResult::empty();
    }

    let extracted_name = extract_name(raw_text);
    let classification = classify(raw_text);

    let name_confidence = if extracted_name.is_empty() {
        0.0
    } else {
        NAME_CONFIDENCE
    };
    let confidence = (name_confidence + classification.confidence) / 2.0;

    OcrResult {
        raw_text: raw_text.to_string(),
        extracted_name,
        classification,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_analyze_blank() {
        assert_eq!(analyze_text(""), OcrResult::empty());
        assert_eq!(analyze_text("  \n  "), OcrResult::empty());
    }

    #[test]
    fn test_analyze_label() {
        let text = "JACK DANIEL'S\n40% Vol\n700ml";
        let result = analyze_text(text);

        assert_eq!(result.raw_text, text);
        assert_eq!(result.extracted_name, "JACK DANIEL'S");
        assert_eq!(result.classification.category, Category::Whiskey);

        let expected = (0.5 + 28.0 / 30.0) / 2.0;
        assert!((result.confidence - expected).abs() < 1e-6);
    }

    #[test]
    fn test_analyze_name_without_category() {
        let result = analyze_text("Grandma's Cellar");
        assert_eq!(result.extracted_name, "Grandma's Cellar");
        assert_eq!(result.classification.category, Category::Other);
        assert!((result.confidence - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_analyze_category_without_name() {
        // 数字のみの行はノイズとして除去されるがキーワードとしては一致する
        let result = analyze_text("1800");
        assert!(result.extracted_name.is_empty());
        assert_eq!(result.classification.category, Category::Tequila);
        assert!((result.confidence - (14.0 / 30.0) / 2.0).abs() < 1e-6);
    }
}
