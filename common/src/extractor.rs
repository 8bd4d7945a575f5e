//! ボトル名抽出
//!
//! OCRテキストの各行をスコアリングし、ブランド名らしい行を返す。
//! ラベルは上部にブランド名が大きく書かれることが多く、
//! 度数・容量・法定表示などはノイズとして除去する。

use crate::keywords::all_keywords;
use regex::Regex;

/// ブランド候補として扱うキーワードの最小長（これを超える長さ）
const KEYWORD_MIN_LEN: usize = 5;

/// 行のスコアリング結果
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLine {
    /// ノイズ除去後の行
    pub cleaned: String,
    pub score: i32,
}

/// テキストからボトル名を推定する
///
/// 使える行がなければ空文字を返す（呼び出し側で手入力にフォールバックする）。
pub fn extract_name(text: &str) -> String {
    let mut scored = score_lines(text);

    // 安定ソート: 同点は先に現れた行が勝つ
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    match scored.into_iter().next() {
        Some(best) if best.cleaned.chars().count() > 2 => best.cleaned,
        _ => String::new(),
    }
}

/// 全行をスコアリング（元の行順）
pub fn score_lines(text: &str) -> Vec<ScoredLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| score_line(index, line))
        .collect()
}

/// 1行をスコアリング
fn score_line(index: usize, line: &str) -> ScoredLine {
    let mut score = 0;

    // 先頭付近ほどブランド名の可能性が高い
    if index < 3 {
        score += 10;
    }
    if index == 0 {
        score += 5;
    }

    let length = line.chars().count();
    if (5..=30).contains(&length) {
        score += 5;
    } else if length > 30 && length <= 50 {
        score += 2;
    }

    if line.chars().any(char::is_uppercase) {
        score += 3;
    }

    if contains_known_keyword(line) {
        score += 15;
    }

    let cleaned = clean_line(line);
    let cleaned_length = cleaned.chars().count();

    // 半分以上削られた行は減点
    if cleaned_length * 2 < length {
        score -= 5;
    }
    if cleaned_length < 3 {
        score -= 10;
    }

    ScoredLine { cleaned, score }
}

/// 長めのキーワード（ブランド名など）を含むか
fn contains_known_keyword(line: &str) -> bool {
    let lower = line.to_lowercase();
    all_keywords()
        .filter(|keyword| keyword.chars().count() > KEYWORD_MIN_LEN)
        .any(|keyword| lower.contains(keyword))
}

/// ノイズを除去する
///
/// 除去結果が変化しなくなるまで繰り返すため、除去済みの行に再適用しても変わらない。
pub fn clean_line(line: &str) -> String {
    lazy_static::lazy_static! {
        static ref NOISE_PATTERNS: Vec<Regex> = vec![
            // 度数 (40%, 40 % vol)
            Regex::new(r"(?i)\d+(?:[.,]\d+)?\s*%(?:\s*vol\b\.?)?").unwrap(),
            // 容量 (700ml, 1.75 L, 70cl)
            Regex::new(r"(?i)\b\d+(?:[.,]\d+)?\s*(?:ml|cl|l|oz|vol)\b").unwrap(),
            // ラベルの定型語
            Regex::new(r"(?i)\b(?:abv|alcohol|proof|premium|quality|distilled)\b").unwrap(),
            // 文字を含まない行（数字・記号のみ）
            Regex::new(r"^[^\p{L}]+$").unwrap(),
            // 流通関係の書き出し
            Regex::new(
                r"(?i)^(?:made|products?|imported|importers?|import|exported|export|distributed|bottled)\b"
            ).unwrap(),
        ];
        static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    }

    let mut current = line.trim().to_string();
    loop {
        let mut next = current.clone();
        for pattern in NOISE_PATTERNS.iter() {
            next = pattern.replace_all(&next, "").into_owned();
        }
        // 途中の語を消した跡の連続空白を詰める
        let next = WHITESPACE.replace_all(next.trim(), " ").into_owned();

        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_brand_from_label() {
        let name = extract_name("JACK DANIEL'S\n40% Vol\n700ml");
        assert_eq!(name, "JACK DANIEL'S");
    }

    #[test]
    fn test_extract_empty_input() {
        assert_eq!(extract_name(""), "");
        assert_eq!(extract_name("   \n \t\n"), "");
    }

    #[test]
    fn test_extract_only_short_lines() {
        assert_eq!(extract_name("40%\n12\nab"), "");
    }

    #[test]
    fn test_extract_prefers_first_of_equal_lines() {
        let text = "xx\nyy\nzz\nFirst Choice\nSecond Pick";
        let scored = score_lines(text);
        assert_eq!(scored[3].score, scored[4].score);
        assert_eq!(extract_name(text), "First Choice");
    }

    #[test]
    fn test_extract_keyword_line_wins() {
        let text = "Product of France\nHENNESSY\nV.S Cognac\n70cl 40% vol";
        assert_eq!(extract_name(text), "HENNESSY");
    }

    #[test]
    fn test_extract_idempotent() {
        for text in [
            "JACK DANIEL'S\n40% Vol\n700ml",
            "Premium Vodka 40% vol 1L",
            "Product of France\nHENNESSY\nV.S Cognac",
        ] {
            let name = extract_name(text);
            assert_eq!(extract_name(&name), name, "{}", text);
        }
    }

    #[test]
    fn test_clean_line_strips_noise() {
        assert_eq!(clean_line("Premium Vodka 40% vol 1L"), "Vodka");
        assert_eq!(clean_line("700ml"), "");
        assert_eq!(clean_line("12-34.5"), "");
        assert_eq!(clean_line("Bottled in Scotland"), "in Scotland");
        assert_eq!(clean_line("Imported by Acme"), "by Acme");
        assert_eq!(clean_line("ABV 37.5%"), "");
    }

    #[test]
    fn test_clean_line_symbols_only() {
        assert_eq!(clean_line("12/34"), "");
        assert_eq!(clean_line("#!!"), "");
        assert_eq!(clean_line("No.7"), "No.7");
        assert_eq!(extract_name("12/34\n#!!"), "");
    }

    #[test]
    fn test_clean_line_squashes_spaces() {
        assert_eq!(clean_line("Jack Premium Daniels"), "Jack Daniels");
        assert_eq!(clean_line("Grey  Goose\t40% vol"), "Grey Goose");
        assert_eq!(extract_name("Jack Premium Daniels\n700ml"), "Jack Daniels");
    }

    #[test]
    fn test_clean_line_keeps_clean_text() {
        assert_eq!(clean_line("Tanqueray"), "Tanqueray");
        assert_eq!(clean_line("Madeira"), "Madeira");
    }

    #[test]
    fn test_score_line_penalties() {
        // 10 + 5 + 5 + 0 - 5 - 10
        let scored = score_lines("700ml");
        assert_eq!(scored[0].score, 5);
        assert_eq!(scored[0].cleaned, "");
    }
}
