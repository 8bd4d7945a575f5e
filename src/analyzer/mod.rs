//! 画像解析（OCR → 名前抽出・分類）
//!
//! OCRの失敗はすべて信頼度0の空結果に変換し、呼び出し側にエラーを返さない。
//! 「処理失敗」と「何も検出できなかった」は同じ扱いになる。

pub mod cache;
mod recognizer;

pub use cache::CacheFile;
pub use recognizer::{TesseractCli, TextRecognizer};

use crate::scanner::ImageInfo;
use bottle_scan_common::{OcrResult, analyze_text};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, warn};

/// 1枚分の解析結果
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub image: ImageInfo,
    pub result: OcrResult,
    /// キャッシュから取得したか
    pub from_cache: bool,
}

/// 画像1枚を解析
pub async fn process_image<R: TextRecognizer>(recognizer: &R, image_path: &Path) -> OcrResult {
    let raw_text = match recognizer.recognize_text(image_path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(
                image = %image_path.display(),
                recognizer = recognizer.name(),
                error = %e,
                "OCR failed, falling back to empty result"
            );
            return OcrResult::empty();
        }
    };

    let result = analyze_text(&raw_text);
    debug!(
        image = %image_path.display(),
        name = %result.extracted_name,
        category = %result.classification.category,
        confidence = result.confidence,
        "image processed"
    );
    result
}

/// 複数画像を順に解析（キャッシュ指定時は既知の画像のOCRをスキップ）
pub async fn process_images<R: TextRecognizer>(
    recognizer: &R,
    images: &[ImageInfo],
    mut cache: Option<&mut CacheFile>,
    verbose: bool,
) -> Vec<ScanOutcome> {
    let progress = if images.len() > 1 && !verbose {
        let pb = ProgressBar::new(images.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        Some(pb)
    } else {
        None
    };

    let mut outcomes = Vec::with_capacity(images.len());

    for image in images {
        if let Some(pb) = &progress {
            pb.set_message(image.file_name.clone());
        }

        // ハッシュ計算失敗時は未キャッシュとして扱う
        let key = match cache.as_ref() {
            Some(_) => cache::compute_file_hash(&image.path).ok(),
            None => None,
        };

        let cached_text = match (cache.as_ref(), key.as_ref()) {
            (Some(c), Some((hash, _))) => c.get(hash).map(str::to_string),
            _ => None,
        };

        let outcome = if let Some(text) = cached_text {
            if verbose {
                println!("  キャッシュ使用: {}", image.file_name);
            }
            ScanOutcome {
                image: image.clone(),
                result: analyze_text(&text),
                from_cache: true,
            }
        } else {
            let result = process_image(recognizer, &image.path).await;
            if let (Some(c), Some((hash, size))) = (cache.as_deref_mut(), key) {
                c.insert(hash, image.file_name.clone(), size, result.raw_text.clone());
            }
            ScanOutcome {
                image: image.clone(),
                result,
                from_cache: false,
            }
        };

        outcomes.push(outcome);

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    outcomes
}
