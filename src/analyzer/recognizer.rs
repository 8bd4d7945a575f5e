//! OCRエンジン連携
//!
//! 外部のテキスト認識エンジンを `TextRecognizer` として抽象化する。
//! 既定実装は tesseract CLI を呼び出す。

use crate::config::Config;
use crate::error::{BottleScanError, Result};
use std::path::Path;
use tokio::process::Command;

/// 画像から生テキストを取得する外部コラボレータ
#[allow(async_fn_in_trait)]
pub trait TextRecognizer {
    /// ログ表示用の名前
    fn name(&self) -> &str;

    /// 画像を認識してテキストを返す（空文字もあり得る）
    async fn recognize_text(&self, image_path: &Path) -> Result<String>;
}

/// tesseract 互換CLI
#[derive(Debug, Clone)]
pub struct TesseractCli {
    command: String,
    language: String,
}

impl TesseractCli {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ocr_command.clone(), config.ocr_language.clone())
    }
}

impl TextRecognizer for TesseractCli {
    fn name(&self) -> &str {
        &self.command
    }

    async fn recognize_text(&self, image_path: &Path) -> Result<String> {
        let output = Command::new(&self.command)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", self.language.as_str()])
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BottleScanError::Ocr(format!(
                    "{} が見つかりません（tesseract-ocr をインストールしてください）",
                    self.command
                )));
            }
            Err(e) => return Err(BottleScanError::Io(e)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BottleScanError::Ocr(format!(
                "{} failed (code {:?}): {}",
                self.command,
                output.status.code(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_command_is_ocr_error() {
        let recognizer = TesseractCli::new("bottle-scan-no-such-ocr-binary", "eng");
        let err = recognizer
            .recognize_text(Path::new("label.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, BottleScanError::Ocr(_)));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            ocr_command: "/opt/ocr/tesseract".into(),
            ..Config::default()
        };
        let recognizer = TesseractCli::from_config(&config);
        assert_eq!(recognizer.name(), "/opt/ocr/tesseract");
    }
}
