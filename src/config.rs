use crate::error::{BottleScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// データディレクトリを上書きする環境変数
pub const DATA_DIR_ENV: &str = "BOTTLE_SCAN_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OCRコマンド（tesseract互換: `<cmd> <image> stdout -l <lang>`）
    pub ocr_command: String,
    pub ocr_language: String,
    /// 在庫ファイルの保存先（未設定時は OS のデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    /// レシピカタログJSON（未設定時は組み込みレシピ）
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BottleScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("bottle-scan").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            ocr_command: "tesseract".into(),
            ocr_language: "eng".into(),
            data_dir: None,
            catalog_path: None,
        }
    }

    /// 在庫データの保存先
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        // 環境変数を優先
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        dirs::data_dir()
            .map(|d| d.join("bottle-scan"))
            .ok_or_else(|| BottleScanError::Config("データディレクトリが見つかりません".into()))
    }

    pub fn set_ocr_command(&mut self, command: String) -> Result<()> {
        self.ocr_command = command;
        self.save()
    }

    pub fn set_ocr_language(&mut self, language: String) -> Result<()> {
        self.ocr_language = language;
        self.save()
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = Some(dir);
        self.save()
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }
}
