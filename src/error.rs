use thiserror::Error;

#[derive(Error, Debug)]
pub enum BottleScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("ボトルが見つかりません: id={0}")]
    BottleNotFound(u64),

    #[error("カクテルが見つかりません: {0}")]
    CocktailNotFound(String),

    #[error("入力が不正です: {0}")]
    InvalidInput(String),

    #[error("在庫ファイルが不正: {0}")]
    InvalidInventory(String),

    #[error("レシピカタログが不正: {0}")]
    InvalidCatalog(String),

    #[error("OCR実行エラー: {0}")]
    Ocr(String),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] bottle_scan_common::Error),
}

pub type Result<T> = std::result::Result<T, BottleScanError>;
