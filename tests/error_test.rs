//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use bottle_scan::error::BottleScanError;
use bottle_scan::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(BottleScanError::FolderNotFound(_))));
}

/// 画像のないフォルダは空のVec
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("inventory.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path()).unwrap();
    assert!(result.is_empty());
}

/// Display実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BottleScanError::Config("テスト設定エラー".to_string()),
        BottleScanError::FileNotFound("recipes.json".to_string()),
        BottleScanError::FolderNotFound("/path/to/folder".to_string()),
        BottleScanError::NoImagesFound("フォルダ".to_string()),
        BottleScanError::BottleNotFound(42),
        BottleScanError::CocktailNotFound("Zombie".to_string()),
        BottleScanError::InvalidInput("空の名前".to_string()),
        BottleScanError::InvalidInventory("壊れたJSON".to_string()),
        BottleScanError::InvalidCatalog("重複ID".to_string()),
        BottleScanError::Ocr("tesseract".to_string()),
        BottleScanError::CliExecution("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }

    assert!(BottleScanError::BottleNotFound(42).to_string().contains("42"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BottleScanError = io_err.into();

    assert!(matches!(err, BottleScanError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: BottleScanError = json_err.into();

    assert!(matches!(err, BottleScanError::JsonParse(_)));
}

/// common::Errorは透過的に表示
#[test]
fn test_common_error_conversion() {
    let common_err = bottle_scan_common::Error::Parse("不明なカテゴリ".to_string());
    let err: BottleScanError = common_err.into();

    assert!(matches!(err, BottleScanError::Common(_)));
    assert!(err.to_string().contains("不明なカテゴリ"));
}
