use bottle_scan::{analyzer, cli, config, error, inventory, matcher, review, scanner};
use bottle_scan_common::{AvailabilityFilter, AvailabilityResult, Bottle, BottleStatus, analyze_text};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use inventory::{Inventory, NewBottle};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Scan { path, use_cache, save, interactive, output } => {
            println!("🍾 bottle-scan - ボトル解析\n");

            // 1. 画像スキャン
            println!("[1/3] 写真をスキャン中...");
            let images = scanner::scan_path(&path)?;
            if images.is_empty() {
                return Err(error::BottleScanError::NoImagesFound(path.display().to_string()));
            }
            println!("✔ {}枚の写真を検出\n", images.len());

            // 2. OCR解析
            println!("[2/3] OCR解析中...{}", if use_cache { " (キャッシュ有効)" } else { "" });
            let recognizer = analyzer::TesseractCli::from_config(&config);
            let cache_dir = if path.is_file() {
                path.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| PathBuf::from("."))
            } else {
                path.clone()
            };

            let outcomes = if use_cache {
                let mut cache = analyzer::CacheFile::load(&cache_dir);
                let outcomes = analyzer::process_images(&recognizer, &images, Some(&mut cache), cli.verbose).await;
                cache.save(&cache_dir)?;
                outcomes
            } else {
                analyzer::process_images(&recognizer, &images, None, cli.verbose).await
            };
            println!("✔ 解析完了\n");

            for outcome in &outcomes {
                print_outcome(outcome);
            }

            if let Some(output) = output {
                let results: Vec<_> = outcomes.iter().map(|o| &o.result).collect();
                let json = serde_json::to_string_pretty(&results)?;
                std::fs::write(&output, json)?;
                println!("\n✔ 結果を保存: {}", output.display());
            }

            // 3. 在庫登録
            if save {
                println!("\n[3/3] 在庫に登録中...");
                let mut inventory = Inventory::open(&config.resolve_data_dir()?)?;
                let summary = review::save_outcomes(&mut inventory, &outcomes, interactive)?;
                inventory.save()?;
                println!("✔ {}本を登録 ({}件スキップ)", summary.saved.len(), summary.skipped);
                println!("  保存先: {}", inventory.path().display());
            }

            println!("\n✅ 完了");
        }

        Commands::Classify { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let result = analyze_text(&text);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Add { name, category, photo, notes } => {
            let mut inventory = Inventory::open(&config.resolve_data_dir()?)?;
            let id = inventory.add_bottle(NewBottle {
                name,
                category,
                photo_path: photo.map(|p| p.display().to_string()).unwrap_or_default(),
                notes,
            })?;
            inventory.save()?;

            if let Some(bottle) = inventory.get(id) {
                println!("✔ 登録しました: #{} {} ({})", bottle.id, bottle.name, bottle.category);
                println!("  保存先: {}", inventory.path().display());
            }
        }

        Commands::List { category, search } => {
            let inventory = Inventory::open(&config.resolve_data_dir()?)?;
            let bottles = inventory.search(category, search.as_deref());

            if bottles.is_empty() {
                println!("在庫がありません");
            } else {
                println!("在庫 ({}本):", bottles.len());
                for bottle in bottles {
                    print_bottle(bottle);
                }
            }
        }

        Commands::Status { id, status } => {
            let mut inventory = Inventory::open(&config.resolve_data_dir()?)?;
            inventory.update_status(id, status)?;
            inventory.save()?;
            println!("✔ #{} の残量を {} に更新しました", id, status);
        }

        Commands::Remove { id } => {
            let mut inventory = Inventory::open(&config.resolve_data_dir()?)?;
            let removed = inventory.remove(id)?;
            inventory.save()?;
            println!("✔ 削除しました: #{} {}", removed.id, removed.name);
        }

        Commands::Cocktails { filter, search, json } => {
            let inventory = Inventory::open(&config.resolve_data_dir()?)?;
            let recipes = matcher::load_catalog(&config)?;
            let results = matcher::match_inventory(&inventory, &recipes, filter.into(), search.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_cocktails(&results);
            }
        }

        Commands::Cocktail { key } => {
            let inventory = Inventory::open(&config.resolve_data_dir()?)?;
            let recipes = matcher::load_catalog(&config)?;
            let results = matcher::match_inventory(&inventory, &recipes, AvailabilityFilter::All, None);
            let found = matcher::find_cocktail(&results, &key)?;
            print!("{}", matcher::format_detail(found));
        }

        Commands::Config { show, set_ocr_command, set_ocr_language, set_data_dir, set_catalog } => {
            let mut config = config;

            if let Some(command) = set_ocr_command {
                config.set_ocr_command(command)?;
                println!("✔ OCRコマンドを設定しました");
            }

            if let Some(language) = set_ocr_language {
                config.set_ocr_language(language)?;
                println!("✔ OCR言語を設定しました");
            }

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データディレクトリを設定しました");
            }

            if let Some(path) = set_catalog {
                matcher::load_catalog_file(&path)?;
                config.set_catalog_path(path)?;
                println!("✔ レシピカタログを設定しました");
            }

            if show {
                println!("設定:");
                println!("  OCRコマンド: {}", config.ocr_command);
                println!("  OCR言語: {}", config.ocr_language);
                match config.resolve_data_dir() {
                    Ok(dir) => println!("  データディレクトリ: {}", dir.display()),
                    Err(e) => println!("  データディレクトリ: 未解決 ({})", e),
                }
                match &config.catalog_path {
                    Some(path) => println!("  レシピカタログ: {}", path.display()),
                    None => println!("  レシピカタログ: 内蔵"),
                }
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| PathBuf::from("."));
            let cache_path = analyzer::CacheFile::cache_path(&target);

            if info || !clear {
                if cache_path.exists() {
                    let cache = analyzer::CacheFile::load(&target);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    println!("  件数: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                match analyzer::CacheFile::clear(&target) {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache_path.display()),
                    Ok(false) => println!("キャッシュファイルが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}

/// RUST_LOG が優先、なければ warn（--verbose で debug）
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(outcome: &analyzer::ScanOutcome) {
    let result = &outcome.result;
    let name = if result.needs_manual_entry() {
        "(検出なし)"
    } else {
        result.extracted_name.as_str()
    };

    println!(
        "  {} → {} [{}] 信頼度 {:.0}%{}",
        outcome.image.file_name,
        name,
        result.classification.category,
        result.confidence * 100.0,
        if outcome.from_cache { " (キャッシュ)" } else { "" }
    );
}

fn print_bottle(bottle: &Bottle) {
    let status = match bottle.status {
        BottleStatus::Full => "満",
        BottleStatus::Low => "少",
        BottleStatus::Empty => "空",
    };
    println!("  #{:<4} {:<30} {:<8} [{}] {}", bottle.id, bottle.name, bottle.category.as_str(), status, bottle.date_added);
    if let Some(notes) = &bottle.notes {
        println!("        メモ: {}", notes);
    }
}

fn print_cocktails(results: &[AvailabilityResult]) {
    if results.is_empty() {
        println!("該当するカクテルがありません");
        return;
    }

    let can_make = results.iter().filter(|r| r.can_make).count();
    println!("カクテル ({}件中 {}件作成可能):", results.len(), can_make);

    for result in results {
        if result.can_make {
            println!("  ✔ {} ({}, {})", result.recipe.name, result.recipe.category, result.recipe.difficulty);
        } else {
            let missing: Vec<&str> = result.missing_categories.iter().map(|c| c.as_str()).collect();
            println!("  ✗ {} - 不足: {}", result.recipe.name, missing.join(", "));
        }
    }
}
