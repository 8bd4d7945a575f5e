//! 解析結果の確認・在庫登録モジュール
//!
//! 名前が抽出できなかった写真は手入力が必要。
//! 非対話モードではスキップし、対話モードでは名前とカテゴリを入力してもらう。

use crate::analyzer::ScanOutcome;
use crate::error::{BottleScanError, Result};
use crate::inventory::{Inventory, NewBottle};
use bottle_scan_common::Category;
use dialoguer::{Input, Select};

/// 登録結果
#[derive(Debug, Clone, Default)]
pub struct SaveSummary {
    pub saved: Vec<u64>,
    pub skipped: usize,
}

/// 名前入力に対する操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameAction {
    /// この名前で登録
    Use(String),
    /// この写真をスキップ
    Skip,
    /// 保存して終了
    Quit,
}

/// 解析結果をそのまま登録できる場合の入力
pub fn new_bottle_from_outcome(outcome: &ScanOutcome) -> Option<NewBottle> {
    if outcome.result.needs_manual_entry() {
        return None;
    }

    Some(NewBottle {
        name: outcome.result.extracted_name.clone(),
        category: outcome.result.classification.category,
        photo_path: outcome.image.path.display().to_string(),
        notes: None,
    })
}

/// 名前入力の解釈（空入力は候補を採用、候補もなければスキップ）
pub fn parse_name_input(input: &str, suggested: &str) -> NameAction {
    match input.trim() {
        "" if suggested.trim().is_empty() => NameAction::Skip,
        "" => NameAction::Use(suggested.trim().to_string()),
        "s" => NameAction::Skip,
        "q" | "Q" => NameAction::Quit,
        name => NameAction::Use(name.to_string()),
    }
}

/// 解析結果を在庫に登録する
pub fn save_outcomes(
    inventory: &mut Inventory,
    outcomes: &[ScanOutcome],
    interactive: bool,
) -> Result<SaveSummary> {
    let mut summary = SaveSummary::default();

    for (count, outcome) in outcomes.iter().enumerate() {
        if !interactive {
            match new_bottle_from_outcome(outcome) {
                Some(new) => summary.saved.push(inventory.add_bottle(new)?),
                None => {
                    println!("  ⚠ {}: 名前を検出できませんでした（手入力が必要）", outcome.image.file_name);
                    summary.skipped += 1;
                }
            }
            continue;
        }

        println!(
            "[{}/{}] {} (信頼度 {:.0}%)",
            count + 1,
            outcomes.len(),
            outcome.image.file_name,
            outcome.result.confidence * 100.0
        );

        match prompt_name(&outcome.result.extracted_name)? {
            NameAction::Use(name) => {
                let category = prompt_category(outcome.result.classification.category)?;
                let id = inventory.add_bottle(NewBottle {
                    name: name.clone(),
                    category,
                    photo_path: outcome.image.path.display().to_string(),
                    notes: None,
                })?;
                println!("  → #{} {} ({})\n", id, name, category);
                summary.saved.push(id);
            }
            NameAction::Skip => {
                println!("  → スキップ\n");
                summary.skipped += 1;
            }
            NameAction::Quit => {
                println!("保存して終了します...");
                summary.skipped += outcomes.len() - count;
                break;
            }
        }
    }

    Ok(summary)
}

fn prompt_name(suggested: &str) -> Result<NameAction> {
    let prompt = if suggested.is_empty() {
        "ボトル名 (s:スキップ q:終了)".to_string()
    } else {
        format!("ボトル名 [{}] (s:スキップ q:終了)", suggested)
    };

    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| BottleScanError::CliExecution(e.to_string()))?;

    Ok(parse_name_input(&input, suggested))
}

fn prompt_category(suggested: Category) -> Result<Category> {
    let items: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let default = Category::ALL
        .iter()
        .position(|c| *c == suggested)
        .unwrap_or(Category::ALL.len() - 1);

    let selected = Select::new()
        .with_prompt("カテゴリ")
        .items(&items)
        .default(default)
        .interact()
        .map_err(|e| BottleScanError::CliExecution(e.to_string()))?;

    Ok(Category::ALL[selected])
}
