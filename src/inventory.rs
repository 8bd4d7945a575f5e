//! ボトル在庫ストア
//!
//! データディレクトリの `inventory.json` にボトル一覧を保存する。
//! 解析キャッシュと違い、壊れたファイルは空扱いにせずエラーにする。

use crate::error::{BottleScanError, Result};
use bottle_scan_common::{Bottle, BottleStatus, Category, available_categories};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

const INVENTORY_FILE_NAME: &str = "inventory.json";

/// 在庫ファイル
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    version: u32,
    next_id: u64,
    bottles: Vec<Bottle>,

    #[serde(skip)]
    path: PathBuf,
}

/// 新規ボトルの入力
#[derive(Debug, Clone, Default)]
pub struct NewBottle {
    pub name: String,
    pub category: Category,
    pub photo_path: String,
    pub notes: Option<String>,
}

impl Inventory {
    const CURRENT_VERSION: u32 = 1;

    pub fn inventory_path(data_dir: &Path) -> PathBuf {
        data_dir.join(INVENTORY_FILE_NAME)
    }

    /// 在庫を開く（ファイルがなければ空の在庫）
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = Self::inventory_path(data_dir);

        if !path.exists() {
            return Ok(Self::empty(path));
        }

        let content = std::fs::read_to_string(&path)?;
        let mut inventory: Inventory = serde_json::from_str(&content)
            .map_err(|e| BottleScanError::InvalidInventory(format!("{}: {}", path.display(), e)))?;

        if inventory.version != Self::CURRENT_VERSION {
            return Err(BottleScanError::InvalidInventory(format!(
                "未対応のバージョン: {}",
                inventory.version
            )));
        }

        inventory.path = path;
        Ok(inventory)
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            next_id: 1,
            bottles: Vec::new(),
            path,
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ボトルを登録してIDを返す
    pub fn add_bottle(&mut self, new: NewBottle) -> Result<u64> {
        let date_added = chrono::Utc::now().to_rfc3339();
        self.add_bottle_at(new, date_added)
    }

    /// 登録日時を指定して登録
    pub fn add_bottle_at(&mut self, new: NewBottle, date_added: String) -> Result<u64> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(BottleScanError::InvalidInput("ボトル名が空です".into()));
        }

        let id = self.next_id;
        self.next_id += 1;

        self.bottles.push(Bottle {
            id,
            name: name.to_string(),
            category: new.category,
            photo_path: new.photo_path,
            quantity: 1,
            status: BottleStatus::Full,
            date_added,
            notes: new.notes.filter(|n| !n.trim().is_empty()),
        });

        info!(id, name, category = %new.category, "bottle added");
        Ok(id)
    }

    /// 全ボトル（新しい順）
    pub fn bottles(&self) -> Vec<&Bottle> {
        let mut bottles: Vec<&Bottle> = self.bottles.iter().collect();
        bottles.sort_by(|a, b| {
            b.date_added
                .cmp(&a.date_added)
                .then_with(|| b.id.cmp(&a.id))
        });
        bottles
    }

    /// カテゴリ指定（新しい順）
    pub fn bottles_by_category(&self, category: Category) -> Vec<&Bottle> {
        self.bottles()
            .into_iter()
            .filter(|b| b.category == category)
            .collect()
    }

    /// カテゴリで絞ったうえで名前を部分一致検索（大文字小文字無視、新しい順）
    pub fn search(&self, category: Option<Category>, query: Option<&str>) -> Vec<&Bottle> {
        let query = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        let bottles = match category {
            Some(category) => self.bottles_by_category(category),
            None => self.bottles(),
        };

        bottles
            .into_iter()
            .filter(|b| match &query {
                Some(q) => b.name.to_lowercase().contains(q.as_str()),
                None => true,
            })
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&Bottle> {
        self.bottles.iter().find(|b| b.id == id)
    }

    pub fn update_status(&mut self, id: u64, status: BottleStatus) -> Result<()> {
        let bottle = self
            .bottles
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BottleScanError::BottleNotFound(id))?;

        bottle.status = status;
        info!(id, %status, "bottle status updated");
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Result<Bottle> {
        let idx = self
            .bottles
            .iter()
            .position(|b| b.id == id)
            .ok_or(BottleScanError::BottleNotFound(id))?;

        let removed = self.bottles.remove(idx);
        info!(id, name = %removed.name, "bottle removed");
        Ok(removed)
    }

    /// 空でないボトルのカテゴリ
    pub fn available_categories(&self) -> BTreeSet<Category> {
        available_categories(&self.bottles)
    }

    pub fn len(&self) -> usize {
        self.bottles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bottles.is_empty()
    }
}
