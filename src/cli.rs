use bottle_scan_common::{AvailabilityFilter, BottleStatus, Category};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bottle-scan")]
#[command(about = "ボトル写真OCR・在庫管理・カクテル提案ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ボトル写真を解析（ファイルまたはフォルダ）
    Scan {
        /// 画像ファイルまたはフォルダのパス
        #[arg(required = true)]
        path: PathBuf,

        /// キャッシュを使用（同じ画像のOCRをスキップ）
        #[arg(long)]
        use_cache: bool,

        /// 解析結果を在庫に登録
        #[arg(long)]
        save: bool,

        /// 対話的に名前とカテゴリを確認（--save 時）
        #[arg(short, long)]
        interactive: bool,

        /// 解析結果のJSON出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// テキストを分類（省略時は標準入力）
    Classify {
        /// ラベルのテキスト
        text: Option<String>,
    },

    /// ボトルを手動で登録
    Add {
        /// ボトル名
        #[arg(short, long)]
        name: String,

        /// カテゴリ (vodka/whiskey/rum/gin/tequila/brandy/liqueur/wine/beer/other)
        #[arg(short, long)]
        category: Category,

        /// 写真のパス
        #[arg(short, long)]
        photo: Option<PathBuf>,

        /// メモ
        #[arg(long)]
        notes: Option<String>,
    },

    /// 在庫一覧（新しい順）
    List {
        /// カテゴリで絞り込み
        #[arg(short, long)]
        category: Option<Category>,

        /// 名前で検索
        #[arg(short, long)]
        search: Option<String>,
    },

    /// ボトルの残量を更新
    Status {
        /// ボトルID
        id: u64,

        /// 残量 (full/low/empty)
        status: BottleStatus,
    },

    /// ボトルを削除
    Remove {
        /// ボトルID
        id: u64,
    },

    /// 在庫から作れるカクテルを表示
    Cocktails {
        /// 絞り込み (all/can-make/need-more)
        #[arg(short, long, default_value = "all")]
        filter: CocktailFilter,

        /// 名前・分類で検索
        #[arg(short, long)]
        search: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// カクテルの詳細（材料・作り方）を表示
    Cocktail {
        /// レシピIDまたは名前
        #[arg(required = true)]
        key: String,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// OCRコマンドを設定
        #[arg(long)]
        set_ocr_command: Option<String>,

        /// OCR言語を設定 (例: eng, eng+jpn)
        #[arg(long)]
        set_ocr_language: Option<String>,

        /// データディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// レシピカタログJSONを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,
    },

    /// キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// 対象フォルダ（省略時はカレント）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}

/// カクテル一覧の絞り込み
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CocktailFilter {
    #[default]
    All,
    CanMake,
    NeedMore,
}

impl std::str::FromStr for CocktailFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(CocktailFilter::All),
            "can-make" | "canmake" | "ok" => Ok(CocktailFilter::CanMake),
            "need-more" | "needmore" | "near" => Ok(CocktailFilter::NeedMore),
            _ => Err(format!("Unknown filter: {}. Use all, can-make, or need-more", s)),
        }
    }
}

impl From<CocktailFilter> for AvailabilityFilter {
    fn from(filter: CocktailFilter) -> Self {
        match filter {
            CocktailFilter::All => AvailabilityFilter::All,
            CocktailFilter::CanMake => AvailabilityFilter::CanMake,
            CocktailFilter::NeedMore => AvailabilityFilter::NeedMore,
        }
    }
}
