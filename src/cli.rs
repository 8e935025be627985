use catalog_admin_common::StatusPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(about = "商品カタログ管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品一覧を表示
    List {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 商品の詳細を表示
    Show {
        /// 商品ID
        #[arg(required = true)]
        id: String,
    },

    /// 商品を新規登録
    Add {
        /// 商品名
        #[arg(short, long, default_value = "")]
        name: String,

        /// 価格
        #[arg(short, long, default_value = "")]
        price: String,

        /// 説明
        #[arg(short, long, default_value = "")]
        description: String,

        /// 画像ファイル（複数指定可）
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,

        /// 画像フォルダ（直下の画像をすべて追加）
        #[arg(long)]
        images_dir: Option<PathBuf>,

        /// 在庫ラベル（画像と同じ順に指定）
        #[arg(short, long = "stock")]
        stock: Vec<String>,

        /// 在庫ラベルを送信する（--stock指定時は自動で有効）
        #[arg(long)]
        track_stock: bool,
    },

    /// 既存商品を更新
    Edit {
        /// 商品ID
        #[arg(required = true)]
        id: String,

        /// 商品名
        #[arg(short, long)]
        name: Option<String>,

        /// 価格
        #[arg(short, long)]
        price: Option<String>,

        /// 説明
        #[arg(short, long)]
        description: Option<String>,

        /// 画像の差し替え（INDEX=PATH）
        #[arg(long = "replace-image")]
        replace_images: Vec<IndexedValue>,

        /// 在庫ラベルの変更（INDEX=LABEL）
        #[arg(short, long = "stock")]
        stock: Vec<IndexedValue>,
    },

    /// 商品を削除
    Delete {
        /// 商品ID
        #[arg(required = true)]
        id: String,

        /// 確認なしで削除
        #[arg(short, long)]
        yes: bool,
    },

    /// パスワードを再設定
    ResetPassword {
        /// 新しいパスワード（省略時は対話入力）
        #[arg(long, requires = "confirm")]
        password: Option<String>,

        /// 確認用パスワード
        #[arg(long, requires = "password")]
        confirm: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 認証トークンを設定
        #[arg(long)]
        set_token: Option<String>,

        /// 認証トークンを削除
        #[arg(long, conflicts_with = "set_token")]
        clear_token: bool,

        /// 成功とみなすステータス (any/created)
        #[arg(long)]
        status_policy: Option<StatusPolicy>,

        /// 在庫ラベルを扱う (true/false)
        #[arg(long)]
        track_stock: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `INDEX=VALUE` 形式の引数
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedValue {
    pub index: usize,
    pub value: String,
}

impl std::str::FromStr for IndexedValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, value) = s
            .split_once('=')
            .ok_or_else(|| format!("INDEX=VALUE の形式で指定してください: {}", s))?;
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("番号が不正です: {}", index))?;
        Ok(IndexedValue { index, value: value.to_string() })
    }
}
