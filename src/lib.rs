//! 商品カタログ管理ツール
//!
//! 共通ライブラリのフォーム状態をHTTP APIにつなぐCLI側の実装。

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod scanner;
pub mod staging;
pub mod ui;
pub mod workflow;
