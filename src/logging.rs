//! ログ出力の初期化
//!
//! 診断ログは tracing で標準エラーへ出す。結果表示（println!）とは分ける。

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "catalog_admin=info,catalog_admin_common=info";
const VERBOSE_FILTER: &str = "catalog_admin=debug,catalog_admin_common=debug";

/// RUST_LOG が設定されていればそれを優先する
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    })
}

/// 2回目以降の呼び出しは何もしない
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let result = fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();

    if let Err(e) = result {
        if tracing::dispatcher::has_been_set() {
            return Ok(());
        }
        return Err(anyhow::anyhow!("ログ初期化に失敗: {}", e));
    }
    Ok(())
}
