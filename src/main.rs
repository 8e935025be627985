use clap::Parser;
use catalog_admin::{api, cli, commands, config, error, logging, ui};
use cli::{Cli, Commands};
use commands::{AddArgs, EditArgs};
use config::Config;
use error::{CatalogError, Result};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    match cli.command {
        Commands::Config { set_base_url, set_token, clear_token, status_policy, track_stock, show } => {
            let mut changed = false;
            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
            }
            if let Some(token) = set_token {
                config.auth_token = Some(token);
                changed = true;
            }
            if clear_token {
                config.auth_token = None;
                changed = true;
            }
            if let Some(policy) = status_policy {
                config.status_policy = policy;
                changed = true;
            }
            if let Some(track) = track_stock {
                config.stock_tracking = track;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  APIのURL: {}", config.resolve_base_url(cli.base_url.as_deref())?);
                println!("  認証トークン: {}", if config.resolve_token().is_some() { "設定済み" } else { "未設定" });
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  成功ステータス: {}", config.status_policy);
                println!("  在庫ラベル: {}", if config.stock_tracking { "有効" } else { "無効" });
            }
            Ok(())
        }

        command => {
            let api = api::HttpCatalogApi::from_config(&config, cli.base_url.as_deref())?;
            tracing::debug!(base_url = api.base_url(), "APIクライアントを初期化");
            dispatch(&api, &config, command).await
        }
    }
}

async fn dispatch(api: &api::HttpCatalogApi, config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::List { json } => commands::list(api, json).await,

        Commands::Show { id } => commands::show(api, config, id).await,

        Commands::Add { name, price, description, images, images_dir, stock, track_stock } => {
            let args = AddArgs { name, price, description, images, images_dir, stock, track_stock };
            commands::add(api, config, args).await
        }

        Commands::Edit { id, name, price, description, replace_images, stock } => {
            let args = EditArgs { id, name, price, description, replace_images, stock };
            commands::edit(api, config, args).await
        }

        Commands::Delete { id, yes } => commands::delete(api, id, yes).await,

        Commands::ResetPassword { password, confirm } => {
            commands::reset_password(api, password, confirm).await
        }

        Commands::Config { .. } => Ok(()),
    }
}

fn print_error(error: &CatalogError) {
    match error {
        CatalogError::Common(catalog_admin_common::Error::Validation(errors)) => {
            eprintln!("✖ 入力内容を確認してください");
            ui::print_field_errors(errors);
        }
        other => eprintln!("✖ {}", other),
    }
}
