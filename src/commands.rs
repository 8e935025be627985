//! サブコマンドの実行

use crate::api::{CatalogApi, HttpCatalogApi};
use crate::cli::IndexedValue;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::staging::{FilePreviews, LocalImage};
use crate::workflow::{self, NativeProductForm};
use crate::{scanner, ui};
use catalog_admin_common::{
    cover_url, AfterSubmit, FormMode, PasswordForm, ProductForm, ProductList, StockMode,
    SubmissionResult,
};
use dialoguer::{Confirm, Password};
use std::path::{Path, PathBuf};

/// 成功なら通知を表示、失敗ならエラーとして返す
fn finish(result: &SubmissionResult) -> Result<()> {
    if result.succeeded {
        ui::notify(result);
        Ok(())
    } else {
        Err(CatalogError::Failed(result.message.clone()))
    }
}

pub async fn list(api: &HttpCatalogApi, json: bool) -> Result<()> {
    let mut list = ProductList::new();
    let pb = ui::spinner("商品一覧を取得中...");
    let failure = workflow::fetch_products(api, &mut list).await;
    pb.finish_and_clear();

    if let Some(result) = failure {
        return finish(&result);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(list.items())?);
        return Ok(());
    }

    if list.is_empty() {
        println!("商品が見つかりません");
        return Ok(());
    }

    for (index, product) in list.items().iter().enumerate() {
        let cover = cover_url(product, api.base_url()).unwrap_or_else(|| "-".into());
        println!(
            "{:>3}  {}  {}  {}  {}",
            index + 1,
            product.id,
            product.name,
            product.price,
            cover
        );
    }
    println!("\n{}件", list.len());
    Ok(())
}

pub async fn show(api: &HttpCatalogApi, config: &Config, id: String) -> Result<()> {
    let mut form = edit_form(config, id);
    let pb = ui::spinner("商品を取得中...");
    let failure = workflow::load_product(api, &mut form, api.base_url()).await;
    pb.finish_and_clear();

    if let Some(result) = failure {
        return finish(&result);
    }

    println!("商品名: {}", form.name());
    println!("価格:   {}", form.price());
    println!("説明:   {}", form.description());
    println!("画像:   {}枚", form.slots().len());
    for (index, slot) in form.slots().iter().enumerate() {
        let url = slot.image.display_url().unwrap_or("-");
        if form.stock_mode() == StockMode::PerImage {
            println!("  [{}] {} (在庫: {})", index, url, slot.stock);
        } else {
            println!("  [{}] {}", index, url);
        }
    }
    Ok(())
}

pub struct AddArgs {
    pub name: String,
    pub price: String,
    pub description: String,
    pub images: Vec<PathBuf>,
    pub images_dir: Option<PathBuf>,
    pub stock: Vec<String>,
    pub track_stock: bool,
}

/// 新規登録用の下書きを組み立てる
pub fn build_add_form(config: &Config, args: AddArgs) -> Result<NativeProductForm> {
    let mut paths = args.images;
    if let Some(dir) = &args.images_dir {
        paths.extend(scanner::scan_folder(dir)?);
    }
    if args.stock.len() > paths.len() {
        return Err(CatalogError::InvalidArgument(format!(
            "在庫ラベル({}件)が画像({}枚)より多く指定されています",
            args.stock.len(),
            paths.len()
        )));
    }

    let stock_mode = if args.track_stock || !args.stock.is_empty() {
        StockMode::PerImage
    } else {
        config.stock_mode()
    };

    let mut form = ProductForm::new(FormMode::Create, stock_mode, FilePreviews::new());
    form.set_name(args.name);
    form.set_price(args.price);
    form.set_description(args.description);

    for (index, path) in paths.iter().enumerate() {
        let image = LocalImage::open(path)?;
        let slots = form.slots_mut();
        slots.append();
        slots.set_image_at(index, image)?;
        if let Some(label) = args.stock.get(index) {
            slots.set_stock_at(index, label)?;
        }
    }
    Ok(form)
}

pub async fn add(api: &HttpCatalogApi, config: &Config, args: AddArgs) -> Result<()> {
    let mut form = build_add_form(config, args)?;
    submit(api, &mut form).await
}

pub struct EditArgs {
    pub id: String,
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub replace_images: Vec<IndexedValue>,
    pub stock: Vec<IndexedValue>,
}

fn edit_form(config: &Config, id: String) -> NativeProductForm {
    ProductForm::new(FormMode::Edit { id }, config.stock_mode(), FilePreviews::new())
}

/// 読み込み済みの下書きに変更を適用
pub fn apply_edits(form: &mut NativeProductForm, args: EditArgs) -> Result<()> {
    if let Some(name) = args.name {
        form.set_name(name);
    }
    if let Some(price) = args.price {
        form.set_price(price);
    }
    if let Some(description) = args.description {
        form.set_description(description);
    }
    for replacement in args.replace_images {
        let image = LocalImage::open(Path::new(&replacement.value))?;
        form.slots_mut().set_image_at(replacement.index, image)?;
    }
    if !args.stock.is_empty() && form.stock_mode() == StockMode::Untracked {
        tracing::warn!("在庫ラベルは無効です（config --track-stock true で有効化）");
    }
    for label in args.stock {
        form.slots_mut().set_stock_at(label.index, label.value)?;
    }
    Ok(())
}

pub async fn edit(api: &HttpCatalogApi, config: &Config, args: EditArgs) -> Result<()> {
    let mut form = edit_form(config, args.id.clone());

    let pb = ui::spinner("商品を取得中...");
    let failure = workflow::load_product(api, &mut form, api.base_url()).await;
    pb.finish_and_clear();
    if let Some(result) = failure {
        return finish(&result);
    }

    apply_edits(&mut form, args)?;
    submit(api, &mut form).await
}

async fn submit<A: CatalogApi>(api: &A, form: &mut NativeProductForm) -> Result<()> {
    let pb = ui::spinner("送信中...");
    let report = workflow::submit_product(api, form).await;
    pb.finish_and_clear();

    let report = report?;
    if report.next == AfterSubmit::GoToCreate {
        tracing::info!("更新完了。新規登録モードに戻ります");
    }
    form.acknowledge();
    finish(&report.result)
}

pub async fn delete(api: &HttpCatalogApi, id: String, yes: bool) -> Result<()> {
    let mut list = ProductList::new();
    let pb = ui::spinner("商品一覧を取得中...");
    let failure = workflow::fetch_products(api, &mut list).await;
    pb.finish_and_clear();
    if let Some(result) = failure {
        return finish(&result);
    }

    if !list.request_delete(&id) {
        return Err(CatalogError::InvalidArgument(format!("商品が見つかりません: {}", id)));
    }

    if !yes {
        let name = list
            .position(&id)
            .map(|i| list.items()[i].name.clone())
            .unwrap_or_default();
        let confirmed = Confirm::new()
            .with_prompt(format!("「{}」を削除しますか?", name))
            .default(false)
            .interact()
            .map_err(|e| CatalogError::Io(std::io::Error::other(e.to_string())))?;
        if !confirmed {
            list.cancel_delete();
            return Err(CatalogError::Cancelled);
        }
    }

    let pb = ui::spinner("削除中...");
    let result = workflow::confirm_delete(api, &mut list).await;
    pb.finish_and_clear();

    match result {
        Some(result) => {
            finish(&result)?;
            println!("残り{}件", list.len());
            Ok(())
        }
        None => Err(CatalogError::Cancelled),
    }
}

pub async fn reset_password(
    api: &HttpCatalogApi,
    password: Option<String>,
    confirm: Option<String>,
) -> Result<()> {
    let mut form = PasswordForm::new();
    match (password, confirm) {
        (Some(password), Some(confirm)) => {
            form.password = password;
            form.confirm_password = confirm;
        }
        _ => {
            form.password = prompt_password("新しいパスワード")?;
            form.confirm_password = prompt_password("確認用パスワード")?;
        }
    }

    let pb = ui::spinner("送信中...");
    let result = workflow::reset_password(api, &mut form).await;
    pb.finish_and_clear();

    let result = result?;
    form.acknowledge();
    finish(&result)
}

fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| CatalogError::Io(std::io::Error::other(e.to_string())))
}
