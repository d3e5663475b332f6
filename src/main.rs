// ==========================================
// V-Replenishment 门店智能补货清单生成器 - 命令行入口
// ==========================================
// 用法: v-replenishment <库存表> <到货表> [--query Q] [--json]
// 输出: stdout 为清单,stderr 为日志
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use v_replenishment::i18n::{self, t, t_with_args};
use v_replenishment::{
    logging, ApiError, ConfigManager, DatasetKind, ReplenishmentApi, ReplenishmentItem,
    ReplenishmentRun, ReplenishmentStats, ReplenishmentView,
};

#[derive(Debug, Parser)]
#[command(name = "v-replenishment", version, about = "门店智能补货清单生成器")]
struct Cli {
    /// 库存表文件（.xlsx / .xls / .csv）
    inventory: PathBuf,

    /// 到货表文件（.xlsx / .xls / .csv）
    arrival: PathBuf,

    /// 搜索关键字（款号/名称/颜色/品牌/分类）
    #[arg(short, long, default_value = "")]
    query: String,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 配置文件路径
    #[arg(short, long, env = "V_REPLENISHMENT_CONFIG")]
    config: Option<PathBuf>,

    /// 界面语言（zh-CN / en）,优先于配置文件
    #[arg(short, long)]
    locale: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    run_id: String,
    generated_at: String,
    store_name: &'a str,
    batch_number: Option<&'a str>,
    canonical_stats: ReplenishmentStats,
    view: ReplenishmentView<'a>,
}

fn main() -> ExitCode {
    logging::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "执行失败");
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // ==========================================
    // 配置与语言
    // ==========================================
    let mut config = match cli.config.clone().or_else(ConfigManager::default_path) {
        Some(path) => ConfigManager::load(&path)
            .with_context(|| format!("配置加载失败: {}", path.display()))?,
        None => ConfigManager::default(),
    };
    if let Some(locale) = cli.locale.as_deref() {
        config.set_locale(locale)?;
    }
    i18n::set_locale(config.locale());

    tracing::info!(
        version = v_replenishment::VERSION,
        inventory = %cli.inventory.display(),
        arrival = %cli.arrival.display(),
        "{}",
        v_replenishment::APP_NAME
    );

    // ==========================================
    // 加载数据集（两个数据集的格式问题一并报告）
    // ==========================================
    let mut api = ReplenishmentApi::new(Arc::new(config));
    let mut invalid = Vec::new();

    for (kind, path) in [
        (DatasetKind::Inventory, &cli.inventory),
        (DatasetKind::Arrival, &cli.arrival),
    ] {
        match api.load_file(kind, path) {
            Ok(_) => {}
            Err(ApiError::InvalidDatasetFormat { datasets }) => invalid.extend(datasets),
            Err(e) => return Err(anyhow::Error::new(e).context(kind.label())),
        }
    }

    if !invalid.is_empty() {
        let names = invalid
            .iter()
            .map(DatasetKind::label)
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("{}", t_with_args("error.invalid_format", &[("datasets", names.as_str())]));
        return Ok(ExitCode::from(2));
    }

    // ==========================================
    // 生成清单并输出
    // ==========================================
    api.process()?;
    let canonical = api.canonical_stats()?;
    api.set_query(&cli.query)?;
    let view = api.current_view()?;
    let run = api.run().context("补货清单缺失")?;

    if cli.json {
        let report = JsonReport {
            run_id: run.run_id.to_string(),
            generated_at: run.generated_at.to_rfc3339(),
            store_name: &run.store_name,
            batch_number: run.batch_number(),
            canonical_stats: canonical,
            view,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_header(run, &view);
        print_table(&view);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_header(run: &ReplenishmentRun, view: &ReplenishmentView<'_>) {
    println!("{}", t("summary.title"));
    if !run.store_name.is_empty() {
        println!("{}", t_with_args("summary.store", &[("name", run.store_name.as_str())]));
    }
    if let Some(batch) = run.batch_number() {
        println!("{}", t_with_args("summary.batch", &[("batch", batch)]));
    }
    let time = run.generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
    println!("{}", t_with_args("summary.generated_at", &[("time", time.as_str())]));
    if !view.query.is_empty() {
        println!("{}", t_with_args("summary.query", &[("query", view.query.as_str())]));
    }

    let stats = &view.stats;
    println!(
        "{}",
        t_with_args(
            "summary.counts",
            &[
                ("total", stats.total.to_string().as_str()),
                ("new", stats.new_items.to_string().as_str()),
                ("zero", stats.zero_stock_items.to_string().as_str()),
                ("qty", stats.total_order_qty.to_string().as_str()),
            ],
        )
    );
    println!();
}

/// 表格列（与 table_row 一一对应）
const TABLE_COLUMNS: [&str; 14] = [
    "column.status",
    "column.sku",
    "column.item_number",
    "column.product_name",
    "column.gender",
    "column.color",
    "column.size",
    "column.brand",
    "column.category",
    "column.retail_price",
    "column.order_quantity",
    "column.current_stock",
    "column.priority",
    "column.remark",
];

fn table_row(item: &ReplenishmentItem) -> [String; 14] {
    let d = &item.details;
    [
        item.status().label(),
        item.sku.clone(),
        d.item_number.clone(),
        d.product_name.clone(),
        d.gender.clone(),
        d.color.clone(),
        d.size.clone(),
        d.brand.clone(),
        d.category.clone(),
        d.retail_price.clone(),
        item.order_quantity.to_string(),
        item.current_stock.to_string(),
        item.priority().label(),
        item.priority().remark(),
    ]
}

fn print_table(view: &ReplenishmentView<'_>) {
    if view.is_empty() {
        println!("{}", t("view.empty"));
        return;
    }

    println!(
        "{}",
        TABLE_COLUMNS.iter().map(|key| t(key)).collect::<Vec<_>>().join("\t")
    );
    for item in &view.items {
        println!("{}", table_row(item).join("\t"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use v_replenishment::ItemDetails;

    #[test]
    fn test_table_row_shows_searchable_fields() {
        let details = ItemDetails {
            gender: "女".to_string(),
            item_number: "J-02".to_string(),
            product_name: "Jacket".to_string(),
            brand: "Acme".to_string(),
            category: "Outerwear".to_string(),
            retail_price: "399".to_string(),
            ..Default::default()
        };
        let item = ReplenishmentItem::new("K2", 1, 0.0, false, details);

        let row = table_row(&item);
        assert_eq!(row.len(), TABLE_COLUMNS.len());
        assert_eq!(row[4], "女");
        assert_eq!(row[7], "Acme");
        assert_eq!(row[8], "Outerwear");
        assert_eq!(row[9], "399");
        assert_eq!(row[10], "1");
    }

    #[test]
    fn test_every_column_is_localized() {
        for key in TABLE_COLUMNS {
            assert_ne!(t(key), key);
        }
    }
}
