//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output;
use rieki_app::app::{run_estimate, EstimateReport, EstimateRequest, QuickEstimate};
use rieki_app::batch::load_items_from_csv;
use rieki_app::config::Config;
use rieki_app::faq::{faq_node, FAQ_START};
use rieki_app::tables::{
    find_category_fee, load_category_fees, load_rate_snapshot, load_shipping_catalog,
    DEFAULT_SHIPPING_CATALOG,
};
use rieki_domain::model::{PackageDimensions, ShippingCatalog};
use rieki_domain::service::{
    actual_cost, category_fee_amount, gross_profit, profit_margin, select_cheapest_shipping,
};
use rieki_types::{Error, Result};
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);
    let data_dir = cli.data_dir.clone().or_else(|| config.data_dir.clone());

    match cli.command {
        Commands::Estimate {
            selling_price,
            cost_price,
            weight,
            dimensions,
            category_fee,
            category,
            payment_fee,
            divisor,
        } => {
            let catalog = resolve_catalog(&data_dir)?;
            let rate = resolve_rate(cli.rate, &data_dir)?;
            let category_fee_percent =
                resolve_category_fee(category_fee, category.as_deref(), &data_dir)?;

            let request = EstimateRequest {
                selling_price_usd: selling_price,
                cost_price_jpy: cost_price,
                actual_weight_g: weight,
                dimensions: dims(&dimensions),
                category_fee_percent,
                payment_fee_percent: payment_fee.unwrap_or(config.payment_fee_percent),
                exchange_rate_usd_to_jpy: rate,
                volumetric_divisor: divisor.unwrap_or(config.volumetric_divisor),
                target_margin: config.target_margin,
            };
            let report = run_estimate(&catalog, &request)?;
            output::output_report(format, &report)
        }

        Commands::Shipping {
            weight,
            dimensions,
            divisor,
        } => {
            let catalog = resolve_catalog(&data_dir)?;
            let quote = select_cheapest_shipping(
                &catalog,
                weight,
                &dims(&dimensions),
                divisor.unwrap_or(config.volumetric_divisor),
            );
            output::output_shipping(format, quote.as_ref())
        }

        Commands::Quick {
            selling_price,
            cost_price,
            shipping_jpy,
            category_fee,
        } => {
            let rate = match resolve_rate(cli.rate, &data_dir)? {
                Some(rate) if rate > 0.0 => rate,
                _ => return Err(Error::MissingRate),
            };
            let selling_price_jpy = selling_price * rate;
            let category_fee_jpy = category_fee_amount(selling_price_jpy, category_fee);
            let actual_cost_jpy = actual_cost(cost_price, shipping_jpy, category_fee_jpy);
            let gross_profit_jpy = gross_profit(selling_price_jpy, actual_cost_jpy);
            let quick = QuickEstimate {
                shipping_jpy,
                category_fee_jpy,
                actual_cost_jpy,
                gross_profit_jpy,
                profit_margin_percent: profit_margin(gross_profit_jpy, selling_price_jpy),
                selling_price_jpy,
                rate,
            };
            output::output_quick(format, &quick)
        }

        Commands::Batch { input } => {
            let catalog = resolve_catalog(&data_dir)?;
            let rate = match resolve_rate(cli.rate, &data_dir)? {
                Some(rate) if rate > 0.0 => rate,
                _ => return Err(Error::MissingRate),
            };
            let items = load_items_from_csv(&input)?;

            let mut rows: Vec<(String, Result<EstimateReport>)> = Vec::new();
            for (index, item) in items.iter().enumerate() {
                let request = EstimateRequest {
                    selling_price_usd: item.selling_price_usd,
                    cost_price_jpy: item.cost_price_jpy,
                    actual_weight_g: item.weight_g,
                    dimensions: PackageDimensions::new(
                        item.length_cm,
                        item.width_cm,
                        item.height_cm,
                    ),
                    category_fee_percent: item.category_fee_percent,
                    payment_fee_percent: config.payment_fee_percent,
                    exchange_rate_usd_to_jpy: Some(rate),
                    volumetric_divisor: config.volumetric_divisor,
                    target_margin: config.target_margin,
                };
                let name = item
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", index + 1));
                rows.push((name, run_estimate(&catalog, &request)));
            }
            output::output_batch(format, &rows)
        }

        Commands::Faq => run_faq(),

        Commands::Config {
            show,
            set_payment_fee,
            set_divisor,
            set_output,
            set_data_dir,
        } => {
            let mut config = config;
            let mut changed = false;
            if let Some(fee) = set_payment_fee {
                config.payment_fee_percent = fee;
                changed = true;
            }
            if let Some(divisor) = set_divisor {
                config.volumetric_divisor = divisor;
                changed = true;
            }
            if let Some(format) = set_output {
                config.output_format = format;
                changed = true;
            }
            if let Some(dir) = set_data_dir {
                config.data_dir = Some(dir);
                changed = true;
            }
            if changed {
                config.save()?;
                println!("Configuration updated.");
            }
            if show || !changed {
                print!("{}", config);
            }
            Ok(())
        }
    }
}

fn dims(values: &[f64]) -> PackageDimensions {
    // clap enforces exactly three values
    PackageDimensions::new(values[0], values[1], values[2])
}

/// shipping.json があれば読み、無ければ組み込みの料金表を使う
fn resolve_catalog(data_dir: &Option<PathBuf>) -> Result<ShippingCatalog> {
    if let Some(dir) = data_dir {
        let path = dir.join("shipping.json");
        if path.exists() {
            return load_shipping_catalog(&path);
        }
    }
    Ok(DEFAULT_SHIPPING_CATALOG.clone())
}

/// --rate 指定が最優先。無ければ exchangeRate.json のスナップショット。
/// どちらも無ければ None のまま返し、致命判定は計算側に任せる。
fn resolve_rate(explicit: Option<f64>, data_dir: &Option<PathBuf>) -> Result<Option<f64>> {
    if explicit.is_some() {
        return Ok(explicit);
    }
    if let Some(dir) = data_dir {
        let path = dir.join("exchangeRate.json");
        if path.exists() {
            let snapshot = load_rate_snapshot(&path)?;
            return Ok(snapshot.usd_rate());
        }
    }
    Ok(None)
}

fn resolve_category_fee(
    explicit: Option<f64>,
    category: Option<&str>,
    data_dir: &Option<PathBuf>,
) -> Result<f64> {
    if let Some(fee) = explicit {
        return Ok(fee);
    }
    let Some(query) = category else {
        return Err(Error::UnknownCategory(
            "specify --category-fee or --category".to_string(),
        ));
    };
    let Some(dir) = data_dir else {
        return Err(Error::DataFile(
            "--category requires categoryFees.json (set --data-dir)".to_string(),
        ));
    };
    let options = load_category_fees(&dir.join("categoryFees.json"))?;
    let option = find_category_fee(&options, query)
        .ok_or_else(|| Error::UnknownCategory(query.to_string()))?;
    Ok(option.value)
}

fn run_faq() -> Result<()> {
    use std::io::Write as _;

    println!("簡単チャットボット (q: 終了, b: 最初に戻る)");
    let mut current = FAQ_START;
    loop {
        let Some(node) = faq_node(current) else {
            break;
        };
        println!();
        println!("{}", node.text);
        for (index, option) in node.options.iter().enumerate() {
            println!("  {}. {}", index + 1, option.text);
        }
        print!("> ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        match input {
            "q" | "Q" => break,
            "b" | "B" => {
                current = FAQ_START;
                continue;
            }
            _ => {}
        }

        let choice = input.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
        let Some(option) = choice.and_then(|i| node.options.get(i)) else {
            println!("番号で選んでください。");
            continue;
        };
        if let Some(url) = option.url {
            println!("→ {}", url);
        }
        match option.next_id {
            Some(next_id) => current = next_id,
            None => break,
        }
    }
    Ok(())
}
