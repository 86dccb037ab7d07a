//! propscope: headless runner for the property risk catalog.
//!
//! Usage:
//!   propscope --data data/processed_data.json --list-locations
//!   propscope --location "Quezon City" --status Occupied --sort price --order desc
//!   propscope --synthetic 500 --seed 7 --location "Cebu City" --json
//!   propscope --config propscope.json --ipc-mode

use anyhow::Result;
use propscope_core::{
    catalog::Catalog,
    config::CatalogConfig,
    engine::{LocationReport, PropertyQueryEngine},
    generator::CatalogGenerator,
    query::{QuerySpec, SortField, SortOrder},
    risk::RiskTier,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Locations,
    PropertyTypes,
    Statuses { location: String },
    Query { spec: QuerySpec },
    Quit,
}

const HISTOGRAM_WIDTH: usize = 40;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match string_arg(&args, "--config") {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(path) = string_arg(&args, "--data") {
        config.data_path = path.to_string();
    }
    if args.iter().any(|a| a == "--strict") {
        config.strict_loading = true;
    }

    let engine = build_engine(&args, &config)?;

    if args.iter().any(|a| a == "--ipc-mode") {
        return run_ipc_loop(&engine);
    }

    if args.iter().any(|a| a == "--list-locations") {
        for location in engine.locations() {
            println!("{location}");
        }
        return Ok(());
    }

    let Some(location) = string_arg(&args, "--location") else {
        anyhow::bail!("--location <name> is required (or use --list-locations / --ipc-mode)");
    };

    let sort_field: SortField = match string_arg(&args, "--sort") {
        Some(s) => s.parse()?,
        None => config.default_sort_field,
    };
    let sort_order: SortOrder = match string_arg(&args, "--order") {
        Some(s) => s.parse()?,
        None => config.default_sort_order,
    };
    let spec = QuerySpec::for_location(location)
        .with_status(string_arg(&args, "--status").unwrap_or("all"))
        .with_property_type(string_arg(&args, "--type").unwrap_or("all"))
        .sorted_by(sort_field, sort_order);

    let report = engine.query(&spec)?;
    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &config.currency_symbol);
    }
    Ok(())
}

fn build_engine(args: &[String], config: &CatalogConfig) -> Result<PropertyQueryEngine> {
    let synthetic: usize = parse_arg(args, "--synthetic", 0usize);
    if synthetic > 0 {
        let seed = parse_arg(args, "--seed", 42u64);
        log::info!("runner: generating {synthetic} synthetic properties (seed {seed})");
        return Ok(PropertyQueryEngine::new(CatalogGenerator::new(seed).generate(synthetic)));
    }

    let catalog = Catalog::load(&config.data_path, config.strict_loading)?;
    for q in &catalog.quarantined {
        log::warn!("runner: skipped record {} ({:?}): {}", q.index, q.id, q.reason);
    }
    Ok(PropertyQueryEngine::new(catalog.properties))
}

fn run_ipc_loop(engine: &PropertyQueryEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let reply = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Locations => serde_json::to_value(engine.locations())?,
            IpcCommand::PropertyTypes => serde_json::to_value(engine.property_types())?,
            IpcCommand::Statuses { location } => serde_json::to_value(engine.statuses(&location))?,
            IpcCommand::Query { spec } => match engine.query(&spec) {
                Ok(report) => serde_json::to_value(report)?,
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            },
        };
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_report(report: &LocationReport, currency: &str) {
    let spec = &report.spec;
    println!("=== PROPERTY ANALYSIS: {} ===", spec.location);
    println!("  properties:  {}", report.location_total);
    println!(
        "  filters:     status={} type={}",
        String::from(spec.status_filter.clone()),
        String::from(spec.property_type_filter.clone())
    );
    println!("  sort:        {} {}", spec.sort_field, spec.sort_order);
    println!();

    println!("=== RISK PROFILE DISTRIBUTION ===");
    let peak = RiskTier::ALL
        .iter()
        .map(|t| report.distribution.count(*t))
        .max()
        .unwrap_or(0)
        .max(1);
    for tier in RiskTier::ALL {
        let count = report.distribution.count(tier);
        let bar = "#".repeat(count * HISTOGRAM_WIDTH / peak);
        println!("  {:<14} {:>5}  {}", tier.label(), count, bar);
    }
    println!();

    println!("=== PROPERTIES ({} shown) ===", report.rows.len());
    if report.rows.is_empty() {
        println!("  (No matching properties)");
        return;
    }
    println!(
        "  {:<14} {:>18} {:>12} {:>12} {:<11} {}",
        "Type", "Price", "Lot Area", "Floor Area", "Status", "Risk Profile"
    );
    for row in &report.rows {
        let p = &row.property;
        println!(
            "  {:<14} {:>18} {:>12} {:>12} {:<11} {}",
            p.prop_group_type,
            format_currency(currency, p.min_sell_price),
            format_area(p.lot_area),
            format_area(p.floor_area),
            p.status,
            row.risk_tier.label()
        );
    }
}

fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) => format!("{a} sqm"),
        None => "-".into(),
    }
}

/// Thousands separators, cents only when present: 1234567.5 -> "₱1,234,567.5".
fn format_currency(symbol: &str, amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let fraction = cents % 100;
    if fraction == 0 {
        format!("{symbol}{grouped}")
    } else if fraction % 10 == 0 {
        format!("{symbol}{grouped}.{}", fraction / 10)
    } else {
        format!("{symbol}{grouped}.{fraction:02}")
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
