use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use itinerary_core::{format_km, route_chain, route_legs, short_name};
use itinerary_ledger::{LedgerRow, COLUMNS};
use itinerary_site::{
    budget_panels, load_budget, load_site, write_failure_page, write_site, DataSource, LoadedSite,
    Mount, SiteContext, SiteSettings,
};
use std::path::PathBuf;

mod config;
mod logging;

use config::{Config, DEFAULT_CONFIG_FILE};

const BUILD_SHA: &str = env!("ITINERARY_BUILD_SHA");

#[derive(Parser, Debug)]
#[command(name = "itinerary", version, about = "Static travel itinerary site generator")]
struct Cli {
    /// Config file (defaults apply when it does not exist)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the trip data and write every page of the site
    Build {
        /// Data directory or http(s) base URL (overrides config)
        #[arg(long)]
        data: Option<String>,

        /// Output directory (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the route chain and per-leg distances
    Route {
        #[arg(long)]
        data: Option<String>,
    },

    /// Print the detail panels for one stay
    Stay {
        /// 1-based position in the itinerary
        ordinal: usize,

        #[arg(long)]
        data: Option<String>,
    },

    /// Print budget totals and the ledger table
    Budget {
        #[arg(long)]
        data: Option<String>,
    },

    /// Config file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a config file with the default values
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Command::Build { data, out } => {
            let out = out.unwrap_or_else(|| cfg.site.output_dir.clone());
            build(&cfg, data, out).await?;
        }

        Command::Route { data } => {
            let (site, _) = load(&cfg, data).await?;
            print_route(&site);
        }

        Command::Stay { ordinal, data } => {
            let (site, settings) = load(&cfg, data).await?;
            print_stay(site, settings, ordinal)?;
        }

        Command::Budget { data } => {
            let source = source_for(&cfg, data);
            let settings = cfg.site_settings(&source, &generator())?;
            match load_budget(&source, &cfg.data_files()).await {
                Ok(rows) => print_budget(&rows, &settings),
                Err(e) => {
                    tracing::error!(error = %e, "budget unavailable");
                    bail!("{}", budget_panels(None, &settings).text(Mount::BudgetTotals));
                }
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(&cli.config)?,
            ConfigCommand::Show => {
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("{}", s.trim_end());
            }
        },
    }

    Ok(())
}

fn generator() -> String {
    format!("itinerary {} ({})", env!("CARGO_PKG_VERSION"), BUILD_SHA)
}

fn source_for(cfg: &Config, data: Option<String>) -> DataSource {
    DataSource::parse(&data.unwrap_or_else(|| cfg.data.source.clone()))
}

async fn load(cfg: &Config, data: Option<String>) -> Result<(LoadedSite, SiteSettings)> {
    let source = source_for(cfg, data);
    let settings = cfg.site_settings(&source, &generator())?;
    let site = load_site(&source, &cfg.data_files())
        .await
        .context("loading trip data")?;
    Ok((site, settings))
}

async fn build(cfg: &Config, data: Option<String>, out: PathBuf) -> Result<()> {
    let source = source_for(cfg, data);
    let settings = cfg.site_settings(&source, &generator())?;
    tracing::info!(source = %source.locate(""), out = %out.display(), "building site");

    let booted = match load_site(&source, &cfg.data_files()).await {
        Ok(site) => SiteContext::new(site, settings.clone()),
        Err(e) => Err(anyhow::Error::new(e)),
    };
    let mut ctx = match booted {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "boot aborted");
            let page = write_failure_page(&out, &settings)?;
            return Err(e.context(format!("site data failed to load; wrote {}", page.display())));
        }
    };

    let written = write_site(&mut ctx, &out)?;
    println!("Wrote {} pages to {}", written.len(), out.display());
    Ok(())
}

fn print_route(site: &LoadedSite) {
    let stays = &site.trip.stays;
    let legs = route_legs(stays);

    if legs.is_empty() {
        println!("(fewer than two stays; no route)");
        return;
    }

    println!("{}\n", route_chain(stays, &legs));
    for leg in &legs {
        println!(
            "{:>2} → {:<2} {:>8} km  {} → {}",
            leg.from + 1,
            leg.to + 1,
            format_km(leg.km),
            short_name(&stays[leg.from].name),
            short_name(&stays[leg.to].name)
        );
    }
    let total: f64 = legs.iter().map(|l| l.km).sum();
    println!("\nTotal: {} km", format_km(total));
}

fn print_stay(site: LoadedSite, settings: SiteSettings, ordinal: usize) -> Result<()> {
    if ordinal == 0 {
        bail!("stay ordinals start at 1");
    }
    let mut ctx = SiteContext::new(site, settings)?;
    let page = ctx.render(ordinal - 1)?;
    let p = &page.panels;

    println!("# {}", p.text(Mount::ExploreTitle));
    println!("{}\n", p.text(Mount::AreaMeta));

    println!("## Points of interest");
    let pois = ctx.trip().pois_for(&ctx.trip().stays[ctx.selected()].key);
    if pois.is_empty() {
        println!("(none)");
    }
    for poi in pois {
        println!("- {} <{}>", poi.name, poi.map_link);
    }

    println!("\n## Light");
    println!("{}", p.text(Mount::LightBox));

    println!("\n## Gallery");
    let images = ctx.trip().images_for(&ctx.trip().stays[ctx.selected()].key);
    if images.is_empty() {
        println!("(none)");
    }
    for img in images {
        let tooltip = img.tooltip();
        if tooltip.is_empty() {
            println!("- {}", img.link_target());
        } else {
            println!("- {} ({})", img.link_target(), tooltip);
        }
    }
    Ok(())
}

fn print_budget(rows: &[LedgerRow], settings: &SiteSettings) {
    let panels = budget_panels(Some(rows), settings);
    println!("{}\n", panels.text(Mount::BudgetTotals));

    println!(
        "{:<12} {:<14} {:<32} {:>12} {:<4}",
        "Date", "Category", "Description", "Amount", "Cur"
    );
    for row in rows {
        let [date, category, description, amount, currency] = COLUMNS.map(|c| row.field(c));
        println!(
            "{:<12} {:<14} {:<32} {:>12} {:<4}",
            date, category, description, amount, currency
        );
    }
}
