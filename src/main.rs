use clap::{Parser, Subcommand};
use itemdex::{catalog, config, output, pages, sitemap};
use std::path::PathBuf;

/// Shared flags for commands that write item pages.
#[derive(clap::Args, Clone)]
struct CleanArgs {
    /// Remove the items output directory before regenerating, so pages for
    /// items no longer in the catalog do not linger
    #[arg(long)]
    clean: bool,
}

#[derive(Parser)]
#[command(name = "itemdex")]
#[command(about = "Static page generator for item-database sites")]
#[command(long_about = "\
Static page generator for item-database sites

Your catalog is the data source: a JSON array of item records, each an
arbitrary set of named fields. The only interpreted field is \"Name\"
(items without one fall back to the literal \"item\").

  data.json:
  [
    { \"Name\": \"Scrap Metal\", \"Rarity\": \"Common\", \"Sell\": 40 },
    { \"Name\": \"Pulse Rifle Mk.II\", \"Rarity\": \"Epic\" }
  ]

Outputs, fully regenerated on every run:

  public/items/scrap-metal/index.html     one page per item
  public/items/pulse-rifle-mk-ii/index.html
  public/sitemap.xml                      static routes + all item pages

Both passes derive slugs identically, so page URLs and sitemap URLs
always agree. Run 'itemdex gen-config' for a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Catalog data file
    #[arg(long, default_value = "public/data.json", global = true)]
    data: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public", global = true)]
    output: PathBuf,

    /// Site config file (stock defaults apply when absent)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one HTML page per catalog item
    Pages(CleanArgs),
    /// Generate sitemap.xml from static routes and catalog items
    Sitemap,
    /// Run both passes: pages, then sitemap
    Build(CleanArgs),
    /// Validate config and catalog, report slug collisions, write nothing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Pages(clean_args) => {
            let config = config::load_config(&cli.config)?;
            let items = catalog::load_catalog(&cli.data)?;
            if clean_args.clean {
                pages::clean_items_dir(&cli.output)?;
            }
            let report = pages::generate_pages(&items, &config, &cli.output)?;
            output::print_pages_output(&report, &cli.output);
        }
        Command::Sitemap => {
            let config = config::load_config(&cli.config)?;
            let items = catalog::load_catalog(&cli.data)?;
            let sitemap_path = cli.output.join("sitemap.xml");
            let report = sitemap::generate_sitemap(&items, &config, &sitemap_path)?;
            output::print_sitemap_output(&report, &sitemap_path);
        }
        Command::Build(clean_args) => {
            let config = config::load_config(&cli.config)?;
            let items = catalog::load_catalog(&cli.data)?;

            println!("==> Pass 1: Item pages → {}", cli.output.display());
            if clean_args.clean {
                pages::clean_items_dir(&cli.output)?;
            }
            let page_report = pages::generate_pages(&items, &config, &cli.output)?;
            output::print_pages_output(&page_report, &cli.output);

            let sitemap_path = cli.output.join("sitemap.xml");
            println!("==> Pass 2: Sitemap → {}", sitemap_path.display());
            let sitemap_report = sitemap::generate_sitemap(&items, &config, &sitemap_path)?;
            output::print_sitemap_output(&sitemap_report, &sitemap_path);

            println!("==> Build complete");
        }
        Command::Check => {
            config::load_config(&cli.config)?;
            let items = catalog::load_catalog(&cli.data)?;
            let collisions = catalog::slug_collisions(&items);
            output::print_check_output(items.len(), &collisions);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
