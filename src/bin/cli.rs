//! Platebook CLI
//!
//! Command-line interface for Platebook operations:
//! - Build a static copy of the site
//! - List the loaded reviews
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use platebook::config::{generate_default_config, Config};
use platebook::logging::init_logging;
use platebook::page::{export_site, PageController, Site};
use platebook::render::{long_date, star_rating};
use platebook::reviews::load;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "platebook-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build and inspect a Platebook review site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./platebook.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the site root
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every host page into a static directory
    ///
    /// Contact forms post back to their page, and only the `platebook`
    /// server acknowledges those posts. Pages carrying one are listed after
    /// the build.
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },

    /// List the reviews in the review document
    Reviews,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(site) = cli.site {
        config.site.root = site;
    }
    init_logging(&config.logging);

    match cli.command {
        Commands::Build { out } => {
            let site = Site::new(&config.site.root);
            let controller = PageController::from_site_config(&config.site)?;

            let report = export_site(&site, &controller, &out)
                .await
                .with_context(|| format!("Failed to build into {:?}", out))?;
            if report.pages.is_empty() {
                eprintln!("No host pages found in {:?}", site.root());
                std::process::exit(1);
            }

            for page in &report.pages {
                println!("Rendered {}", page);
            }

            println!();
            println!(
                "Built {} pages and {} assets into {:?}",
                report.pages.len(),
                report.assets,
                out
            );

            if !report.server_only.is_empty() {
                eprintln!();
                eprintln!(
                    "Warning: contact forms on {} post back to the page; run `platebook` \
                     to acknowledge submissions",
                    report.server_only.join(", ")
                );
            }
        }

        Commands::Reviews => {
            let controller = PageController::from_site_config(&config.site)?;
            let reviews = load(controller.source()).await;

            match cli.format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&reviews)?);
                }
                _ if reviews.is_empty() => {
                    println!("No reviews loaded from {}", controller.source().describe());
                }
                _ => {
                    println!(
                        "{:<8} {:<24} {:<14} {:<12} {:<8} {}",
                        "ID", "Name", "Category", "Overall", "Return", "Date"
                    );
                    println!("{}", "-".repeat(90));

                    for review in &reviews {
                        println!(
                            "{:<8} {:<24} {:<14} {:<12} {:<8} {}",
                            review.id.to_string(),
                            truncate(&review.name, 24),
                            truncate(&review.category, 14),
                            star_rating(review.ratings.overall),
                            review.would_return.to_string(),
                            long_date(&review.date)
                        );
                    }

                    let images: usize = reviews.iter().map(|r| r.images().len()).sum();
                    println!();
                    println!("{} reviews, {} images", reviews.len(), images);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
