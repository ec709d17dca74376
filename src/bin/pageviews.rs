//! Command-line client for Wikipedia pageview queries.
//!
//! Runs the same queries as the HTTP service directly against the upstream
//! API, without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Most viewed articles over a range
//! cargo run --bin pageviews -- top --start 20240101 --end 20240107 --limit 20
//!
//! # Total views for one article
//! cargo run --bin pageviews -- views --article Cat --start 20240101 --end 20240131
//!
//! # Peak day of an article within a month
//! cargo run --bin pageviews -- peak-day --article Cat --year 2024 --month 03
//! ```
//!
//! # Environment Variables
//!
//! Honors the same upstream settings as the server: `PAGEVIEWS_API_BASE_URL`,
//! `PAGEVIEWS_USER_AGENT`, `UPSTREAM_TIMEOUT_SECS`, `FETCH_CONCURRENCY`,
//! `MAX_RANGE_DAYS`.

use wiki_pageviews::api::dto::pageviews::{
    ArticleMostViewedDayQuery, ArticleViewCountQuery, MostViewedArticlesQuery,
};
use wiki_pageviews::config::{self, Config};
use wiki_pageviews::server::build_state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for querying Wikipedia pageviews.
#[derive(Parser)]
#[command(name = "pageviews")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the most viewed articles over a date range
    Top {
        /// First day, YYYYMMDD
        #[arg(short, long)]
        start: String,

        /// Last day, YYYYMMDD (inclusive)
        #[arg(short, long)]
        end: String,

        /// Number of articles to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show total views of one article over a date range
    Views {
        /// Article title as it appears upstream, e.g. Main_Page
        #[arg(short, long)]
        article: String,

        /// First day, YYYYMMDD
        #[arg(short, long)]
        start: String,

        /// Last day, YYYYMMDD (inclusive)
        #[arg(short, long)]
        end: String,
    },

    /// Find the day of a month when an article peaked
    PeakDay {
        /// Article title as it appears upstream
        #[arg(short, long)]
        article: String,

        /// Year, YYYY
        #[arg(short, long)]
        year: String,

        /// Month, MM
        #[arg(short, long)]
        month: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    let state = build_state(config)?;
    let service = state.pageview_service;

    match command {
        Commands::Top { start, end, limit } => {
            let (start, end) = MostViewedArticlesQuery {
                start_date: Some(start),
                end_date: Some(end),
            }
            .into_range()?;

            let articles = service.most_viewed_articles(start, end).await?;

            println!(
                "{} {} → {}",
                "Most viewed articles".bold(),
                start.to_upstream_path(),
                end.to_upstream_path()
            );

            if articles.is_empty() {
                println!("{}", "No data for this range".yellow());
                return Ok(());
            }

            for (i, (title, views)) in articles.iter().take(limit).enumerate() {
                println!("{:>4}. {:<50} {}", i + 1, title, views.to_string().cyan());
            }
        }

        Commands::Views {
            article,
            start,
            end,
        } => {
            let (article, start, end) = ArticleViewCountQuery {
                article_title: Some(article),
                start_date: Some(start),
                end_date: Some(end),
            }
            .into_parts()?;

            let views = service.article_view_count(&article, start, end).await?;

            println!("{}: {}", article.bold(), views.to_string().cyan());
        }

        Commands::PeakDay {
            article,
            year,
            month,
        } => {
            let (article, year, month) = ArticleMostViewedDayQuery {
                article_title: Some(article),
                year: Some(year),
                month: Some(month),
            }
            .into_parts()?;

            let peak = service.article_most_viewed_day(&article, year, month).await?;

            match peak.date {
                Some(date) => println!(
                    "{} peaked on {} with {} views",
                    article.bold(),
                    date.to_upstream_path().green(),
                    peak.views.to_string().cyan()
                ),
                None => println!(
                    "{} {} {:04}/{:02}",
                    article.bold(),
                    "did not appear in the top articles during".yellow(),
                    year,
                    month
                ),
            }
        }
    }

    Ok(())
}
