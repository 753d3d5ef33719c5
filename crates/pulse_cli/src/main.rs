use clap::Parser;
use pulse_core::{classify, ArticleFilter, ArticleStore, Category, FacetFilter, Result, Sentiment};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify news articles and browse them by category and sentiment", long_about = None)]
pub struct Cli {
    /// JSON file with raw articles (an array, or an object with an "articles" array). Use - for stdin.
    #[arg(long, short, default_value = "-")]
    input: PathBuf,
    #[arg(long, default_value = "memory")]
    storage: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List articles, most recent first
    List {
        /// Category to show, or All
        #[arg(long, default_value = "All")]
        category: FacetFilter<Category>,
        /// Sentiment to show (positive, negative, neutral), or All
        #[arg(long, default_value = "All")]
        sentiment: FacetFilter<Sentiment>,
        #[arg(long)]
        limit: Option<usize>,
        /// Print classified articles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show article counts per category and sentiment
    Facets {
        #[arg(long)]
        json: bool,
    },
    /// Classify a single title and summary
    Classify {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        summary: String,
    },
}

async fn load_store(storage: &str, input: &Path) -> Result<Arc<dyn ArticleStore>> {
    let store = pulse_storage::create_storage(storage).await?;
    let articles = input::read_articles(input)?;
    store.ingest(articles).await?;
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { title, summary } => {
            println!("{}", render::classification_line(&classify(&title, &summary)));
        }
        Commands::List { category, sentiment, limit, json } => {
            let store = load_store(&cli.storage, &cli.input).await?;
            let filter = ArticleFilter::new(category, sentiment);
            let mut articles = store.query(filter).await?;
            info!("🔎 {} articles match category={} sentiment={}", articles.len(), category, sentiment);
            if let Some(limit) = limit {
                articles.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            } else {
                for article in &articles {
                    println!("{}", render::article_line(article));
                }
            }
        }
        Commands::Facets { json } => {
            let store = load_store(&cli.storage, &cli.input).await?;
            let facets = store.facets().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&facets)?);
            } else {
                print!("{}", render::facet_table(&facets));
            }
        }
    }

    Ok(())
}
