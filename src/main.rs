//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::show::Format;
use folio::content::{Language, ListOptions};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Serve bilingual markdown articles for a portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides folio.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides folio.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List published articles, tags or categories
    List {
        /// Type of content to list (article, tag, category)
        #[arg(default_value = "article")]
        r#type: String,

        /// Put featured articles first
        #[arg(long)]
        featured: bool,

        /// Only articles in this category
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of articles
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one article
    Show {
        slug: String,

        /// Language to show (ko, en)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Render the body to HTML
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the API payload
        #[arg(long)]
        json: bool,
    },

    /// Show what is in the content directories
    Files,

    /// Create a new article file
    New {
        /// Title of the new article
        title: String,

        /// Slug (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Language of the file (ko, en)
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Serve { port, ip } => {
            let app = folio::Folio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| app.config.server.ip.clone());
            let port = port.unwrap_or(app.config.server.port);

            tracing::info!("Serving articles from {:?}", app.articles_dir);
            folio::server::start(app, &ip, port).await?;
        }

        Commands::List {
            r#type,
            featured,
            category,
            limit,
        } => {
            let app = folio::Folio::new(&base_dir)?;
            let options = ListOptions {
                featured_first: featured,
                category,
                limit,
            };
            folio::commands::list::run(&app, &r#type, &options)?;
        }

        Commands::Show {
            slug,
            lang,
            html,
            json,
        } => {
            let app = folio::Folio::new(&base_dir)?;
            let format = if json {
                Format::Json
            } else if html {
                Format::Html
            } else {
                Format::Text
            };
            folio::commands::show::run(&app, &slug, lang, format)?;
        }

        Commands::Files => {
            let app = folio::Folio::new(&base_dir)?;
            folio::commands::files::run(&app)?;
        }

        Commands::New { title, slug, lang } => {
            let app = folio::Folio::new(&base_dir)?;
            tracing::info!("Creating new article with title: {}", title);
            folio::commands::new::run(&app, &title, slug.as_deref(), lang)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
