use clap::{Parser, Subcommand};
use tracing::{error, info};

use review_search::demos;
use review_search::{Dependencies, Settings};
use review_search_repository::SearchEngineClient;
use review_search_shared::Review;

#[derive(Parser)]
#[command(name = "review-search")]
#[command(about = "Demo operations against a review search index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// OpenSearch URL (overrides OPENSEARCH_URL)
    #[arg(long, global = true)]
    opensearch_url: Option<String>,

    /// Index name (overrides REVIEW_INDEX)
    #[arg(long, global = true)]
    index: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the review index
    CreateIndex,
    /// Index the sample review
    Index,
    /// Fetch a document by id
    Get {
        #[arg(default_value = demos::DEMO_DOCUMENT_ID)]
        id: String,
    },
    /// List every document
    Search,
    /// Search documents containing a phrase
    SearchPhrase {
        #[arg(default_value = demos::DEMO_PHRASE)]
        phrase: String,
        #[arg(long, default_value = demos::DEMO_PHRASE_FIELD)]
        field: String,
    },
    /// Average a numeric field across all documents
    Average {
        #[arg(default_value = demos::DEMO_AVERAGE_FIELD)]
        field: String,
    },
    /// Update the sample review from a typed value
    Update,
    /// Update the sample review from a raw JSON body
    UpdateRaw,
    /// Check cluster health
    Health,
    /// Run every demo in order
    All,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let settings =
        Settings::from_env().with_overrides(cli.opensearch_url.clone(), cli.index.clone());

    let deps = match Dependencies::new(&settings) {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize");
            std::process::exit(1);
        }
    };

    let client: &dyn SearchEngineClient = &deps.client;
    let index = deps.index_name.as_str();

    match cli.command {
        Commands::CreateIndex => {
            demos::create_index(client, index).await;
        }
        Commands::Index => {
            demos::index_document(client, index, &Review::sample()).await;
        }
        Commands::Get { id } => {
            demos::get_document_by_id(client, index, &id).await;
        }
        Commands::Search => {
            demos::search_all(client, index).await;
        }
        Commands::SearchPhrase { phrase, field } => {
            demos::search_phrase(client, index, &field, &phrase).await;
        }
        Commands::Average { field } => {
            demos::average(client, index, &field).await;
        }
        Commands::Update => {
            demos::update_document(
                client,
                index,
                demos::DEMO_DOCUMENT_ID,
                &Review::sample_revision(),
            )
            .await;
        }
        Commands::UpdateRaw => {
            demos::update_document_raw(
                client,
                index,
                demos::DEMO_DOCUMENT_ID,
                demos::RAW_UPDATE_DOCUMENT,
            )
            .await;
        }
        Commands::Health => match client.health_check().await {
            Ok(healthy) => println!("healthy: {}", healthy),
            Err(e) => error!(error = %e, "Health check failed"),
        },
        Commands::All => {
            let failed = demos::run_all(client, index).await;
            info!(failed = failed, "Demo run finished");
        }
    }
}
