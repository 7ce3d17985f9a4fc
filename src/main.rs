use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use sales_analyzer::application::service::SalesService;
use sales_analyzer::domain::ports::DatasetStoreBox;
use sales_analyzer::infrastructure::in_memory::InMemoryDatasetStore;
use sales_analyzer::interfaces::response::{MonthlySalesResponse, TopProductsResponse};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter for diagnostics on stderr (e.g. `info`, `sales_analyzer=debug`)
    #[arg(long, global = true, env = "SALES_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Total sales (price x quantity) for one month of one year
    MonthlySales {
        /// Input sales file (.csv or .xlsx)
        input: PathBuf,

        /// Month, 1 to 12
        #[arg(long)]
        month: Option<u32>,

        /// Four-digit year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Best-selling products by revenue
    TopProducts {
        /// Input sales file (.csv or .xlsx)
        input: PathBuf,

        /// Number of products to list
        #[arg(short, long)]
        n: Option<usize>,
    },
}

fn init_tracing(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives).into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let store: DatasetStoreBox = Box::new(InMemoryDatasetStore::new());
    let service = SalesService::new(store);

    let body = match cli.command {
        Command::MonthlySales { input, month, year } => {
            service.upload(&input).await?;
            let monthly_sales = service.monthly_sales(month, year).await?;
            serde_json::to_string(&MonthlySalesResponse { monthly_sales })
        }
        Command::TopProducts { input, n } => {
            service.upload(&input).await?;
            let top_products = service.top_products(n).await?;
            serde_json::to_string(&TopProductsResponse { top_products })
        }
    }
    .into_diagnostic()?;

    println!("{}", body);
    Ok(())
}
