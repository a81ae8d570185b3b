//! AutoIMS console CLI driver
//!
//! Logs in (or reuses the persisted session), then walks the data screens
//! through their controllers and prints a summary. Rendering proper lives in
//! the host shell; this binary exists to drive the same view layer from a
//! terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use validator::Validate;

use autoims_client::{ClientConfig, FileTokenStore, LoginRequest, Session};
use autoims_console::{
    BillingView, DashboardView, EmployeeView, InventoryView, LoggingNavigator, ServiceRequestView,
    SessionGuard,
};

#[derive(Debug, Parser)]
#[command(name = "autoims-console", about = "AutoIMS administrative console")]
struct Args {
    /// Backend base URL
    #[arg(long, env = "AUTOIMS_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    /// Directory holding the persisted session token
    #[arg(long, env = "AUTOIMS_SESSION_DIR", default_value = ".autoims")]
    session_dir: PathBuf,

    /// Login username (omit to reuse a stored session)
    #[arg(long, env = "AUTOIMS_USERNAME")]
    username: Option<String>,

    /// Login password
    #[arg(long, env = "AUTOIMS_PASSWORD")]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = ClientConfig::new(&args.api_url);
    let http = config.build_http_client();
    let session = Session::new(FileTokenStore::new(&args.session_dir));

    if session.valid_token().is_none() {
        let (Some(username), Some(password)) = (args.username.clone(), args.password.clone())
        else {
            anyhow::bail!("no stored session; pass --username and --password to log in");
        };

        let request = LoginRequest { username, password };
        request.validate().context("invalid credentials")?;

        let issued = http.login(&request).await.context("login failed")?;
        session
            .set_token(&issued.token)
            .context("failed to persist session token")?;
        tracing::info!("logged in, session persisted");
    } else {
        tracing::info!("reusing stored session");
    }

    let guard = Arc::new(SessionGuard::new(session, Arc::new(LoggingNavigator)));

    let mut dashboard = DashboardView::new(http.clone(), guard.clone());
    dashboard.fetch().await;
    match (&dashboard.stats, dashboard.error()) {
        (Some(stats), _) => {
            println!("AutoIMS dashboard");
            println!("  customers:        {}", stats.customers_count);
            println!("  vehicles:         {}", stats.vehicles_count);
            println!("  pending requests: {}", stats.pending_requests);
            println!("  active jobs:      {}", stats.active_jobs);
            println!("  low stock items:  {}", stats.low_stock_items);
            println!("  unpaid total:     {}", stats.unpaid_total);
            println!("  total revenue:    {}", stats.total_revenue);
            for (rank, top) in stats.top_employees.iter().enumerate() {
                println!(
                    "  #{} {} ({}) - {} jobs, rating {}",
                    rank + 1,
                    top.name,
                    top.position,
                    top.jobs_done,
                    top.rating
                );
            }
        }
        (None, Some(error)) => println!("dashboard unavailable: {error}"),
        (None, None) => println!("dashboard unavailable: session expired, log in again"),
    }

    let mut employees = EmployeeView::new(http.clone(), guard.clone());
    employees.load().await;
    print_screen("employees", employees.list.len(), employees.list.error());

    let mut inventory = InventoryView::new(http.clone(), guard.clone());
    inventory.load().await;
    print_screen("inventory", inventory.list.len(), inventory.list.error());

    let mut requests = ServiceRequestView::new(http.clone(), guard.clone());
    requests.load().await;
    print_screen("service requests", requests.list.len(), requests.list.error());

    let mut billing = BillingView::new(http.clone(), guard.clone());
    billing.load().await;
    billing.load_pending_jobs().await;
    print_screen("bills", billing.bills.len(), billing.bills.error());
    println!("  jobs awaiting billing: {}", billing.pending_jobs.len());

    Ok(())
}

fn print_screen(label: &str, count: usize, error: Option<&str>) {
    match error {
        Some(error) => println!("{label}: fetch failed: {error}"),
        None => println!("{label}: {count} records"),
    }
}
