use grocery_billing::{
    config::{self, catalog},
    core::catalog::Catalog,
    errors::Result,
    register::{self, Register},
};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they do not interleave with the register on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let catalog_config = catalog::load_default_config()
        .inspect_err(|e| error!("Failed to load catalog configuration: {e}"))?;
    let catalog = Catalog::from_config(&catalog_config)
        .inspect_err(|e| error!("Invalid catalog configuration: {e}"))?;
    info!("Catalog loaded with {} items", catalog.len());

    let database_url = config::database::get_database_url()?;
    let db = config::database::init_db(&database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    let mut register = Register::new(catalog, db);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    register::run(&mut register, stdin, &mut stdout).await?;

    register.into_store().close().await?;
    info!("Register closed");
    Ok(())
}
