use bastion_backend_api::backend_url::BackendUrl;
use bastion_backend_api::bearer_token::BearerToken;
use bastion_backend_api::get_protected_data::ProtectedResourceFetcher;
use bastion_backend_api::token_provider::SharedToken;
use bastion_init::init;
use clap::Parser;
use tracing::info;
use tracing::warn;

/// Fetch the backend's protected resource and print it as JSON.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Backend base URL. Defaults to $BACKEND_URL, then http://localhost:8000
    #[arg(long)]
    backend_url: Option<String>,

    /// Bearer token issued by the auth server
    #[arg(long, env = "BASTION_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;
    let args = Args::parse();

    let backend_url = match args.backend_url {
        Some(url) => BackendUrl::parse(&url)?,
        None => BackendUrl::from_env()?,
    };
    if args.token.is_none() {
        warn!("No token given, the backend will likely reject the request");
    }
    let tokens = SharedToken::from(args.token.map(BearerToken));

    let fetcher = ProtectedResourceFetcher::new(backend_url, tokens);
    info!("Fetching protected data from {}", fetcher.backend_url());
    let data = fetcher.fetch_protected_data().await?;
    println!("{}", serde_json::to_string_pretty(&data)?);

    Ok(())
}
