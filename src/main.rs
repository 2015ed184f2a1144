use clap::Parser;
use trivia_api::db::Db;
use trivia_api::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Database URL. `file:` URLs open a local SQLite database,
    /// anything else is treated as a remote libSQL server address.
    #[clap(env)]
    url: String,

    /// Authentication token for remote databases.
    #[arg(long, env, default_value = "")]
    auth_token: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,trivia_api=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(args.url, args.auth_token).await?;
    let app = trivia_api::router(AppState { db });

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
