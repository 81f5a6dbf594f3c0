use std::time::Duration;

use clap::Parser;
use quizgen::{
    generator::HttpGenerator, services::quiz::QuizService, session::SessionStore, AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the question generation backend.
    #[arg(long, env, default_value = "http://localhost:5001")]
    generator_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Mark cookies `Secure` (serve over HTTPS).
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,

    /// Seconds to wait for the backend before a generation request fails.
    #[arg(long, env, default_value_t = 120)]
    request_timeout_secs: u64,

    /// Largest accepted document upload, in bytes.
    #[arg(long, env, default_value_t = 10 * 1024 * 1024)]
    max_upload_bytes: usize,
}

/// Quiz sessions idle for longer than this are dropped.
const SESSION_IDLE_TTL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,quizgen=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let generator = HttpGenerator::new(
        &args.generator_url,
        Duration::from_secs(args.request_timeout_secs),
    )?;
    tracing::info!("question generator at {}", generator.base_url());

    let state = AppState {
        quiz: QuizService::new(generator),
        sessions: SessionStore::new(SESSION_IDLE_TTL),
        secure_cookies: args.secure_cookies,
        max_upload_bytes: args.max_upload_bytes,
    };

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, quizgen::router(state)).await?;

    Ok(())
}
