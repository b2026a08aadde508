use anyhow::Result;
use blogsmith::{
    application::{
        ports::{ClockPort, DigitSourcePort, FileStoragePort, PasswordHasherPort, SlugGeneratorPort},
        services::{ApplicationServices, Ports},
    },
    config::AppConfig,
    infrastructure::{
        database,
        repositories::sqlite_repositories,
        security::password::Argon2PasswordHasher,
        storage::LocalFileStorage,
        time::SystemClock,
        util::{DefaultSlugGenerator, RandomDigitSource},
    },
    presentation::http::{routes::build_router_with_options, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher::new()?);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let digits: Arc<DigitSourcePort> = Arc::new(RandomDigitSource);
    let storage: Arc<FileStoragePort> = Arc::new(LocalFileStorage::new(
        config.media_root(),
        config.media_url(),
    ));

    let services = Arc::new(ApplicationServices::new(
        sqlite_repositories(&pool),
        Ports {
            password_hasher,
            clock,
            slugger,
            digits,
            storage,
        },
    ));

    let state = HttpState {
        services,
        db_pool: pool.clone(),
    };

    let app = build_router_with_options(
        state,
        config.rate_limit_enabled(),
        config.allowed_origins(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
