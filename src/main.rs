use anyhow::Result;
use folio_core::application::{
    ports::{ClockPort, SlugGeneratorPort, TokenManagerPort},
    services::ApplicationServices,
};
use folio_core::config::AppConfig;
use folio_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    import::ImportRepository,
    user::UserRepository,
};
use folio_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresImportRepository,
        PostgresUserRepository,
    },
    security::token::BiscuitTokenManager,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{
    middleware::rate_limit::RateLimitSettings,
    routes::{RouterOptions, build_router_with},
    state::HttpState,
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
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let import_repo: Arc<dyn ImportRepository> = Arc::new(PostgresImportRepository::new(pool));

    let token_manager: Arc<TokenManagerPort> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        import_repo,
        token_manager,
        clock,
        slugger,
        config.comment_deletion_policy(),
    );
    tracing::info!(
        policy = %config.comment_deletion_policy(),
        "comment deletion policy configured"
    );

    let rate_limit = config.rate_limit_enabled().then(|| RateLimitSettings {
        replenish_interval_ms: config.rate_limit_replenish_ms(),
        burst_size: config.rate_limit_burst(),
    });
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit,
    };
    let app = build_router_with(HttpState::new(services), options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

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
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
