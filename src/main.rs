use clap::Parser;
use mergington_activities::core::ConfigProvider;
use mergington_activities::utils::{error::ErrorKind, logger, validation::Validate};
use mergington_activities::{serve, ActivityDirectory, AppState, CliArgs};
use tokio::net::TcpListener;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("🛑 Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_logger(args.verbose, args.log_format);

    tracing::info!("🚀 Starting mergington-activities");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入並驗證配置
    let config = match args.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Kind: {:?})", e, e.kind());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let addr = config.socket_addr()?;
    let directory = ActivityDirectory::new(config.seed_activities())
        .with_capacity_enforcement(config.enforce_capacity());

    tracing::info!(
        activities = config.activities.len(),
        enforce_capacity = config.enforce_capacity,
        "📋 Activity directory loaded"
    );

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("❌ Failed to bind {}: {}", addr, e);
            eprintln!("❌ Cannot listen on {}: {}", addr, e);
            std::process::exit(2);
        }
    };
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);

    if let Err(e) = serve(listener, AppState::new(directory), shutdown_signal()).await {
        tracing::error!("❌ Server stopped with error: {}", e);
        let exit_code = match e.kind() {
            ErrorKind::Config => 1,
            _ => 3,
        };
        std::process::exit(exit_code);
    }

    tracing::info!("👋 Server stopped");
    Ok(())
}
