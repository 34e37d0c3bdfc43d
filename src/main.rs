//! Team Manager - 球队与名单管理服务

use std::sync::Arc;

use team_manager::application::TeamRepositoryPort;
use team_manager::config::{load_config, print_config, AppConfig, StorageBackend};
use team_manager::infrastructure::http::{AppState, HttpServer, ServerConfig};
use team_manager::infrastructure::memory::InMemoryTeamRepository;
use team_manager::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteTeamRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Team Manager starting");
    print_config(&config);

    let team_repo = build_team_repository(&config).await?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(team_repo));

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（RUST_LOG 优先于配置文件）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},team_manager={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置创建仓储
async fn build_team_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn TeamRepositoryPort>> {
    match config.database.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will be lost on restart");
            Ok(Arc::new(InMemoryTeamRepository::new()))
        }
        StorageBackend::Sqlite => {
            // 确保数据目录存在
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            Ok(Arc::new(SqliteTeamRepository::new(pool)))
        }
    }
}
