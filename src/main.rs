//! Holonet - 星战参考数据与收藏 API

use std::sync::Arc;

use holonet::config::{load_config, print_config};
use holonet::domain::UserId;
use holonet::infrastructure::http::{AppState, HttpServer, ServerConfig};
use holonet::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteFavoriteRepository,
    SqlitePersonRepository, SqlitePlanetRepository, SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：DATABASE_URL/PORT > HOLONET_* > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},holonet={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Holonet API");
    print_config(&config);

    // 确保数据库目录存在
    if let Some(parent) = config
        .database
        .sqlite_file_path()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
    {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig::new(&config.database.url, config.database.max_connections);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let person_repo = Arc::new(SqlitePersonRepository::new(pool.clone()));
    let planet_repo = Arc::new(SqlitePlanetRepository::new(pool.clone()));
    let favorite_repo = Arc::new(SqliteFavoriteRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        user_repo,
        person_repo,
        planet_repo,
        favorite_repo,
        UserId::new(config.auth.default_user_id),
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
