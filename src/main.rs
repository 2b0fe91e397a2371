//! Bookshelf - 内存图书资源 API

use std::sync::Arc;

use bookshelf::application::BookRepositoryPort;
use bookshelf::config::{load_config, print_config};
use bookshelf::infrastructure::http::{AppState, HttpServer};
use bookshelf::infrastructure::memory::InMemoryBookStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},bookshelf={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Bookshelf - in-memory book API");
    print_config(&config);

    // 创建图书存储
    let store = if config.store.seed {
        InMemoryBookStore::seeded(config.store.id_strategy)
    } else {
        InMemoryBookStore::new(config.store.id_strategy)
    };
    let id_strategy = store.id_strategy();
    let book_repo: Arc<dyn BookRepositoryPort> = Arc::new(store);
    tracing::info!(
        books = book_repo.len().await,
        id_strategy = id_strategy.as_str(),
        "Book store ready"
    );

    let server = HttpServer::new(config.server.addr(), AppState::new(book_repo));

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
