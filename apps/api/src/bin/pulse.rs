//! # Pulse サーバー
//!
//! 依存サービスのヘルスチェックエンドポイントを提供する HTTP サーバー。
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run --bin pulse
//! ```
//!
//! 設定項目は [`pulse_api::config`] を参照。
//! PostgreSQL や Redis が起動していなくてもサーバーは起動し、
//! ヘルスチェックで `"fail"` が報告される。

use std::sync::Arc;

use anyhow::Context as _;
use pulse_api::{
    app::build_app,
    config::AppConfig,
    handler::HealthState,
    usecase::HealthAggregator,
};
use pulse_infra::{
    db,
    probe::{CacheProbe, PostgresProbe},
    redis::CacheClient,
};
use pulse_shared::observability::{TracingConfig, init_tracing};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

    let tracing_config = TracingConfig::new(&config.app_name, config.log_format, config.debug);
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    if let Some(path) = &config.env_file {
        tracing::debug!(path = %path.display(), "env ファイルを読み込みました");
    }
    tracing::info!(
        debug = config.debug,
        probe_timeout = ?config.probe_timeout,
        "{} を起動します: {}:{}",
        config.app_name,
        config.host,
        config.port
    );

    // PostgreSQL が停止していても起動できるよう、接続は最初の利用時まで遅延する
    let pool = db::create_pool(&config.database_url, config.probe_timeout)
        .context("DATABASE_URL が不正です")?;
    let cache = Arc::new(CacheClient::open(&config.redis_url).context("REDIS_URL が不正です")?);

    let mut aggregator = HealthAggregator::new(config.probe_timeout);
    aggregator.register("postgres", Arc::new(PostgresProbe::new(pool.clone())))?;
    aggregator.register("redis", Arc::new(CacheProbe::new(cache)))?;

    let app = build_app(Arc::new(HealthState { aggregator }));

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("{}:{} にバインドできません", config.host, config.port))?;
    tracing::info!(addr = %listener.local_addr()?, "application startup complete");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("application shutdown");

    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C ハンドラを登録できません");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラを登録できません");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
