//! # ヘルスチェックハンドラ
//!
//! 依存サービスの稼働状態を返すエンドポイント。
//!
//! ```text
//! GET /health/
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! { "status": "degraded", "postgres": "fail", "redis": "ok" }
//! ```
//!
//! 依存サービスが利用できない場合も常に 200 OK を返す。

use std::sync::Arc;

use axum::{Json, extract::State};
use pulse_domain::health::{HealthReport, HealthStatus};
use pulse_shared::{CheckStatus, HealthResponse, ServiceStatus};

use crate::usecase::HealthAggregator;

/// ヘルスチェック用の State
pub struct HealthState {
    pub aggregator: HealthAggregator,
}

/// ヘルスチェックエンドポイント
#[tracing::instrument(skip_all)]
pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
    tracing::info!("health check requested");

    let report = state.aggregator.run().await;
    Json(to_response(&report))
}

fn to_response(report: &HealthReport) -> HealthResponse {
    let status = match report.overall() {
        HealthStatus::Ok => ServiceStatus::Ok,
        HealthStatus::Degraded => ServiceStatus::Degraded,
    };

    report
        .results()
        .iter()
        .fold(HealthResponse::new(status), |response, result| {
            response.with_check(result.name().as_str(), CheckStatus::from(result.is_healthy()))
        })
}
