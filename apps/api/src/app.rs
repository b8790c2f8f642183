//! # ルーター構築
//!
//! `main` と統合テストで同じルーターを使うため、組み立てをここに集約する。

use std::sync::Arc;

use axum::{Router, routing::get};
use pulse_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    error::ApiError,
    handler::{HealthState, health_check},
};

/// アプリケーションのルーターを構築する
///
/// レイヤーは下に書いたものが外側になる:
///
/// 1. `SetRequestIdLayer`: `X-Request-Id` がなければ UUID v7 を生成する
/// 2. `TraceLayer`: リクエスト ID 付きのスパンを作る
/// 3. `PropagateRequestIdLayer`: レスポンスに `X-Request-Id` をコピーする
pub fn build_app(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/", get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
