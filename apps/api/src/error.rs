//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! エラーレスポンスは RFC 7807 (Problem Details for HTTP APIs) 形式の JSON で返す。
//!
//! ```json
//! {
//!   "type": "about:blank",
//!   "title": "リソースが見つかりません",
//!   "status": 404
//! }
//! ```
//!
//! 依存サービスの障害はこのエラーにはならない。ヘルスチェックは障害時も
//! 200 OK とレスポンスボディで状態を返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 存在しないルート（404 Not Found）
    #[error("リソースが見つかりません")]
    NotFound,
}

/// RFC 7807 準拠のエラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// エラーの種類を識別する URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// エラーの概要
    pub title:      String,
    /// HTTP ステータスコード
    pub status:     u16,
}

impl ErrorResponse {
    fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title:      title.into(),
            status:     status.as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorResponse::new(status, self.to_string()))).into_response()
    }
}
