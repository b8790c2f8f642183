//! # インフラ層エラー定義
//!
//! プローブが PostgreSQL / Redis と通信する際に発生するエラー。
//!
//! このエラーはプローブの外には出ない。プローブは失敗地点で
//! エラーと [`SpanTrace`] をログに出し、`healthy = false` を返す。
//!
//! [`InfraError`] は種別（[`InfraErrorKind`]）と生成時点の [`SpanTrace`] を組にして持つ。
//! `SpanTrace` にスパン情報が入るのは、subscriber に
//! `tracing_error::ErrorLayer` が登録されている場合のみ。

use std::fmt;

use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Debug)]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 接続取得のタイムアウト、接続拒否、クエリ実行の失敗など
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// クライアントの初期化失敗、コマンド実行エラーなど
    #[error("Redis エラー: {0}")]
    Redis(#[source] redis::RedisError),

    /// コマンドは成功したが、肯定的な応答が返らなかった
    #[error("想定外の応答: {0}")]
    UnexpectedReply(String),
}

impl InfraError {
    fn new(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn unexpected_reply(reply: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::UnexpectedReply(reply.into()))
    }

    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// エラー生成時点のスパン階層
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }
}

impl fmt::Display for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self::new(InfraErrorKind::Database(source))
    }
}

impl From<redis::RedisError> for InfraError {
    fn from(source: redis::RedisError) -> Self {
        Self::new(InfraErrorKind::Redis(source))
    }
}
