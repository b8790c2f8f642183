//! # PostgreSQL プローブ
//!
//! リクエストスコープのセッションで `SELECT 1` を実行し、
//! データベースがクエリを受け付けて完了できるかを確認する。

use async_trait::async_trait;
use pulse_domain::health::DependencyProbe;
use sqlx::PgPool;

use crate::{InfraError, db::DbSession};

/// PostgreSQL の疎通確認を行うプローブ
///
/// プールのハンドルを保持するが、プールのライフサイクルは所有しない。
/// セッションは確認のたびに取得し、確認が終わればプールへ返却する。
#[derive(Clone)]
pub struct PostgresProbe {
    pool: PgPool,
}

impl PostgresProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// セッションを取得して `SELECT 1` を往復させる
    #[tracing::instrument(skip_all, name = "postgres_probe")]
    async fn round_trip(&self) -> Result<(), InfraError> {
        let mut session = DbSession::acquire(&self.pool).await?;
        sqlx::query("SELECT 1").execute(&mut *session).await?;
        Ok(())
    }
}

#[async_trait]
impl DependencyProbe for PostgresProbe {
    async fn check(&self) -> bool {
        tracing::debug!("checking postgres availability");
        match self.round_trip().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, span_trace = %e.span_trace(), "health check: postgres query failed");
                false
            }
        }
    }
}
