//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントのレスポンス型を提供する。
//!
//! レスポンスはフラットな JSON オブジェクトで、先頭に `status`、
//! 続いて登録順に依存サービスごとのキーが並ぶ。
//!
//! ```json
//! { "status": "degraded", "postgres": "fail", "redis": "ok" }
//! ```

use serde::{Serialize, Serializer, ser::SerializeMap};

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// チェック成功
    Ok,
    /// チェック失敗
    Fail,
}

impl From<bool> for CheckStatus {
    fn from(healthy: bool) -> Self {
        if healthy { Self::Ok } else { Self::Fail }
    }
}

/// サービス全体のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// 全依存サービスが利用可能
    Ok,
    /// 一部の依存サービスが利用不可
    Degraded,
}

/// ヘルスチェックレスポンス
///
/// `checks` はキーの出現順を保つため `Vec` で保持する。
///
/// ## 使用例
///
/// ```
/// use pulse_shared::{CheckStatus, HealthResponse, ServiceStatus};
///
/// let response = HealthResponse::new(ServiceStatus::Degraded)
///     .with_check("postgres", CheckStatus::Fail)
///     .with_check("redis", CheckStatus::Ok);
///
/// assert_eq!(response.status(), ServiceStatus::Degraded);
/// assert_eq!(response.checks().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    status: ServiceStatus,
    checks: Vec<(String, CheckStatus)>,
}

impl HealthResponse {
    pub fn new(status: ServiceStatus) -> Self {
        Self {
            status,
            checks: Vec::new(),
        }
    }

    /// チェック結果を末尾に追加する
    pub fn with_check(mut self, name: impl Into<String>, status: CheckStatus) -> Self {
        self.checks.push((name.into(), status));
        self
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    pub fn checks(&self) -> &[(String, CheckStatus)] {
        &self.checks
    }
}

impl Serialize for HealthResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.checks.len() + 1))?;
        map.serialize_entry("status", &self.status)?;
        for (name, status) in &self.checks {
            map.serialize_entry(name, status)?;
        }
        map.end()
    }
}
