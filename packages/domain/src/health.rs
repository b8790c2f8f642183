//! # ヘルスチェックのドメインモデル
//!
//! 依存サービス（PostgreSQL, Redis など）の疎通確認を表す型を定義する。
//!
//! ## 構成要素
//!
//! | 型 | 役割 |
//! |---|------|
//! | [`DependencyProbe`] | 「正常か？」に真偽値で答える能力（トレイト） |
//! | [`ProbeName`] | プローブの名前（レスポンスのキーになる） |
//! | [`ProbeResult`] | 1 つのプローブの結果 |
//! | [`HealthReport`] | 全プローブの結果と全体ステータス |
//!
//! ## 不変条件
//!
//! - `HealthReport::overall()` が [`HealthStatus::Ok`] になるのは、すべての
//!   結果が `healthy == true` のときに限る
//! - `HealthReport::results()` の順序は渡された順序（＝登録順）のまま保持する。
//!   完了順には依存しない

use std::fmt;

use async_trait::async_trait;

use crate::DomainError;

// =========================================================================
// DependencyProbe
// =========================================================================

/// 依存サービスの疎通確認を行うプローブ
///
/// # 契約
///
/// `check()` は**エラーを呼び出し元に伝播させてはならない**。
/// 接続拒否・タイムアウト・プロトコルエラーなど、あらゆる失敗は実装内部で
/// 捕捉して `false` に変換する。診断情報のログ出力は失敗した地点で行う。
///
/// プローブはバックエンドのクライアント（接続プールなど）を保持するが、
/// そのライフサイクルは所有しない。呼び出しごとの可変状態も持たないため、
/// 1 つのインスタンスを複数リクエストから並行に使ってよい。
///
/// # 実装例
///
/// ```rust
/// use async_trait::async_trait;
/// use pulse_domain::health::DependencyProbe;
///
/// struct AlwaysHealthy;
///
/// #[async_trait]
/// impl DependencyProbe for AlwaysHealthy {
///     async fn check(&self) -> bool {
///         true
///     }
/// }
/// ```
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// 依存サービスが正常に応答するかを確認する
    async fn check(&self) -> bool;
}

// =========================================================================
// ProbeName
// =========================================================================

/// プローブ名（値オブジェクト）
///
/// HTTP レスポンスのキー（`"postgres"`, `"redis"`）としてそのまま使われる。
///
/// # 不変条件
///
/// - 前後の空白を除いて空でないこと
/// - 全体ステータスのキー（[`ProbeName::RESERVED`]）と一致しないこと
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProbeName(String);

impl ProbeName {
    /// レスポンスで全体ステータスが使うキー
    pub const RESERVED: &'static str = "status";

    /// プローブ名を作成する
    ///
    /// 前後の空白は取り除く。
    ///
    /// # エラー
    ///
    /// - 空白除去後に空文字列となる場合は `DomainError::EmptyProbeName`
    /// - 空白除去後に [`ProbeName::RESERVED`] と一致する場合は `DomainError::ReservedProbeName`
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyProbeName);
        }
        if trimmed == Self::RESERVED {
            return Err(DomainError::ReservedProbeName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProbeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =========================================================================
// ProbeResult
// =========================================================================

/// 1 つのプローブの実行結果
///
/// プローブの実行完了時に一度だけ生成され、集約処理で消費される。
/// フィールドは非公開で、生成後に変更する手段はない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    name:    ProbeName,
    healthy: bool,
}

impl ProbeResult {
    pub fn new(name: ProbeName, healthy: bool) -> Self {
        Self { name, healthy }
    }

    pub fn name(&self) -> &ProbeName {
        &self.name
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy
    }
}

// =========================================================================
// HealthStatus / HealthReport
// =========================================================================

/// サービス全体のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// すべての依存サービスが正常
    Ok,
    /// 1 つ以上の依存サービスが異常（サービス自体は応答可能）
    Degraded,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Degraded => "degraded",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ヘルスチェックの集約結果
///
/// [`HealthReport::from_results`] でのみ生成でき、全体ステータスは
/// 個別結果から導出される。重み付けや「必須/任意」の区別はなく、
/// すべてのプローブを同じ重みで扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    overall: HealthStatus,
    results: Vec<ProbeResult>,
}

impl HealthReport {
    /// 個別結果から集約結果を作成する
    ///
    /// 結果の順序はそのまま保持する。空の場合は `Ok` とする。
    pub fn from_results(results: Vec<ProbeResult>) -> Self {
        let overall = if results.iter().all(ProbeResult::is_healthy) {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        };
        Self { overall, results }
    }

    pub fn overall(&self) -> HealthStatus {
        self.overall
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn is_healthy(&self) -> bool {
        self.overall == HealthStatus::Ok
    }

    /// 名前で個別結果を探す
    pub fn result(&self, name: &str) -> Option<&ProbeResult> {
        self.results.iter().find(|r| r.name().as_str() == name)
    }
}
