//! # ヘルスチェックの集約
//!
//! 登録されたプローブをすべて並行に実行し、結果を登録順に並べた
//! [`HealthReport`] を返す。
//!
//! プローブ 1 件ごとにタイムアウトとパニック境界を設けるので、
//! ハングやパニックを起こしたプローブも `healthy = false` として扱われ、
//! 他のプローブの結果やリクエスト全体には影響しない。

use std::{panic::AssertUnwindSafe, sync::Arc, time::Duration};

use futures::{FutureExt, future::join_all};
use pulse_domain::{
    DomainError,
    health::{DependencyProbe, HealthReport, ProbeName, ProbeResult},
};

/// プローブの集約を行うユースケース
///
/// 構築後は不変で、`run(&self)` は複数のリクエストから並行に呼び出してよい。
pub struct HealthAggregator {
    probe_timeout: Duration,
    probes:        Vec<(ProbeName, Arc<dyn DependencyProbe>)>,
}

impl HealthAggregator {
    pub fn new(probe_timeout: Duration) -> Self {
        Self {
            probe_timeout,
            probes: Vec::new(),
        }
    }

    /// プローブを登録する
    ///
    /// 名前が空、予約済み（`"status"`）、または登録済みの名前と重複する場合は
    /// エラーを返す。
    pub fn register(
        &mut self,
        name: impl Into<String>,
        probe: Arc<dyn DependencyProbe>,
    ) -> Result<(), DomainError> {
        let name = ProbeName::new(name)?;
        if self.probes.iter().any(|(registered, _)| registered == &name) {
            return Err(DomainError::DuplicateProbeName(name.to_string()));
        }

        self.probes.push((name, probe));
        Ok(())
    }

    /// 登録済みのプローブ名（登録順）
    pub fn registered_names(&self) -> Vec<&str> {
        self.probes.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// すべてのプローブを 1 回ずつ実行して集約結果を返す
    pub async fn run(&self) -> HealthReport {
        let checks = self
            .probes
            .iter()
            .map(|(name, probe)| self.run_probe(name, probe.as_ref()));
        let report = HealthReport::from_results(join_all(checks).await);

        let summary = report
            .results()
            .iter()
            .map(|r| format!("{}={}", r.name(), if r.is_healthy() { "ok" } else { "fail" }))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(status = %report.overall(), checks = %summary, "health check completed");

        report
    }

    async fn run_probe(&self, name: &ProbeName, probe: &dyn DependencyProbe) -> ProbeResult {
        let guarded = AssertUnwindSafe(probe.check()).catch_unwind();

        let healthy = match tokio::time::timeout(self.probe_timeout, guarded).await {
            Ok(Ok(healthy)) => healthy,
            Ok(Err(_)) => {
                tracing::error!(probe = %name, "health check: probe panicked");
                false
            }
            Err(_) => {
                tracing::warn!(
                    probe = %name,
                    timeout = ?self.probe_timeout,
                    "health check: probe timed out"
                );
                false
            }
        };

        ProbeResult::new(name.clone(), healthy)
    }
}
