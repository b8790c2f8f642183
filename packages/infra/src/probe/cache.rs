//! # Redis プローブ
//!
//! 共有の Redis クライアントで `PING` を送り、肯定的な応答（`PONG`）が
//! 返るかを確認する。

use std::sync::Arc;

use async_trait::async_trait;
use pulse_domain::health::DependencyProbe;

use crate::{InfraError, redis::CacheClient};

/// Redis の疎通確認を行うプローブ
///
/// クライアントは [`CacheClient`] として外部から注入する。
/// 最初の確認でクライアントの接続が初期化される。
#[derive(Clone)]
pub struct CacheProbe {
    client: Arc<CacheClient>,
}

impl CacheProbe {
    pub fn new(client: Arc<CacheClient>) -> Self {
        Self { client }
    }

    /// `PING` を送り、応答が `PONG` であることを確認する
    #[tracing::instrument(skip_all, name = "cache_probe")]
    async fn ping(&self) -> Result<(), InfraError> {
        let mut conn = self.client.connection().await?;
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        if is_affirmative(&reply) {
            Ok(())
        } else {
            Err(InfraError::unexpected_reply(reply))
        }
    }
}

#[async_trait]
impl DependencyProbe for CacheProbe {
    async fn check(&self) -> bool {
        tracing::debug!("pinging redis");
        match self.ping().await {
            Ok(()) => {
                tracing::debug!("redis responded to PING");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, span_trace = %e.span_trace(), "health check: redis ping failed");
                false
            }
        }
    }
}

/// PING への応答が肯定的かどうか
fn is_affirmative(reply: &str) -> bool {
    reply.trim().eq_ignore_ascii_case("PONG")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("PONG", true)]
    #[case("pong", true)]
    #[case(" PONG\r\n", true)]
    #[case("", false)]
    #[case("0", false)]
    #[case("LOADING", false)]
    #[case("PONGX", false)]
    fn test_is_affirmativeはpongのみを肯定と判定する(#[case] reply: &str, #[case] expected: bool) {
        assert_eq!(is_affirmative(reply), expected);
    }
}
