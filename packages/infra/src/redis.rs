//! # Redis 接続管理
//!
//! Redis キャッシュサーバーへの接続管理を行う。
//!
//! ## 設計方針
//!
//! - **ConnectionManager**: 自動再接続機能を持つ接続マネージャを使用
//! - **遅延初期化**: [`CacheClient`] は最初に接続が要求された時点で一度だけ
//!   マネージャを作成し、以降は同じマネージャを共有する
//! - **明示的な注入**: グローバル変数ではなく `Arc<CacheClient>` として
//!   必要なコンポーネントに渡す
//!
//! ## ConnectionManager vs Connection
//!
//! | 方式 | 特徴 | 用途 |
//! |------|------|------|
//! | `Connection` | 単一接続、手動管理 | 短期間の処理 |
//! | `ConnectionManager` | 自動再接続、スレッドセーフ | 長期稼働アプリ |
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use pulse_infra::redis::CacheClient;
//!
//! let cache = Arc::new(CacheClient::open("redis://localhost:6379/0")?);
//!
//! // 初回呼び出しで接続マネージャが作成される
//! let mut conn = cache.connection().await?;
//! let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
//! ```

use redis::{Client, RedisError, aio::ConnectionManager};
use tokio::sync::OnceCell;

/// プロセス全体で共有する Redis クライアント
///
/// URL の検証はアプリケーション起動時（[`CacheClient::open`]）に行い、
/// 接続は初回の [`CacheClient::connection`] 呼び出しまで遅延させる。
///
/// # 初期化の失敗
///
/// 接続マネージャの作成に失敗した場合、その結果はキャッシュされない。
/// 次の呼び出しで再び初期化を試みる。
pub struct CacheClient {
    client:     Client,
    connection: OnceCell<ConnectionManager>,
}

impl CacheClient {
    /// URL から Redis クライアントを作成する
    ///
    /// # 引数
    ///
    /// * `redis_url` - Redis 接続 URL
    ///   - 形式: `redis://[[username:]password@]host[:port][/database]`
    ///   - TLS: `rediss://` スキームで TLS 接続
    ///
    /// # エラー
    ///
    /// URL の形式が不正な場合にエラーを返す。接続は行わない。
    pub fn open(redis_url: &str) -> Result<Self, RedisError> {
        Ok(Self {
            client:     Client::open(redis_url)?,
            connection: OnceCell::new(),
        })
    }

    /// 共有の接続マネージャを取得する
    ///
    /// 初回呼び出し時に接続マネージャを作成する。並行して呼び出された場合も
    /// 作成は一度だけ行われる。返り値は `Clone` で複製したハンドルであり、
    /// 内部の接続は共有される。
    pub async fn connection(&self) -> Result<ConnectionManager, RedisError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                tracing::debug!("Redis クライアントを初期化します");
                ConnectionManager::new(self.client.clone()).await
            })
            .await?;
        Ok(manager.clone())
    }

    /// 接続マネージャが初期化済みかどうか
    pub fn is_initialized(&self) -> bool {
        self.connection.initialized()
    }
}
