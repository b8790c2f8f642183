//! # Pulse インフラ層
//!
//! 外部システム（PostgreSQL, Redis）との接続と、それらに対する
//! ヘルスチェックプローブの具体実装を担当する。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL 接続プールとリクエストスコープのセッション
//! - **キャッシュ接続**: 初回利用時に初期化されるプロセス共有の Redis クライアント
//! - **プローブ実装**: ドメイン層の [`DependencyProbe`](pulse_domain::health::DependencyProbe)
//!   トレイトの実装
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続プールとセッション管理
//! - [`redis`] - Redis クライアント管理
//! - [`probe`] - PostgreSQL / Redis のプローブ
//! - [`error`] - インフラ層エラー定義
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::{sync::Arc, time::Duration};
//!
//! use pulse_infra::{db, probe::{CacheProbe, PostgresProbe}, redis::CacheClient};
//!
//! let pool = db::create_pool("postgres://localhost/app_db", Duration::from_secs(3))?;
//! let cache = Arc::new(CacheClient::open("redis://localhost:6379/0")?);
//!
//! let postgres_probe = PostgresProbe::new(pool);
//! let cache_probe = CacheProbe::new(cache);
//! ```

pub mod db;
pub mod error;
pub mod probe;
pub mod redis;

pub use error::{InfraError, InfraErrorKind};
