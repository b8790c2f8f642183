//! # 依存サービスのプローブ
//!
//! ドメイン層の [`DependencyProbe`](pulse_domain::health::DependencyProbe) を
//! 実装する具体的なプローブ。
//!
//! ## モジュール構成
//!
//! ```text
//! probe.rs            # 親モジュール（re-export）
//! └── probe/
//!     ├── postgres.rs # SELECT 1 による疎通確認
//!     └── cache.rs    # PING による疎通確認
//! ```
//!
//! どちらのプローブも 1 回の呼び出しで 1 回だけ試行し、リトライしない。
//! 失敗は [`InfraError`](crate::InfraError) として内部で扱い、WARN ログを
//! 出力したうえで `false` を返す。

mod cache;
mod postgres;

pub use cache::CacheProbe;
pub use postgres::PostgresProbe;
