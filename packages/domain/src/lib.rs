//! # Pulse ドメイン層
//!
//! 依存サービスのヘルスチェックに関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **プローブ契約**: 依存サービスごとの疎通確認を [`health::DependencyProbe`]
//!   トレイトとして抽象化する
//! - **値オブジェクト**: チェック結果（[`health::ProbeResult`]）と集約結果
//!   （[`health::HealthReport`]）は生成後に変更できない
//! - **ドメインエラー**: プローブ登録時のルール違反を表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、Redis）には一切依存しない。
//! 具体的なプローブ実装は `pulse_infra::probe` に置く。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`health`] - プローブ契約とヘルスチェック結果の型
//!
//! ## 使用例
//!
//! ```rust
//! use pulse_domain::health::{HealthReport, HealthStatus, ProbeName, ProbeResult};
//!
//! let results = vec![
//!     ProbeResult::new(ProbeName::new("postgres").unwrap(), true),
//!     ProbeResult::new(ProbeName::new("redis").unwrap(), false),
//! ];
//! let report = HealthReport::from_results(results);
//!
//! assert_eq!(report.overall(), HealthStatus::Degraded);
//! ```

pub mod error;
pub mod health;

pub use error::DomainError;
