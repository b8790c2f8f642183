//! # Pulse 共有ユーティリティ
//!
//! このクレートは、Pulse プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - HTTP レスポンスの形状（ワイヤーフォーマット）はここで固定する
//! - トレーシング初期化は `observability` feature でのみ有効になる

pub mod health;
pub mod observability;

pub use health::{CheckStatus, HealthResponse, ServiceStatus};
