//! # ユースケース
//!
//! - [`health`] - 依存サービスのプローブを集約して [`HealthReport`](pulse_domain::health::HealthReport) を作る

pub mod health;

pub use health::HealthAggregator;
