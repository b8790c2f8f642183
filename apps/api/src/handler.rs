//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//! ハンドラは薄く保ち、集約処理は [`usecase`](crate::usecase) に委譲する。

pub mod health;

pub use health::{HealthState, health_check};
