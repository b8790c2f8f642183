//! # Pulse API サーバー
//!
//! 依存サービス（PostgreSQL / Redis）の稼働状態を返すヘルスチェックサービス。
//!
//! ## アーキテクチャ
//!
//! ```text
//! GET /health/ ─▶ handler::health ─▶ usecase::HealthAggregator
//!                                        │ 並行実行（プローブごとにタイムアウト）
//!                                        ├─▶ PostgresProbe ─▶ PostgreSQL
//!                                        └─▶ CacheProbe    ─▶ Redis
//! ```
//!
//! 依存サービスの状態にかかわらず、エンドポイントは常に 200 OK を返す。
//! 全体のステータスはレスポンスボディの `status` で表す。
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーターとミドルウェアの組み立て
//! - [`config`] - アプリケーション設定（環境変数と env ファイルからの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - プローブの集約
//!
//! ## 依存関係
//!
//! - `pulse_domain`: プローブのトレイトと結果モデル
//! - `pulse_infra`: PostgreSQL / Redis のプローブ実装
//! - `pulse_shared`: レスポンス型、トレーシング初期化

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
