//! # ドメイン層エラー定義
//!
//! プローブ登録時のルール違反を表現するエラー型。
//!
//! ヘルスチェックの実行時にはエラーを発生させない（失敗はすべて
//! `healthy = false` に変換される）ため、ここに並ぶのは起動時に検出される
//! 設定ミスのみである。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// プローブ名が空
    ///
    /// 前後の空白を除いた結果が空文字列になる名前は受け付けない。
    #[error("プローブ名が空です")]
    EmptyProbeName,

    /// プローブ名の重複
    ///
    /// レスポンスのキーとして使うため、同じ名前のプローブは 2 つ登録できない。
    #[error("プローブ名が重複しています: {0}")]
    DuplicateProbeName(String),

    /// 予約済みのプローブ名
    ///
    /// レスポンスでは全体ステータスと同じ階層にキーとして並ぶため、
    /// `"status"` はプローブ名に使えない。
    #[error("プローブ名は予約されています: {0}")]
    ReservedProbeName(String),
}
