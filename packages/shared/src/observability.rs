//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//!
//! - 出力形式は環境変数 `LOG_FORMAT` で JSON / Pretty を切り替える
//! - ログレベルは `RUST_LOG` が優先され、未設定ならデバッグモードに応じた既定値を使う
//! - HTTP レイヤー用に、リクエスト ID 付きのスパン生成と UUID v7 の ID 生成を提供する

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON（ログ収集基盤向け）
    Json,
    /// 端末向けの人間が読める形式
    #[default]
    Pretty,
}

impl LogFormat {
    /// `json` / `pretty` を大文字小文字を区別せずに解釈する
    ///
    /// それ以外の値は警告を stderr に出して `Pretty` とする。
    /// トレーシング初期化前に呼ばれるため `tracing` は使わない。
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else if value.eq_ignore_ascii_case("pretty") {
            Self::Pretty
        } else {
            eprintln!("WARNING: unknown LOG_FORMAT={value:?}, falling back to pretty");
            Self::Pretty
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// サービス名（ルートスパンの `service` フィールドに出力）
    pub service_name: String,
    /// ログ出力形式
    pub log_format:   LogFormat,
    /// デバッグモード（既定のログレベルと SQL ログの詳細度に影響する）
    pub debug:        bool,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat, debug: bool) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
            debug,
        }
    }

    /// `RUST_LOG` が未設定のときに使うフィルタ
    pub fn default_filter(&self) -> &'static str {
        if self.debug {
            "debug,sqlx=info,tower_http=debug"
        } else {
            "info,sqlx=warn"
        }
    }
}

/// トレーシングを初期化する
///
/// JSON モードでは `timestamp`, `level`, `target`, `message` がトップレベルに出力される。
/// [`tracing_error::ErrorLayer`] を登録するので、エラー生成時に捕捉した
/// `SpanTrace` にスパン情報が記録される。
///
/// サービス名は呼び出し元で `tracing::info_span!("app", service = ...)` に入ることで
/// 各ログに付与される。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_filter().into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}

#[cfg(feature = "observability")]
const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP リクエストごとのスパンを生成する
///
/// `TraceLayer::make_span_with` に渡す。`SetRequestIdLayer` より内側で使うこと。
/// リクエスト ID がない場合は `-` を記録する。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// UUID v7 でリクエスト ID を生成する
///
/// v7 は時刻順にソートできるため、ログの突き合わせに向く。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}


#[cfg(all(test, feature = "observability"))]
mod http_tests {
    use tower_http::request_id::MakeRequestId;

    use super::*;

    #[test]
    fn test_make_request_idはuuid_v7を生成する() {
        let request = http::Request::new(());
        let mut sut = MakeRequestUuidV7;

        let id = sut.make_request_id(&request).unwrap();
        let parsed = uuid::Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();

        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_make_request_idは呼び出しごとに異なるidを返す() {
        let request = http::Request::new(());
        let mut sut = MakeRequestUuidV7;

        let first = sut.make_request_id(&request).unwrap();
        let second = sut.make_request_id(&request).unwrap();

        assert_ne!(first.header_value(), second.header_value());
    }
}
