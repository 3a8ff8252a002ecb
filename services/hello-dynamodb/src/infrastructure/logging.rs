/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式とテキスト形式の出力をサポートする。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::log_config::{LogConfig, LogFormat};

/// `RUST_LOG`も`AWS_LAMBDA_LOG_LEVEL`も未設定の場合のレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 受信したイベントとコンテキストのログに使うターゲット
///
/// 設定されたログレベルに関わらず常にinfoで出力される。
pub const INVOCATION_LOG_TARGET: &str = "hello_dynamodb::invocation";

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する（標準出力）
///
/// この関数は複数回呼び出しても安全で、最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use hello_dynamodb::infrastructure::{init_logging, LogConfig};
///
/// init_logging(&LogConfig::from_env());
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging(config: &LogConfig) {
    init_with_writer(config, std::io::stdout);
}

/// ローカル実行向けのログサブスクライバーを初期化する（標準エラー出力）
///
/// 標準出力はレスポンスJSONの出力に使うため、ログは標準エラー出力に分離する。
pub fn init_cli_logging(config: &LogConfig) {
    init_with_writer(config, std::io::stderr);
}

fn init_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    INIT.call_once(|| {
        build_subscriber(config, writer).init();
    });
}

/// フィルターと出力レイヤーを組み合わせたサブスクライバーを構築する
///
/// 本番の初期化とテストのログ取得で同じ構成を使う。
pub fn build_subscriber<W>(config: &LogConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(fmt_layer(config.format, writer))
}

fn fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        // JSON形式のログレイヤー（Lambda/CloudWatch向け）
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .compact()
            .boxed(),
    }
}

/// フィルターを構築する
///
/// 優先順位: `RUST_LOG` > `AWS_LAMBDA_LOG_LEVEL` > info。
/// `INVOCATION_LOG_TARGET`はどのレベル指定でもinfoまで出力する。
pub fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config
            .level
            .as_deref()
            .and_then(|level| EnvFilter::try_new(level).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
    });

    match format!("{INVOCATION_LOG_TARGET}=info").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}

/// クロージャ実行中のログ出力を文字列として取得する（テスト用）
///
/// `build_subscriber`で構築したサブスクライバーをスレッドローカルに差し替える。
/// `RUST_LOG`を参照するため、呼び出し側のテストは`#[serial(log_env)]`とすること。
#[cfg(test)]
pub fn capture_logs<T>(config: &LogConfig, f: impl FnOnce() -> T) -> (T, String) {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = build_subscriber(config, move || writer.clone());

    let result = tracing::subscriber::with_default(subscriber, f);

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (result, output)
}
