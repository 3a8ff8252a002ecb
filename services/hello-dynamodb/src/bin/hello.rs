/// Lambdaエントリポイント
///
/// 受信したイベントとコンテキストをログ出力し、
/// 固定の本文とタイムスタンプを含むレスポンスを返却する。
///
/// # 環境変数
/// - RUST_LOG: ログフィルター（最優先）
/// - AWS_LAMBDA_LOG_FORMAT: ログ形式（JSON / Text、デフォルト: JSON）
/// - AWS_LAMBDA_LOG_LEVEL: ログレベル（RUST_LOG未設定時に使用）
/// - TZ: タイムスタンプのタイムゾーン（Lambda上ではUTC）
use hello_dynamodb::handler;
use hello_dynamodb::infrastructure::{init_logging, LogConfig};
use lambda_runtime::{service_fn, Error};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    let log_config = LogConfig::from_env();
    init_logging(&log_config);

    info!(log_format = ?log_config.format, "Lambda関数を初期化");

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}
