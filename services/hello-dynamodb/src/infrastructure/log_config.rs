// ログ出力設定
//
// Lambdaの高度なログ制御（AWS_LAMBDA_LOG_FORMAT / AWS_LAMBDA_LOG_LEVEL）を
// 環境変数から読み込み、型安全に提供するインフラストラクチャ層コンポーネント。

use std::str::FromStr;

use thiserror::Error;

/// 環境変数名: ログ形式（JSON / Text）
pub const ENV_LOG_FORMAT: &str = "AWS_LAMBDA_LOG_FORMAT";

/// 環境変数名: ログレベル（TRACE / DEBUG / INFO / WARN / ERROR / FATAL）
pub const ENV_LOG_LEVEL: &str = "AWS_LAMBDA_LOG_LEVEL";

/// ログ設定のエラー型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogConfigError {
    #[error("Unknown log format: {0}")]
    UnknownFormat(String),
}

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1行1オブジェクトのJSON（CloudWatch向け）
    #[default]
    Json,
    /// 人間が読みやすいテキスト形式
    Text,
}

impl FromStr for LogFormat {
    type Err = LogConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err(LogConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// ログ設定
///
/// 無効な値や未設定の場合はデフォルト値を使用する。
/// ログ設定の誤りで関数を停止させないため、エラーは返さない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// 出力形式
    pub format: LogFormat,
    /// EnvFilter用のレベル指定（小文字、`RUST_LOG`未設定時に使用）
    pub level: Option<String>,
}

impl LogConfig {
    /// 環境変数から設定を読み込み
    ///
    /// - AWS_LAMBDA_LOG_FORMAT: `JSON`または`Text`（大文字小文字は区別しない、デフォルト: JSON）
    /// - AWS_LAMBDA_LOG_LEVEL: Lambdaのログレベル（無効な値は無視）
    pub fn from_env() -> Self {
        let format = std::env::var(ENV_LOG_FORMAT)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let level = std::env::var(ENV_LOG_LEVEL)
            .ok()
            .and_then(|v| normalize_level(&v));

        Self { format, level }
    }

    /// 明示的な値で作成
    pub fn new(format: LogFormat, level: Option<String>) -> Self {
        Self { format, level }
    }
}

/// LambdaのログレベルをEnvFilterのディレクティブに変換
///
/// FATALはtracingに存在しないためerrorとして扱う。
pub fn normalize_level(value: &str) -> Option<String> {
    let level = match value.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" | "fatal" => "error",
        _ => return None,
    };
    Some(level.to_string())
}
