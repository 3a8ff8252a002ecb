/// ハンドラーのレスポンス
///
/// Lambda関数が返却するHTTPライクな固定形式のレコード。
/// JSONでは`statusCode`, `body`, `timestamp`の順に出力される。
use serde::{Deserialize, Serialize};

use super::clock::{format_timestamp, Clock};

/// 常に返却するステータスコード
pub const STATUS_OK: u16 = 200;

/// 常に返却する本文
pub const GREETING_BODY: &str = "Hello from Dynamodb!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    /// 呼び出し時点の時刻（`YYYY-MM-DD HH:MM:SS`）
    pub timestamp: String,
}

impl HandlerResponse {
    /// 整形済みのタイムスタンプから固定レスポンスを作成
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_OK,
            body: GREETING_BODY.to_string(),
            timestamp: timestamp.into(),
        }
    }

    /// 時刻ソースの現在時刻で固定レスポンスを作成
    pub fn at(clock: &impl Clock) -> Self {
        Self::new(format_timestamp(clock.now()))
    }
}
