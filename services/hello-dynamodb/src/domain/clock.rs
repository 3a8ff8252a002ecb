// 時刻ソース
//
// ハンドラーが参照する現在時刻を抽象化し、
// テストでは固定時刻を注入できるようにするドメイン層コンポーネント。

use chrono::NaiveDateTime;

/// レスポンスのtimestampフィールドの書式（例: 2024-01-02 03:04:05）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 現在時刻を返す時刻ソース
///
/// タイムゾーン情報を持たない壁時計時刻を返す。
/// 本番では`SystemClock`、テストでは`FixedClock`を使用する。
pub trait Clock: Send + Sync {
    /// 現在の壁時計時刻を取得
    fn now(&self) -> NaiveDateTime;
}

/// 常に同じ時刻を返す時刻ソース
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// 時刻を`YYYY-MM-DD HH:MM:SS`形式の文字列に変換
///
/// 各フィールドはゼロ埋めされる（年4桁、その他2桁、24時間表記）。
/// 秒未満は切り捨てる。
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
