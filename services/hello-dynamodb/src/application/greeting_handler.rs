// 挨拶ハンドラー
//
// 受信したイベントとコンテキストをログ出力し、
// 固定の本文と呼び出し時刻を含むレスポンスを返す。

use serde_json::Value;
use tracing::info;

use crate::domain::{Clock, HandlerResponse};
use crate::infrastructure::logging::INVOCATION_LOG_TARGET;

/// 挨拶ハンドラー
///
/// 入力の形式は検証しないため、どのような入力でも失敗しない。
/// 状態を持たないので、同時に複数回呼び出しても互いに影響しない。
pub struct GreetingHandler<C: Clock> {
    /// タイムスタンプ生成に使う時刻ソース
    clock: C,
}

impl<C: Clock> GreetingHandler<C> {
    /// 新しいハンドラーを作成
    ///
    /// # Arguments
    /// * `clock` - 時刻ソース（本番は`SystemClock`）
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// イベントを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. イベントをログ出力
    /// 2. コンテキストをログ出力
    /// 3. 時刻ソースの現在時刻で固定レスポンスを構築
    ///
    /// 2行のログはログレベル設定に関わらず出力される（`INVOCATION_LOG_TARGET`）。
    pub fn handle(&self, event: &Value, context: &Value) -> HandlerResponse {
        info!(target: INVOCATION_LOG_TARGET, "Received event: {}", event);
        info!(target: INVOCATION_LOG_TARGET, "Received context: {}", context);

        HandlerResponse::at(&self.clock)
    }
}
