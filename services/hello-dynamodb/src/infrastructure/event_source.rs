/// イベント入力元
///
/// ローカル実行時にハンドラーへ渡すイベントJSONを
/// ファイルまたは標準入力から読み込む。
use std::io::Read;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// イベント読み込みのエラー型
#[derive(Debug, Error)]
pub enum EventSourceError {
    #[error("イベントの読み込みに失敗: {0}")]
    Read(#[from] std::io::Error),

    #[error("JSONの解析に失敗: {0}")]
    Parse(#[from] serde_json::Error),
}

/// イベントJSONの入力元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// 標準入力
    Stdin,
    /// ファイルパス
    File(PathBuf),
}

impl EventSource {
    /// コマンドライン引数から入力元を決定
    ///
    /// 未指定または`-`の場合は標準入力を使用する。
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => EventSource::Stdin,
            Some(path) => EventSource::File(PathBuf::from(path)),
        }
    }

    /// 入力元からイベントを読み込み
    pub fn load(&self) -> Result<Value, EventSourceError> {
        let text = match self {
            EventSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
            EventSource::File(path) => std::fs::read_to_string(path)?,
        };
        parse_json(&text)
    }
}

/// JSON文字列を解析
///
/// 空白のみの入力は空のオブジェクト`{}`として扱う。
pub fn parse_json(text: &str) -> Result<Value, EventSourceError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(text)?)
}
