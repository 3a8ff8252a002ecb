/// ローカル実行用CLI
///
/// Lambdaランタイムを使わずにハンドラーを1回実行し、
/// レスポンスJSONを標準出力に書き出す。ログは標準エラー出力に出る。
///
/// # ローカル実行
/// ```bash
/// # ファイルからイベントを読み込み
/// cargo run --bin invoke -- --event events/insert.json
///
/// # 標準入力から読み込み、コンテキストを指定
/// echo '{"key": "value"}' | cargo run --bin invoke -- --context '{"request_id": "local"}'
///
/// # 整形して出力
/// cargo run --bin invoke -- --event events/insert.json --pretty
/// ```
use std::process::ExitCode;

use clap::Parser;
use hello_dynamodb::application::GreetingHandler;
use hello_dynamodb::infrastructure::{
    init_cli_logging, parse_json, EventSource, EventSourceError, LogConfig, SystemClock,
};
use tracing::error;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(name = "invoke")]
#[command(about = "ハンドラーをローカルで1回実行してレスポンスを出力")]
struct CliArgs {
    /// イベントJSONファイルのパス（未指定または`-`で標準入力）
    #[arg(long, short = 'e')]
    event: Option<String>,

    /// コンテキストとして渡すJSON
    #[arg(long, short = 'c', default_value = "null")]
    context: String,

    /// レスポンスJSONを整形して出力
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_cli_logging(&LogConfig::from_env());

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "ローカル実行に失敗");
            ExitCode::FAILURE
        }
    }
}

/// イベントとコンテキストを読み込み、ハンドラーを実行してレスポンスJSONを返す
fn run(args: &CliArgs) -> Result<String, EventSourceError> {
    let event = EventSource::from_arg(args.event.as_deref()).load()?;
    let context = parse_json(&args.context)?;

    let response = GreetingHandler::new(SystemClock).handle(&event, &context);

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(output)
}
