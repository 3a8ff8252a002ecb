// アプリケーション層モジュール
pub mod greeting_handler;

// 再エクスポート
pub use greeting_handler::GreetingHandler;
