use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use application::GreetingHandler;
use infrastructure::{invocation_context, SystemClock};

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

/// Lambda関数のメインハンドラー
///
/// 実行コンテキストをJSON値に変換してGreetingHandlerに渡し、
/// レスポンスをJSONとして返却する。
pub async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    let context = invocation_context(&context);

    let response = GreetingHandler::new(SystemClock).handle(&payload, &context);

    Ok(serde_json::to_value(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    #[tokio::test]
    async fn test_handler_returns_fixed_response() {
        let event = LambdaEvent::new(json!({"key": "value"}), Context::default());

        let response = handler(event).await.unwrap();

        assert_eq!(response["statusCode"], 200);
        assert_eq!(response["body"], "Hello from Dynamodb!");
        assert!(response["timestamp"].is_string());
        assert_eq!(response.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_handler_accepts_null_payload() {
        let event = LambdaEvent::new(Value::Null, Context::default());

        let response = handler(event).await.unwrap();

        assert_eq!(response["statusCode"], 200);
    }
}
