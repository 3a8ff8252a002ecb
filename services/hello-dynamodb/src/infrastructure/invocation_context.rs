/// Lambda実行コンテキストの変換
///
/// `lambda_runtime::Context`をハンドラーが扱う不透明なJSON値に変換する。
use lambda_runtime::Context;
use serde_json::{json, Value};

/// 実行コンテキストをJSON値に変換
///
/// ハンドラーはコンテキストの中身を参照しないため、
/// ログ出力に有用なフィールドのみを含める。
pub fn invocation_context(context: &Context) -> Value {
    json!({
        "request_id": context.request_id,
        "deadline": context.deadline,
        "invoked_function_arn": context.invoked_function_arn,
        "xray_trace_id": context.xray_trace_id,
        "function_name": context.env_config.function_name,
        "function_version": context.env_config.version,
        "memory_limit_in_mb": context.env_config.memory,
        "log_group_name": context.env_config.log_group,
        "log_stream_name": context.env_config.log_stream,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_context_includes_request_fields() {
        let mut context = Context::default();
        context.request_id = "8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_string();
        context.deadline = 1_700_000_000_000;
        context.invoked_function_arn =
            "arn:aws:lambda:ap-northeast-1:123456789012:function:hello".to_string();
        context.xray_trace_id = Some("Root=1-5bef4de7-ad49b0e87f6ef6c87fc2e700".to_string());

        let value = invocation_context(&context);

        assert_eq!(value["request_id"], "8476a536-e9f4-11e8-9739-2dfe598c3fcd");
        assert_eq!(value["deadline"], 1_700_000_000_000u64);
        assert_eq!(
            value["invoked_function_arn"],
            "arn:aws:lambda:ap-northeast-1:123456789012:function:hello"
        );
        assert_eq!(value["xray_trace_id"], "Root=1-5bef4de7-ad49b0e87f6ef6c87fc2e700");
    }

    #[test]
    fn test_invocation_context_without_trace_id_is_null() {
        let context = Context::default();

        let value = invocation_context(&context);

        assert!(value["xray_trace_id"].is_null());
        assert!(value.as_object().unwrap().contains_key("function_name"));
        assert_eq!(value.as_object().unwrap().len(), 9);
    }
}
