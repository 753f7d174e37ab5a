use std::io;

use serde::Serialize;
use txfeed_client::contracts::envelope::failure_from_error;
use txfeed_client::{ClientError, SuccessEnvelope};

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "feed" | "demo" => serialize_json_pretty(success),
        other => Err(io::Error::other(format!(
            "JSON output is not supported for command `{other}`"
        ))),
    }
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    serialize_json_pretty(&failure_from_error(error))
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use txfeed_client::{ClientError, SuccessEnvelope};

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "v1".to_string(),
            data,
        }
    }

    #[test]
    fn feed_json_uses_structured_envelope() {
        let payload = success("feed", json!({"state": "empty", "rows": []}));

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(value["data"]["state"], Value::String("empty".to_string()));
            }
        }
    }

    #[test]
    fn error_json_keeps_code_and_data() {
        let error = ClientError::unrecognized_classification(3, "PRICEY");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(false));
                assert_eq!(
                    value["error"]["code"],
                    Value::String("unrecognized_classification".to_string())
                );
                assert_eq!(value["data"]["row"], Value::from(3));
            }
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        let payload = success("schema", json!({}));
        assert!(render_success_json(&payload).is_err());
    }
}
