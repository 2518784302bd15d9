use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

fn error_field(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Decode a `{success, error, ...}` response body.
///
/// Non-2xx statuses and `success: false` bodies are treated alike: the `error`
/// field is used when present, otherwise a message built from the status.
///
/// # Errors
///
/// Returns `ApiError::Status` for non-2xx responses, `ApiError::Rejected` for
/// `success: false` and `ApiError::Decode` for bodies that do not match `T`.
pub fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .as_ref()
            .and_then(error_field)
            .unwrap_or_else(|| ApiError::status_message(status));
        return Err(ApiError::Status { status, message });
    }

    let value: Value = serde_json::from_str(body)?;
    if value.get("success").and_then(Value::as_bool) != Some(true) {
        let message = error_field(&value).unwrap_or_else(|| ApiError::status_message(status));
        return Err(ApiError::Rejected(message));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        total_questoes: usize,
    }

    #[test]
    fn success_body_is_decoded() {
        let payload: Payload =
            decode_envelope(StatusCode::OK, r#"{"success": true, "total_questoes": 10}"#).unwrap();
        assert_eq!(payload.total_questoes, 10);
    }

    #[test]
    fn error_status_uses_body_message() {
        let err = decode_envelope::<Payload>(
            StatusCode::NOT_FOUND,
            r#"{"success": false, "error": "Nenhuma questão encontrada para os filtros selecionados."}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Nenhuma questão encontrada para os filtros selecionados."
        );
    }

    #[test]
    fn error_status_without_json_falls_back_to_status() {
        let err = decode_envelope::<Payload>(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Status { .. }));
        assert_eq!(err.to_string(), "Erro na resposta do servidor: 502");
    }

    #[test]
    fn success_false_is_rejected() {
        let err = decode_envelope::<Payload>(StatusCode::OK, r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
        assert_eq!(err.to_string(), "Erro na resposta do servidor: 200");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_envelope::<Payload>(StatusCode::OK, r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
