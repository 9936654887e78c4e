use tracing::debug;

use crate::errors::AnswerError;
use crate::models::ChatResponse;

/// Turns a user query into a reply.
#[allow(async_fn_in_trait)]
pub trait AnswerService {
    async fn answer(&self, query: &str) -> Result<String, AnswerError>;
}

/// Interprets a raw `POST /chat` response.
///
/// Anything other than a 2xx status with a JSON object carrying a string
/// `result` field is an error.
pub fn decode_answer(status: u16, body: &str) -> Result<String, AnswerError> {
    if !(200..300).contains(&status) {
        return Err(AnswerError::Status(status));
    }

    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        debug!("Rejected answer payload ({} bytes): {e}", body.len());
        AnswerError::MalformedPayload(e.to_string())
    })?;

    Ok(response.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_answer_success() {
        let answer = decode_answer(200, r#"{"result": "Hello"}"#).unwrap();
        assert_eq!(answer, "Hello");
    }

    #[test]
    fn test_decode_answer_ignores_extra_fields() {
        let answer = decode_answer(201, r#"{"result": "ok", "model": "x"}"#).unwrap();
        assert_eq!(answer, "ok");
    }

    #[test]
    fn test_decode_answer_rejects_non_2xx() {
        let err = decode_answer(500, r#"{"result": "Hello"}"#).unwrap_err();
        assert_eq!(err, AnswerError::Status(500));

        let err = decode_answer(302, "").unwrap_err();
        assert_eq!(err, AnswerError::Status(302));
    }

    #[test]
    fn test_decode_answer_rejects_bad_payloads() {
        for body in [
            "<html>Bad Gateway</html>",
            "",
            r#"{"answer": "Hello"}"#,
            r#"{"result": null}"#,
            r#"{"result": 42}"#,
            r#"["Hello"]"#,
        ] {
            let err = decode_answer(200, body).unwrap_err();
            assert!(
                matches!(err, AnswerError::MalformedPayload(_)),
                "expected malformed payload for {body:?}, got {err:?}"
            );
        }
    }
}
