use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use justice_ai::capability::decode_answer;
use justice_ai::models::ChatRequest;
use justice_ai::{AnswerError, AnswerService};

/// Answer service reached over `fetch`.
pub struct HttpAnswerService {
    url: String,
    timeout: Duration,
}

impl HttpAnswerService {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    async fn post(&self, query: &str) -> Result<String, AnswerError> {
        let body = ChatRequest {
            message: query.to_string(),
        };

        let resp = Request::post(&self.url)
            .json(&body)
            .map_err(|e| AnswerError::MalformedPayload(format!("Serialize error: {e}")))?
            .send()
            .await
            .map_err(|e| AnswerError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| AnswerError::Network(e.to_string()))?;

        decode_answer(status, &text)
    }
}

impl AnswerService for HttpAnswerService {
    async fn answer(&self, query: &str) -> Result<String, AnswerError> {
        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let request = pin!(self.post(query));
        let timeout = pin!(TimeoutFuture::new(millis));

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!("POST {} timed out after {:?}", self.url, self.timeout);
                Err(AnswerError::Timeout(self.timeout))
            }
        }
    }
}
