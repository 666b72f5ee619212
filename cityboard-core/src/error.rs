use thiserror::Error;

/// Failure of a single weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request to weather API failed")]
    Http(#[source] reqwest::Error),

    #[error("weather API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse weather API response")]
    Parse(#[from] serde_json::Error),
}

// The request URL carries the API key, keep it out of messages and logs.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Http(err.without_url())
    }
}

impl WeatherError {
    /// HTTP status code, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherError::Status { status, .. } => Some(*status),
            WeatherError::Http(err) => err.status().map(|s| s.as_u16()),
            WeatherError::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_error_keeps_cause_out_of_message() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause_text = cause.to_string();
        let err = WeatherError::from(cause);

        assert_eq!(err.to_string(), "failed to parse weather API response");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source, Some(cause_text.clone()));

        let chained = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chained.matches(&cause_text).count(), 1);
    }

    #[tokio::test]
    async fn http_error_keeps_cause_out_of_message() {
        let cause = reqwest::Client::new()
            .get("http://127.0.0.1:9")
            .send()
            .await
            .unwrap_err();
        let err = WeatherError::from(cause);

        assert_eq!(err.to_string(), "request to weather API failed");
        assert!(err.source().is_some());
    }
}
