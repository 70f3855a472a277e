use thiserror::Error;

/// Failures of a single forecast run. Every variant ends the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("unable to resolve location: {0}")]
    NoLocation(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("forecast series is empty")]
    EmptySeries,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("weather service returned no forecast entries")]
    EmptyResponse,

    #[error("malformed forecast response: {0}")]
    MalformedResponse(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("failed to build http client: {0}")]
    Build(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Decode(message) => FetchError::MalformedResponse(message),
            other => FetchError::Network(other.to_string()),
        }
    }
}

impl WeatherError {
    /// Short notification text for the window; details go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::NoLocation(_) => "Unable to fetch location coordinates.",
            WeatherError::Fetch(_) | WeatherError::EmptySeries => {
                "Failed to fetch weather data. Please try again."
            }
        }
    }
}
