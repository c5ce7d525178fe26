use reqwest::StatusCode;
use thiserror::Error;

/// Failures of one statistics request. None of them leave the panel: the
/// fetcher folds each into an error outcome.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("respuesta inválida del servidor: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn server(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            Self::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_generic_message() {
        let err = FetchError::server(StatusCode::BAD_GATEWAY, "Error en la respuesta del servidor");
        assert_eq!(err.to_string(), "Error en la respuesta del servidor");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn decode_error_keeps_parser_text() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let text = parse.to_string();
        let err = FetchError::from(parse);
        assert!(err.to_string().contains(&text));
        assert_eq!(err.status(), None);
    }
}
