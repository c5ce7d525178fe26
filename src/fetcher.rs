use crate::config::PanelConfig;
use crate::errors::FetchError;
use crate::models::{FetchOutcome, FilterState, StatsAggregate, StatsPayload};
use reqwest::{Client, Request};
use std::sync::Arc;
use tracing::{debug, warn};

/// Issues the aggregate statistics request for a filter and maps the result
/// to a [`FetchOutcome`]. Holds no per-request state.
#[derive(Clone)]
pub struct StatsFetcher {
    client: Client,
    config: Arc<PanelConfig>,
}

impl StatsFetcher {
    pub fn new(config: Arc<PanelConfig>) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: Arc<PanelConfig>) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn query_pairs(&self, filter: &FilterState) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(year) = filter.year {
            pairs.push((self.config.year_param.clone(), year.to_string()));
        }
        if let Some(tournament) = filter.tournament.as_deref().map(str::trim) {
            if !tournament.is_empty() {
                pairs.push((self.config.tournament_param.clone(), tournament.to_string()));
            }
        }
        pairs
    }

    pub fn build_request(&self, filter: &FilterState) -> Result<Request, FetchError> {
        let mut builder = self.client.get(self.config.stats_url());
        let pairs = self.query_pairs(filter);
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        Ok(builder.build()?)
    }

    pub async fn fetch(&self, filter: &FilterState) -> FetchOutcome {
        match self.try_fetch(filter).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(status = ?err.status(), "stats request failed: {err}");
                FetchOutcome::Error(format!("{}{}", self.config.error_prefix, err))
            }
        }
    }

    async fn try_fetch(&self, filter: &FilterState) -> Result<FetchOutcome, FetchError> {
        let request = self.build_request(filter)?;
        debug!(url = %request.url(), "requesting stats");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::server(status, &self.config.server_error_message));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        classify(value, &self.config.empty_message)
    }
}

/// Decides between an empty and a populated aggregate for a decoded body.
pub fn classify(body: serde_json::Value, empty_fallback: &str) -> Result<FetchOutcome, FetchError> {
    let payload: StatsPayload = serde_json::from_value(body.clone())?;
    if let Some(message) = payload.empty_message() {
        return Ok(FetchOutcome::Empty(message.unwrap_or(empty_fallback).to_string()));
    }

    let aggregate: StatsAggregate = serde_json::from_value(body)?;
    Ok(FetchOutcome::Success(aggregate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FALLBACK: &str = "No se encontraron datos para este año.";

    fn fetcher() -> StatsFetcher {
        StatsFetcher::new(Arc::new(PanelConfig::default()))
    }

    #[test]
    fn request_without_year_has_no_query() {
        let request = fetcher().build_request(&FilterState::default()).unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://127.0.0.1:8000/estadisticas/completa/json"
        );
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn request_with_year_appends_parameter() {
        for year in [1990, 2014, 2024] {
            let request = fetcher()
                .build_request(&FilterState::for_year(Some(year)))
                .unwrap();
            assert_eq!(request.url().query(), Some(format!("anio={year}").as_str()));
        }
    }

    #[test]
    fn tournament_is_appended_after_year() {
        let filter = FilterState {
            year: Some(2021),
            tournament: Some("copa-america".to_string()),
        };
        let request = fetcher().build_request(&filter).unwrap();
        assert_eq!(request.url().query(), Some("anio=2021&torneo_id=copa-america"));

        let blank = FilterState {
            year: None,
            tournament: Some("  ".to_string()),
        };
        assert!(fetcher().query_pairs(&blank).is_empty());
    }

    #[test]
    fn zero_total_uses_fallback_message() {
        let outcome = classify(json!({ "total_partidos": 0 }), FALLBACK).unwrap();
        assert_eq!(outcome, FetchOutcome::Empty(FALLBACK.to_string()));
    }

    #[test]
    fn message_field_wins_over_fallback() {
        let outcome = classify(json!({ "message": "No hay partidos en 1985" }), FALLBACK).unwrap();
        assert_eq!(outcome, FetchOutcome::Empty("No hay partidos en 1985".to_string()));
    }

    #[test]
    fn zero_total_with_non_string_message_is_empty() {
        let outcome = classify(json!({ "total_partidos": 0, "message": 5 }), FALLBACK).unwrap();
        assert_eq!(outcome, FetchOutcome::Empty(FALLBACK.to_string()));
    }

    #[test]
    fn populated_body_is_success() {
        let outcome = classify(
            json!({
                "total_partidos": 10,
                "goles_anotados": 18,
                "goles_recibidos": 9,
                "promedio_goles_por_partido": 1.8,
                "victorias": 6,
                "empates": 2,
                "derrotas": 2,
                "tarjetas_amarillas": 14
            }),
            FALLBACK,
        )
        .unwrap();
        match outcome {
            FetchOutcome::Success(aggregate) => {
                assert_eq!(aggregate.total_partidos, 10);
                assert_eq!(aggregate.tarjetas_amarillas, Some(14));
                assert_eq!(aggregate.tarjetas_rojas, None);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn incomplete_body_is_decode_error() {
        let err = classify(json!({ "total_partidos": 3 }), FALLBACK).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
