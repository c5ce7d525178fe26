use std::env;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_ENDPOINT: &str = "/estadisticas/completa/json";

/// How the required-field guard reports blank fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationNotice {
    #[default]
    PerField,
    Batched,
}

impl ValidationNotice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "per-field" | "per_field" | "perfield" => Some(Self::PerField),
            "batched" | "batch" => Some(Self::Batched),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub base_url: String,
    pub endpoint: String,
    pub year_param: String,
    pub tournament_param: String,
    pub loading_message: String,
    pub empty_message: String,
    pub error_prefix: String,
    pub server_error_message: String,
    pub delete_prompt: String,
    pub validation_notice: ValidationNotice,
    pub first_season: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            year_param: "anio".to_string(),
            tournament_param: "torneo_id".to_string(),
            loading_message: "Cargando estadísticas...".to_string(),
            empty_message: "No se encontraron datos para este año.".to_string(),
            error_prefix: "Error al cargar las estadísticas: ".to_string(),
            server_error_message: "Error en la respuesta del servidor".to_string(),
            delete_prompt: "¿Estás seguro de que deseas eliminar este registro?".to_string(),
            validation_notice: ValidationNotice::default(),
            first_season: 2000,
        }
    }
}

impl PanelConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base_url) = lookup("STATS_BASE_URL").filter(|value| !value.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        if let Some(endpoint) = lookup("STATS_ENDPOINT").filter(|value| !value.trim().is_empty()) {
            let endpoint = endpoint.trim();
            config.endpoint = if endpoint.starts_with('/') {
                endpoint.to_string()
            } else {
                format!("/{endpoint}")
            };
        }
        if let Some(param) = lookup("STATS_YEAR_PARAM").filter(|value| !value.trim().is_empty()) {
            config.year_param = param.trim().to_string();
        }
        if let Some(notice) = lookup("STATS_VALIDATION_NOTICE") {
            match ValidationNotice::parse(&notice) {
                Some(parsed) => config.validation_notice = parsed,
                None => warn!("ignoring unknown STATS_VALIDATION_NOTICE value: {notice}"),
            }
        }
        if let Some(season) = lookup("STATS_FIRST_SEASON") {
            match season.trim().parse::<i32>() {
                Ok(year) => config.first_season = year,
                Err(err) => warn!("ignoring STATS_FIRST_SEASON={season}: {err}"),
            }
        }

        config
    }

    pub fn stats_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }
}
