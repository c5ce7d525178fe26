use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub year: Option<i32>,
    pub tournament: Option<String>,
}

impl FilterState {
    pub fn for_year(year: Option<i32>) -> Self {
        Self {
            year,
            tournament: None,
        }
    }
}

/// Aggregate returned by the statistics endpoint for a set of matches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsAggregate {
    pub total_partidos: u64,
    pub goles_anotados: u64,
    pub goles_recibidos: u64,
    pub promedio_goles_por_partido: f64,
    pub victorias: u64,
    pub empates: u64,
    pub derrotas: u64,
    #[serde(default)]
    pub tarjetas_amarillas: Option<u64>,
    #[serde(default)]
    pub tarjetas_rojas: Option<u64>,
    #[serde(default)]
    pub partidos_eliminados: Option<u64>,
    #[serde(default)]
    pub porcentaje_eliminaciones: Option<f64>,
}

/// Raw response body, read loosely so the empty-result markers are checked
/// before the body has to match an aggregate.
#[derive(Debug, Default, Deserialize)]
pub struct StatsPayload {
    #[serde(default)]
    pub total_partidos: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl StatsPayload {
    /// `Some(text)` when the body signals zero results. The text is `None`
    /// unless the backend sent a non-empty string message.
    pub fn empty_message(&self) -> Option<Option<&str>> {
        let zero_total = self
            .total_partidos
            .as_ref()
            .and_then(Value::as_f64)
            .is_some_and(|total| total == 0.0);
        let has_message = self.message.as_ref().is_some_and(is_truthy);
        if !zero_total && !has_message {
            return None;
        }
        Some(
            self.message
                .as_ref()
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty()),
        )
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(StatsAggregate),
    Empty(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }

    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::new(name, value)
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub action: String,
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Value of the hidden `method` input used to tunnel DELETE/PUT through POST.
    pub fn method_override(&self) -> Option<&str> {
        self.field("method").map(|field| field.value.trim())
    }
}
