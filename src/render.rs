use crate::models::{FetchOutcome, StatsAggregate};

/// HTML fragment for the stats container. Pure: same outcome, same markup.
pub fn render(outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Empty(message) | FetchOutcome::Error(message) => message_line(message),
        FetchOutcome::Success(aggregate) => aggregate_rows(aggregate)
            .into_iter()
            .map(|(label, value)| format!("<p><strong>{label}:</strong> {value}</p>"))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn render_loading(message: &str) -> String {
    message_line(message)
}

pub fn aggregate_rows(aggregate: &StatsAggregate) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Total Partidos", aggregate.total_partidos.to_string()),
        ("Goles Anotados", aggregate.goles_anotados.to_string()),
        ("Goles Recibidos", aggregate.goles_recibidos.to_string()),
        (
            "Promedio Goles por Partido",
            format_decimal(aggregate.promedio_goles_por_partido),
        ),
        ("Victorias", aggregate.victorias.to_string()),
        ("Empates", aggregate.empates.to_string()),
        ("Derrotas", aggregate.derrotas.to_string()),
    ];

    if let Some(yellow) = aggregate.tarjetas_amarillas {
        rows.push(("Tarjetas Amarillas", yellow.to_string()));
    }
    if let Some(red) = aggregate.tarjetas_rojas {
        rows.push(("Tarjetas Rojas", red.to_string()));
    }
    if let Some(eliminated) = aggregate.partidos_eliminados {
        rows.push(("Partidos Eliminados", eliminated.to_string()));
    }
    if let Some(rate) = aggregate.porcentaje_eliminaciones {
        rows.push(("Porcentaje de Eliminaciones", format!("{}%", format_decimal(rate))));
    }

    rows
}

/// Two decimals at most, no trailing zeros: 1.5 -> "1.5", 2.0 -> "2".
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    rounded.to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn message_line(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}
