use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Primer número ASCII (entero o decimal) del texto; `\d` aceptaría otros dígitos Unicode
    static ref NUMBER_REGEX: Regex = Regex::new(r"([0-9]+(\.[0-9]+)?)").unwrap();
}

/// Extraer el valor MPG de una descripción como "25 MPG"
pub fn extract_mpg(text: &str) -> Option<f64> {
    let mpg = NUMBER_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    match mpg {
        Some(value) => log::info!("⛽ MPG extraído de '{}': {}", text, value),
        None => log::info!("⛽ MPG extraído de '{}': None", text),
    }

    mpg
}
