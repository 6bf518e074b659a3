// Amount handling shared between the cleaner pipeline and its output models.

pub mod amount_format {
    use anyhow::{anyhow, Result};
    use once_cell::sync::Lazy;
    use regex::Regex;
    use std::str::FromStr;

    // ASCII digits with at most one decimal point anywhere, and at least one digit.
    static PLAIN_DECIMAL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)$").expect("static amount pattern is valid")
    });

    /// Strips currency formatting: every `$` and `,` is removed, then surrounding whitespace.
    pub fn sanitize_amount(raw: &str) -> String {
        raw.replace(['$', ','], "").trim().to_string()
    }

    pub fn is_plain_decimal(s: &str) -> bool {
        PLAIN_DECIMAL.is_match(s)
    }

    // Parses an already sanitized amount. Rejects anything that does not come out finite.
    pub fn parse_amount(s: &str) -> Result<f64> {
        let value = f64::from_str(s).map_err(|e| anyhow!("Failed to parse amount '{}': {}", s, e))?;
        if !value.is_finite() {
            return Err(anyhow!("Amount '{}' is out of range", s));
        }
        Ok(value)
    }

    /// Renders an amount with at least two fraction digits, keeping the shortest
    /// representation that round-trips when more digits are needed.
    pub fn format_amount(value: f64) -> String {
        let shortest = value.to_string();
        match shortest.split_once('.') {
            Some((_, fraction)) if fraction.len() > 2 => shortest,
            _ => format!("{:.2}", value),
        }
    }

}
