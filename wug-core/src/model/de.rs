//! Field deserializers for the provider's loosely typed scalars.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Text the provider uses in place of a missing reading.
const PLACEHOLDERS: &[&str] = &["", "NA", "N/A", "--"];

/// Text field that may arrive as a string, number, bool or `null`.
/// Numbers keep the form they were sent in, so `9.0` stays `"9.0"`.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Number(n)) => n.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

/// Float field that may arrive as a number, a numeric string or `null`.
///
/// `null` and the provider's placeholders (blank, `NA`, `N/A`, `--`) count as
/// a missing reading and decode to `0.0`. Any other non-numeric text is an
/// error.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Number(n)) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("number {n} is out of range"))),
        Some(Scalar::Text(s)) if PLACEHOLDERS.contains(&s.trim()) => Ok(0.0),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, found {s:?}"))),
        Some(Scalar::Bool(b)) => Err(D::Error::custom(format!("expected a number, found {b}"))),
        None => Ok(0.0),
    }
}

/// `null` decodes to the type's default.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
