use serde::{Deserialize, Deserializer};

// the reference front end posts ids taken from <select> values, so they
// arrive either as numbers or as numeric strings
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i32),
    Str(String),
}

pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(v)) => Ok(Some(v)),
        Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| {
                serde::de::Error::custom(format!("Wrong value {s}, can not parse to i32"))
            }),
    }
}
