use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Uniform error body: `{success: false, error: <status>, message: <text>}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter shared by every question listing.
///
/// Kept as a raw string so that a non-numeric value falls back to the first
/// page instead of rejecting the request. A repeated `page` key keeps its
/// first value.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
}

impl<'de> Deserialize<'de> for PageQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(String, String)>::deserialize(deserializer)?;
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);

        Ok(Self { page })
    }
}

impl PageQuery {
    /// Numbers too large for `i64` saturate, so they land past the last page.
    pub fn page(&self) -> i64 {
        let Some(raw) = self.page.as_deref() else {
            return 1;
        };

        match raw.trim().parse::<i64>() {
            Ok(page) => page,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 1,
            },
        }
    }
}
