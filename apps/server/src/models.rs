//! Wire models for the estimate endpoint.
//!
//! This is the parse-and-validate boundary: raw JSON payloads are coerced
//! and normalized here, so the core calculator only ever receives a typed
//! `ValuationRequest`.

use carvalue_core::constants::DEFAULT_YEAR;
use carvalue_core::errors::{Error as CoreError, ValidationError};
use carvalue_core::valuation::{normalize_label, Condition, ValuationRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `year` and `mileage` arrive either as JSON numbers or as numeric strings.
#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    fn coerce(self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| ValidationError::InvalidNumber {
                        field,
                        value: s.clone(),
                    })
            }
        }
    }
}

/// Request body for `POST /estimate`. Every field is optional; missing
/// fields take the documented defaults.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct EstimateBody {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<NumberOrText>,
    pub mileage: Option<NumberOrText>,
    pub condition: Option<String>,
}

impl TryFrom<EstimateBody> for ValuationRequest {
    type Error = CoreError;

    fn try_from(body: EstimateBody) -> Result<Self, Self::Error> {
        let year = match body.year {
            Some(raw) => {
                let value = raw.coerce("year")?;
                i32::try_from(value).map_err(|_| ValidationError::OutOfRange {
                    field: "year",
                    value: value.to_string(),
                })?
            }
            None => DEFAULT_YEAR,
        };
        let mileage = match body.mileage {
            Some(raw) => raw.coerce("mileage")?,
            None => 0,
        };
        Ok(ValuationRequest {
            make: normalize_label(&body.make.unwrap_or_default()),
            model: normalize_label(&body.model.unwrap_or_default()),
            year,
            mileage,
            condition: body
                .condition
                .as_deref()
                .map(Condition::parse)
                .unwrap_or_default(),
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EstimateResponse {
    pub estimated_value: i64,
}

impl From<carvalue_core::valuation::Valuation> for EstimateResponse {
    fn from(v: carvalue_core::valuation::Valuation) -> Self {
        Self {
            estimated_value: v.estimated_value,
        }
    }
}
