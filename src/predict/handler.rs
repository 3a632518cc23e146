//! Request handler: raw query parameters in, status and JSON body out.
//!
//! Kept free of any HTTP framework so it can sit behind whatever router
//! serves it. Bad input and unknown sittings are client errors (400);
//! an unbracketed score (already logged by the interpolator) is reported
//! as a server error (500) without leaking details.

use serde::{Deserialize, Serialize};

use super::{Prediction, Predictor, format_percentile};
use crate::error::PredictError;

/// Query parameters as received, before any validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictQuery {
    pub shift: Option<String>,
    pub marks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Percentile {
        percentile: String,
    },
    Error {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: ResponseBody,
}

impl Response {
    pub fn from_result(result: &Result<Prediction, PredictError>) -> Self {
        match result {
            Ok(prediction) => Self {
                status: 200,
                body: ResponseBody::Percentile {
                    percentile: format_percentile(prediction.percentile),
                },
            },
            Err(err) => Self::from_error(err),
        }
    }

    pub fn from_error(err: &PredictError) -> Self {
        let (status, message, reason) = match err {
            PredictError::InvalidInput { reason } => {
                (400, "Invalid shift or marks", Some(reason.clone()))
            }
            PredictError::UnknownSitting { .. } => (400, "No data for this shift", None),
            PredictError::Unbracketed { .. } => (500, "Internal error", None),
        };
        Self {
            status,
            body: ResponseBody::Error {
                error: message.to_string(),
                reason,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Handle one prediction request.
pub fn handle(predictor: &Predictor, query: &PredictQuery) -> Response {
    Response::from_result(&predictor.predict_query(query))
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod tests;
