use crate::engine::error::{ErrorClass, EstimationError};
use crate::engine::estimator::{EstimationResult, Estimator};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

/// Message returned in place of internal error details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to estimate properties";

/// A single estimation request as received from a transport layer.
///
/// The structure is read from the `structure` field; `smiles` is accepted as an
/// alias. A missing field deserializes to `None` rather than failing, so the
/// service can answer it with a proper validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(default, alias = "smiles")]
    pub structure: Option<String>,
}

impl EstimateRequest {
    pub fn new(structure: impl Into<String>) -> Self {
        Self {
            structure: Some(structure.into()),
        }
    }
}

/// Failure body; only the message goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip)]
    pub class: ErrorClass,
}

/// Body of the response to an [`EstimateRequest`].
///
/// Serializes as the bare result on success and as `{"error": "..."}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EstimateResponse {
    Success(EstimationResult),
    Failure(ErrorBody),
}

impl EstimateResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, EstimateResponse::Success(_))
    }

    /// `None` on success, otherwise who is at fault.
    pub fn error_class(&self) -> Option<ErrorClass> {
        match self {
            EstimateResponse::Success(_) => None,
            EstimateResponse::Failure(body) => Some(body.class),
        }
    }
}

impl From<EstimationError> for EstimateResponse {
    fn from(err: EstimationError) -> Self {
        let class = err.class();
        let message = match &err {
            EstimationError::Input(input) => input.to_string(),
            EstimationError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };
        EstimateResponse::Failure(ErrorBody {
            error: message,
            class,
        })
    }
}

impl From<Result<EstimationResult, EstimationError>> for EstimateResponse {
    fn from(outcome: Result<EstimationResult, EstimationError>) -> Self {
        match outcome {
            Ok(result) => EstimateResponse::Success(result),
            Err(err) => err.into(),
        }
    }
}

#[instrument(skip_all, name = "estimate_workflow")]
pub fn handle(estimator: &Estimator, request: &EstimateRequest) -> EstimateResponse {
    let outcome = estimator.estimate(request.structure.as_deref());
    if let Err(err) = &outcome {
        if err.class() == ErrorClass::Server {
            error!("Error estimating properties: {}", err);
        }
    }
    outcome.into()
}
