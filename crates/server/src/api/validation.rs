use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use shared::{
    command::UpdateStateCommand,
    error::{ApiError, CommandError},
};
use tracing::{debug, warn};

use super::envelope::Failure;

/// Body extractor for `POST /v1/plates`. Handlers taking it only run once
/// every field of the command has been checked.
#[derive(Debug)]
pub(crate) struct ValidPlates(pub(crate) UpdateStateCommand);

#[async_trait]
impl<S> FromRequest<S> for ValidPlates
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!(%rejection, "failed to read request body");
            Failure(rejection.status())
        })?;

        match UpdateStateCommand::from_json(&body) {
            Ok(command) => {
                debug!(?command, "validated plate update");
                Ok(Self(command))
            }
            Err(CommandError::Malformed(error)) => {
                warn!(
                    body = %String::from_utf8_lossy(&body),
                    %error,
                    "request body is invalid"
                );
                Err(Failure(StatusCode::BAD_REQUEST))
            }
            Err(err) => {
                warn!(
                    body = %String::from_utf8_lossy(&body),
                    errs = %err,
                    "request body value is invalid"
                );
                Err(Failure::from(&ApiError::from(err)))
            }
        }
    }
}
