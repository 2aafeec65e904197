mod branding;
mod withdrawal;

pub use self::branding::BrandingApi;
pub use self::withdrawal::WithdrawalApi;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// Shared response handling for the upstream billing API: 404 maps to
/// `NotFound`, any other non-success to `Upstream` with the body kept
/// for the logs.
pub(crate) async fn parse_response<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T, AppError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound(format!("{what} not found")));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream(format!(
            "{what}: upstream returned {status}: {body}"
        )));
    }

    Ok(response.json::<T>().await?)
}
