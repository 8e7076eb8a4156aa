//! Endpoint resolution across candidate routes.
//!
//! Several operations have been deployed under different routes over time.
//! Candidates are tried strictly in order; a failure only moves on to the next
//! candidate when it looks like "this route does not exist" (see
//! [`is_advanceable`]). Anything else is a real answer and is returned as is.

use promohub_domain::constants::{DEFAULT_RETRYABLE_STATUSES, NO_CANDIDATE_PATHS_MESSAGE};
use promohub_domain::{
    routes, unwrap_items, ApiError, Business, LookupSource, OwnedBusiness, RequestOptions,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::ports::RequestExecutor;
use super::response::decode_value;

/// Whether `error` licenses trying the next candidate path.
///
/// True when the status is in `retryable_statuses`, or when the message reads
/// like a not-found condition regardless of status.
pub fn is_advanceable(error: &ApiError, retryable_statuses: &[u16]) -> bool {
    let by_status = error.status().is_some_and(|status| retryable_statuses.contains(&status));
    by_status || error.is_not_found_like()
}

/// Try `paths` in order and return the first non-advanceable outcome.
///
/// # Errors
/// * [`ApiError::Internal`] if `paths` is empty
/// * the first non-advanceable failure
/// * the last failure once every path has been exhausted
pub async fn resolve<E>(
    executor: &E,
    paths: &[String],
    options: &RequestOptions,
    retryable_statuses: &[u16],
) -> Result<Value, ApiError>
where
    E: RequestExecutor + ?Sized,
{
    let mut last_error = None;

    for (index, path) in paths.iter().enumerate() {
        match executor.execute(path, options).await {
            Ok(value) => return Ok(value),
            Err(err) if is_advanceable(&err, retryable_statuses) => {
                debug!(path = %path, attempt = index + 1, status = ?err.status(), "Candidate route unavailable, advancing");
                last_error = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    Err(last_error.unwrap_or_else(|| ApiError::Internal(NO_CANDIDATE_PATHS_MESSAGE.to_string())))
}

/// [`resolve`] with the default retryable statuses, decoded into `T`.
///
/// # Errors
/// As [`resolve`], plus [`ApiError::Decode`] if the payload does not fit `T`.
pub async fn resolve_as<T, E>(
    executor: &E,
    paths: &[String],
    options: &RequestOptions,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    E: RequestExecutor + ?Sized,
{
    let value = resolve(executor, paths, options, DEFAULT_RETRYABLE_STATUSES).await?;
    decode_value(value)
}

/// Primary route with a single legacy alias.
///
/// # Errors
/// As [`resolve`].
pub async fn request_with_fallback<E>(
    executor: &E,
    primary: &str,
    fallback: &str,
    options: &RequestOptions,
) -> Result<Value, ApiError>
where
    E: RequestExecutor + ?Sized,
{
    let paths = [primary.to_string(), fallback.to_string()];
    resolve(executor, &paths, options, DEFAULT_RETRYABLE_STATUSES).await
}

/// Look the caller's business up through the identity and owner routes only.
///
/// Owner routes are skipped when `owner_id` is `None`. A route that answers
/// with `null` or an empty listing counts as not found, so the next route is
/// tried.
///
/// # Errors
/// The first non-advanceable failure, otherwise the last not-found outcome.
pub async fn find_business_direct<E>(executor: &E, owner_id: Option<i64>) -> Result<Business, ApiError>
where
    E: RequestExecutor + ?Sized,
{
    let mut paths = routes::current_business_identity_paths();
    if let Some(owner_id) = owner_id {
        paths.extend(routes::current_business_owner_paths(owner_id));
    }

    let options = RequestOptions::get();
    let mut last_error = None;

    for (index, path) in paths.iter().enumerate() {
        match executor.execute(path, &options).await {
            Ok(value) => match pick_business(value, owner_id)? {
                Some(business) => return Ok(business),
                None => {
                    debug!(path = %path, attempt = index + 1, "Business route answered empty, advancing");
                    last_error = Some(business_not_found());
                }
            },
            Err(err) if is_advanceable(&err, DEFAULT_RETRYABLE_STATUSES) => {
                debug!(path = %path, attempt = index + 1, status = ?err.status(), "Business route unavailable, advancing");
                last_error = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    Err(last_error.unwrap_or_else(business_not_found))
}

/// Degraded mode: fetch the whole business collection and scan it for
/// `owner_id`. Cost grows with the number of businesses on the platform.
///
/// # Errors
/// Failures fetching or decoding the collection.
pub async fn scan_for_owned_business<E>(executor: &E, owner_id: i64) -> Result<Option<Business>, ApiError>
where
    E: RequestExecutor + ?Sized,
{
    let value = executor.execute(routes::BUSINESSES, &RequestOptions::get()).await?;
    let businesses: Vec<Business> = unwrap_items(value).map_err(|err| ApiError::Decode {
        status: 200,
        message: format!("Unexpected business listing: {err}"),
    })?;
    debug!(owner_id, scanned = businesses.len(), "Scanned business collection");
    Ok(businesses.into_iter().find(|business| business.owner_id == owner_id))
}

/// Resolve the caller's business, falling back to a collection scan.
///
/// The scan only runs when `owner_id` is supplied. If it finds nothing (or
/// fails) the error from the direct lookup is returned unchanged.
///
/// # Errors
/// The direct lookup's error when no business could be found.
pub async fn find_owned_business<E>(executor: &E, owner_id: Option<i64>) -> Result<OwnedBusiness, ApiError>
where
    E: RequestExecutor + ?Sized,
{
    let direct_error = match find_business_direct(executor, owner_id).await {
        Ok(business) => return Ok(OwnedBusiness { business, source: LookupSource::Direct }),
        Err(err) => err,
    };

    let Some(owner_id) = owner_id else {
        return Err(direct_error);
    };

    info!(owner_id, error = %direct_error, "Business routes unavailable, scanning business collection");
    match scan_for_owned_business(executor, owner_id).await {
        Ok(Some(business)) => Ok(OwnedBusiness { business, source: LookupSource::CollectionScan }),
        Ok(None) => Err(direct_error),
        Err(scan_error) => {
            warn!(owner_id, error = %scan_error, "Business collection scan failed");
            Err(direct_error)
        }
    }
}

/// Single business from an object, array or page payload.
fn pick_business(value: Value, owner_id: Option<i64>) -> Result<Option<Business>, ApiError> {
    if value.is_null() {
        return Ok(None);
    }
    if value.is_object() && value.get("content").is_none() {
        return decode_value(value).map(Some);
    }

    let businesses: Vec<Business> = unwrap_items(value).map_err(|err| ApiError::Decode {
        status: 200,
        message: format!("Unexpected business listing: {err}"),
    })?;
    Ok(match owner_id {
        Some(owner_id) => businesses.into_iter().find(|b| b.owner_id == owner_id),
        None => businesses.into_iter().next(),
    })
}

fn business_not_found() -> ApiError {
    ApiError::Http { status: 404, message: "Business not found".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advanceable_by_status() {
        let not_found = ApiError::Http { status: 404, message: "Whatever".into() };
        assert!(is_advanceable(&not_found, &[404]));
        assert!(!is_advanceable(&not_found, &[]));

        let gone = ApiError::Http { status: 410, message: "Gone".into() };
        assert!(is_advanceable(&gone, &[404, 410]));
    }

    #[test]
    fn test_advanceable_by_message() {
        let wrapped = ApiError::Envelope { status: 200, message: "Resource not found".into() };
        assert!(is_advanceable(&wrapped, &[404]));

        let server = ApiError::Http { status: 500, message: "Internal Server Error".into() };
        assert!(!is_advanceable(&server, &[404]));

        let transport = ApiError::Transport { message: "unreachable".into() };
        assert!(!is_advanceable(&transport, &[404]));
    }

    #[test]
    fn test_pick_business_shapes() {
        let single = serde_json::json!({"id": 1, "ownerId": 7});
        assert_eq!(pick_business(single, Some(7)).unwrap().unwrap().id, 1);

        let listing = serde_json::json!([{"id": 1, "ownerId": 3}, {"id": 2, "ownerId": 7}]);
        assert_eq!(pick_business(listing, Some(7)).unwrap().unwrap().id, 2);

        let page = serde_json::json!({"content": []});
        assert!(pick_business(page, Some(7)).unwrap().is_none());
        assert!(pick_business(Value::Null, None).unwrap().is_none());
    }
}
