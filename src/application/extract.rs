use crate::domain::{AuthError, HeaderSet, API_KEY_SCHEME};

const AUTHORIZATION_HEADER: &str = "authorization";

/// Extract the API key from an `Authorization: ApiKey <token>` header.
///
/// The header name is matched case-insensitively; the `ApiKey` scheme is not.
/// Only the first value of `Authorization` is consulted.
///
/// ```
/// use apikey_auth::{get_api_key, AuthError};
///
/// let headers = [("authorization", "ApiKey sk_test_123")];
/// assert_eq!(get_api_key(&headers), Ok("sk_test_123"));
///
/// let headers = [("Authorization", "Bearer sk_test_123")];
/// assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
/// ```
pub fn get_api_key<H: HeaderSet + ?Sized>(headers: &H) -> Result<&str, AuthError> {
    let raw = headers
        .header(AUTHORIZATION_HEADER)
        .ok_or(AuthError::NoAuthHeader)?;
    let value = std::str::from_utf8(raw).map_err(|_| AuthError::MalformedHeader)?;
    parse_authorization(value)
}

/// Parse a raw `Authorization` value of the form `ApiKey <token>`.
///
/// The value is split once, on its first space. Leading spaces of the
/// remainder belong to the token, which then ends at the next space.
/// `"ApiKey "` yields an empty token rather than an error.
pub fn parse_authorization(value: &str) -> Result<&str, AuthError> {
    let (scheme, remainder) = value
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(AuthError::MalformedHeader);
    }

    let leading = remainder.len() - remainder.trim_start_matches(' ').len();
    let end = remainder[leading..]
        .find(' ')
        .map_or(remainder.len(), |i| leading + i);

    Ok(&remainder[..end])
}
