pub mod document;
pub mod homepage;
pub mod session;
pub mod topic;

use axum::http::{header::SET_COOKIE, HeaderMap};

use crate::{
    names,
    rejections::{AppError, ResultExt},
    utils,
};

/// Reuses the browser's quiz session token or mints a new one. The cookie is
/// always re-sent so its expiry follows the last submit.
pub(crate) fn session_token(
    existing: Option<String>,
    secure: bool,
) -> Result<(String, HeaderMap), AppError> {
    let token = existing.unwrap_or_else(|| ulid::Ulid::new().to_string());
    let cookie = utils::cookie(
        names::QUIZ_SESSION_COOKIE_NAME,
        &token,
        names::QUIZ_SESSION_COOKIE_MAX_AGE,
        secure,
    )
    .reject("could not build quiz session cookie")?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    Ok((token, headers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_token_is_kept() {
        let existing = ulid::Ulid::new().to_string();
        let (token, headers) = session_token(Some(existing.clone()), false).unwrap();

        assert_eq!(token, existing);
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with(&format!("quiz_session={existing};")));
    }

    #[test]
    fn missing_token_is_minted() {
        let (token, _) = session_token(None, true).unwrap();
        assert!(ulid::Ulid::from_string(&token).is_ok());
    }
}
