use axum::http::HeaderValue;
use color_eyre::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, max_age: u64, secure: bool) -> Result<HeaderValue> {
    let secure = if secure { "; Secure" } else { "" };
    let header =
        format!("{name}={value}; HttpOnly; Max-Age={max_age}; Path=/; SameSite=Strict{secure}");
    Ok(header.parse()?)
}

pub fn expired_cookie(name: &str, secure: bool) -> Result<HeaderValue> {
    cookie(name, "", 0, secure)
}
