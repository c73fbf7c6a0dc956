use anyhow::ensure;
use base64::{engine::general_purpose, Engine as _};

/// Gate in front of the static admin page. Holds the one password configured
/// at startup, immutable for the process lifetime; the check itself is
/// stateless per request.
pub struct AdminPortal {
    password: String,
}

impl AdminPortal {
    /// Build the portal. An empty password is a startup error: the process
    /// must not begin serving without the gate configured.
    pub fn new(password: impl Into<String>) -> anyhow::Result<Self> {
        let password = password.into();
        ensure!(!password.is_empty(), "admin password not set");
        Ok(Self { password })
    }

    /// True when the `Authorization` header carries Basic credentials for
    /// the user `admin` with the configured password.
    pub fn authorize(&self, authorization: Option<&str>) -> bool {
        match authorization.and_then(basic_credentials) {
            Some((user, password)) => user == "admin" && password == self.password,
            None => false,
        }
    }
}

/// Decode `Basic <base64(user:pass)>`. The scheme is matched
/// case-insensitively; anything malformed yields `None`.
fn basic_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, password) = text.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}
