use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub admin_password: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            // May be present but empty; the admin portal rejects that at
            // construction time.
            admin_password: std::env::var("ADMIN_PASSWORD")
                .context("ADMIN_PASSWORD must be set")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
