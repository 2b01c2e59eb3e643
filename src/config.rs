use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port to bind. Set via APPROVD_PORT env var. Default: 5000.
    pub port: u16,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    Ok(Config {
        port: std::env::var("APPROVD_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000),
    })
}
