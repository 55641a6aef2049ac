use tracing::info;

use crate::output::QuoteStyle;

/// Environment variable naming the Postgres store that holds the
/// enabled-sensor allowlist. Unset or empty means the allowlist collaborator
/// is not wired in and every sensor document is treated as enabled.
pub const POSTGRES_URL_ENV: &str = "SECRET_TUNNEL_POSTGRES_URL";

/// Run-wide configuration, built once at startup. Nothing here mutates after
/// initialisation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub quote_style: QuoteStyle,
    pub postgres_url: Option<String>,
}

impl RunConfig {
    /// Builds the configuration from CLI flags and the process environment.
    pub fn new(single_quote: bool) -> Self {
        let postgres_url = std::env::var(POSTGRES_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty());

        RunConfig {
            quote_style: if single_quote {
                QuoteStyle::Single
            } else {
                QuoteStyle::Double
            },
            postgres_url,
        }
    }

    pub fn trace_loaded(&self) {
        // The URL itself carries credentials and stays out of the logs.
        info!(
            quote_style = ?self.quote_style,
            allowlist_wired = self.postgres_url.is_some(),
            "Loaded RunConfig"
        );
    }
}
