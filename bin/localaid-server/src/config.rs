//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for localaid-server.
///
/// Every field except the gateway credential has a sensible default, so the
/// server starts out-of-the-box; `/chat` requests fail with a configuration
/// error until `LOCALAID_AI_API_KEY` is set.
#[derive(Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// Chat-completion endpoint of the upstream AI gateway.
    pub gateway_url: String,

    /// Bearer credential for the gateway.  `None` when `LOCALAID_AI_API_KEY`
    /// is unset or empty; never defaulted silently.
    pub api_key: Option<String>,

    /// Model identifier sent with every completion request.
    pub model: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI at `/swagger-ui` (disable in production).
    pub enable_swagger: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("gateway_url", &self.gateway_url)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .field("enable_swagger", &self.enable_swagger)
            .finish()
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("LOCALAID_BIND", "0.0.0.0:3000"),
            gateway_url: env_or(
                "LOCALAID_AI_GATEWAY_URL",
                "https://ai.gateway.lovable.dev/v1/chat/completions",
            ),
            api_key: std::env::var("LOCALAID_AI_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            model: env_or("LOCALAID_AI_MODEL", "google/gemini-2.5-flash"),
            log_level: env_or("LOCALAID_LOG", "info"),
            log_json: env_flag("LOCALAID_LOG_JSON", false),
            enable_swagger: env_flag("LOCALAID_ENABLE_SWAGGER", true),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key).map(|v| parse_flag(&v)).unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
