//! Configuration for decoding and validating the publication dataset.

/// Dataset format constants.
pub mod dataset {
    /// Base URL that relative publication paths are resolved against.
    pub const BASE_URL: &str = "https://www.researchgate.net";

    /// Prefix every publication id carries.
    pub const PUBLICATION_ID_PREFIX: &str = "PB:";

    /// Literal used for a missing float.
    pub const NAN_LITERAL: &str = "nan";

    /// Boolean literals (case-sensitive).
    pub const TRUE_LITERAL: &str = "True";
    pub const FALSE_LITERAL: &str = "False";

    /// URL schemes accepted by default.
    pub const DEFAULT_URL_SCHEMES: &[&str] = &["http", "https"];
}

/// Environment variables read by [`Config::from_env`].
pub mod env {
    pub const STRICT_HEADER_ORDER: &str = "NODES_STRICT_HEADER_ORDER";
    pub const REJECT_DUPLICATE_IDS: &str = "NODES_REJECT_DUPLICATE_IDS";
    pub const URL_SCHEMES: &str = "NODES_URL_SCHEMES";
    pub const BASE_URL: &str = "NODES_BASE_URL";
}

/// Decoder and validator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Require header columns in documented order.
    pub strict_header_order: bool,

    /// Report repeated `publication_id`s as row errors.
    pub reject_duplicate_ids: bool,

    /// URL schemes the validator accepts (lowercase).
    pub allowed_url_schemes: Vec<String>,

    /// Base URL for building publication links during extraction.
    pub base_url: String,
}

impl Config {
    /// Create the default configuration.
    ///
    /// Header order is advisory, duplicates are rejected and only
    /// `http`/`https` URLs validate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strict_header_order: false,
            reject_duplicate_ids: true,
            allowed_url_schemes: dataset::DEFAULT_URL_SCHEMES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            base_url: dataset::BASE_URL.to_string(),
        }
    }

    /// Create a strict configuration for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self { strict_header_order: true, ..Self::new() }
    }

    /// Create configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns error if a boolean variable is not `true`/`false`/`1`/`0`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup, starting from defaults.
    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(v) = read_bool(&lookup, env::STRICT_HEADER_ORDER)? {
            config.strict_header_order = v;
        }
        if let Some(v) = read_bool(&lookup, env::REJECT_DUPLICATE_IDS)? {
            config.reject_duplicate_ids = v;
        }
        if let Some(schemes) = lookup(env::URL_SCHEMES) {
            config.allowed_url_schemes = parse_schemes(&schemes);
        }
        if let Some(base) = lookup(env::BASE_URL) {
            config.base_url = base.trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    /// Check if a URL scheme is accepted.
    #[must_use]
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.allowed_url_schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn read_bool<F>(lookup: &F, name: &str) -> anyhow::Result<Option<bool>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => parse_bool(&value)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("{name} must be true or false, got {value:?}")),
        None => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_schemes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
