use serde::Deserialize;

/// Default desktop-browser User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";

/// Main configuration structure for driftnet
///
/// Every section and field has a default, so the crawler runs without a
/// config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// TCP connect timeout in milliseconds
    #[serde(rename = "connect-timeout-ms", default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// Read timeout for the whole request in milliseconds
    #[serde(rename = "read-timeout-ms", default = "default_read_timeout")]
    pub read_timeout_ms: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where the result file and discovery log are created
    #[serde(rename = "storage-dir", default = "default_storage_dir")]
    pub storage_dir: String,

    /// Emit a progress log line every this many processed pages
    #[serde(rename = "progress-interval", default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_connect_timeout() -> u64 {
    3_000
}

fn default_read_timeout() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_storage_dir() -> String {
    "./file_storage".to_string()
}

fn default_progress_interval() -> u64 {
    10
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout(),
            read_timeout_ms: default_read_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            progress_interval: default_progress_interval(),
        }
    }
}
