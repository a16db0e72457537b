use serde::{Deserialize, Serialize};

/// Extensions whose content types are never parsed as pages
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    // documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "rtf",
    // archives
    "zip", "rar", "gz", "tar", "7z", "bz2",
    // images
    "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "bmp", "tiff",
    // stylesheets and scripts
    "css", "js", "json",
    // fonts
    "woff", "woff2", "ttf", "otf", "eot",
    // executables
    "exe", "msi", "dmg", "apk", "bin",
];

/// Main configuration structure for Site-Census
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlerConfig {
    /// Page the crawl starts from; its host becomes the host filter
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Number of link hops followed from the seed (0 = seed only)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Whole-request timeout (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout", default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Extensions whose declared content types are skipped
    #[serde(rename = "excluded-extensions", default = "default_excluded_extensions")]
    pub excluded_extensions: Vec<String>,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where to write the markdown summary, if anywhere
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,

    /// How many entries frequency charts keep
    #[serde(rename = "top-words", default = "default_top_words")]
    pub top_words: usize,

    /// Whether every page gets its own record in the report
    #[serde(rename = "per-page", default = "default_per_page")]
    pub per_page: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_path: None,
            top_words: default_top_words(),
            per_page: default_per_page(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_top_words() -> usize {
    20
}

fn default_per_page() -> bool {
    true
}

pub(crate) fn default_excluded_extensions() -> Vec<String> {
    DEFAULT_EXCLUDED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}
