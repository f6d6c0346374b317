//! Server Configuration

/// Runtime configuration, read once at process start and passed down by
/// parameter.
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub environment: String,
    pub log_level: String,

    /// Shared admin secret for mutating operations. Empty never authorizes.
    pub admin_password: String,
    /// Origins the access policy echoes back.
    pub allowed_origins: Vec<String>,

    pub github: GitHubConfig,
}

/// Coordinates of the remote blob holding the catalog.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// API base, overridable so tests can point at a local stand-in.
    pub api_url: String,
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub file_path: String,
}

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5500,http://127.0.0.1:5500";

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),

            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_default(),
            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.into()),
            ),

            github: GitHubConfig {
                api_url: std::env::var("GITHUB_API_URL")
                    .unwrap_or_else(|_| "https://api.github.com".into()),
                token: std::env::var("GITHUB_TOKEN").unwrap_or_default(),
                owner: std::env::var("GITHUB_OWNER").unwrap_or_default(),
                repo: std::env::var("GITHUB_REPO").unwrap_or_default(),
                file_path: std::env::var("GITHUB_FILE_PATH")
                    .unwrap_or_else(|_| "products.json".into()),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl GitHubConfig {
    /// Contents endpoint for the configured blob.
    pub fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.file_path
        )
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_empties() {
        let origins = parse_origins(" https://a.example , http://b.example ,, ");
        assert_eq!(origins, vec!["https://a.example", "http://b.example"]);
    }

    #[test]
    fn test_contents_url() {
        let github = GitHubConfig {
            api_url: "https://api.github.com/".into(),
            token: String::new(),
            owner: "acme".into(),
            repo: "storefront".into(),
            file_path: "products.json".into(),
        };
        assert_eq!(
            github.contents_url(),
            "https://api.github.com/repos/acme/storefront/contents/products.json"
        );
    }
}
