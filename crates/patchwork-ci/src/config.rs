use crate::CiError;
use patchwork_schema::CiSection;
use std::time::Duration;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone)]
pub struct CiConfig {
    pub api_base: String,
    pub repo: String,
    pub timeout: Duration,
    pub auth_token: Option<String>,
}

impl CiConfig {
    pub fn new(api_base: &str, repo: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_owned(),
            repo: repo.trim_matches('/').to_owned(),
            timeout: Duration::from_secs(30),
            auth_token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from the `[ci]` section, taking the token from the section or,
    /// failing that, from `GITHUB_TOKEN`.
    pub fn from_section(section: &CiSection) -> Result<Self, CiError> {
        if !section.repo.contains('/') {
            return Err(CiError::Config(format!(
                "repo must look like '<owner>/<repo>', got '{}'",
                section.repo
            )));
        }
        let mut config = Self::new(&section.api_base, &section.repo)
            .with_timeout(Duration::from_secs(section.timeout_secs));
        let token = section
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .filter(|t| !t.trim().is_empty());
        if let Some(token) = token {
            config = config.with_token(&token);
        }
        Ok(config)
    }

    pub fn runs_url(&self, limit: usize) -> String {
        format!(
            "{}/repos/{}/actions/runs?per_page={limit}",
            self.api_base, self.repo
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = CiConfig::new("https://api.example.com/", "/acme/app/");
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.repo, "acme/app");
    }

    #[test]
    fn runs_url_includes_page_size() {
        let config = CiConfig::new("https://api.github.com", "acme/app");
        assert_eq!(
            config.runs_url(5),
            "https://api.github.com/repos/acme/app/actions/runs?per_page=5"
        );
    }

    #[test]
    fn from_section_uses_configured_timeout_and_token() {
        let section = CiSection {
            repo: "acme/app".to_owned(),
            timeout_secs: 7,
            token: Some("secret".to_owned()),
            ..CiSection::default()
        };
        let config = CiConfig::from_section(&section).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
    }

    #[test]
    fn from_section_rejects_bare_repo() {
        let section = CiSection {
            repo: "app".to_owned(),
            ..CiSection::default()
        };
        assert!(matches!(
            CiConfig::from_section(&section),
            Err(CiError::Config(_))
        ));
    }
}
