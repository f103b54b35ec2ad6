use crate::{CiConfig, CiError, RunRecord, RunSource, RunsResponse};
use std::io::Read;

/// GitHub Actions REST client.
///
/// Issues exactly one request per call:
/// - `GET {api_base}/repos/{owner}/{repo}/actions/runs?per_page={limit}`
///
/// The request is unauthenticated unless a token is configured, in which case
/// it is sent as `Authorization: Bearer <token>`.
pub struct HttpRunSource {
    config: CiConfig,
    agent: ureq::Agent,
}

impl HttpRunSource {
    pub fn new(config: CiConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();
        Self { config, agent }
    }

    pub fn config(&self) -> &CiConfig {
        &self.config
    }

    fn do_get(&self, url: &str) -> Result<Vec<u8>, CiError> {
        let mut req = self
            .agent
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(ref token) = self.config.auth_token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = match req.call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(code)) => {
                return Err(CiError::Status {
                    code,
                    url: url.to_owned(),
                });
            }
            Err(e) => {
                return Err(CiError::Http(e.to_string()));
            }
        };

        let code = resp.status().as_u16();
        if code != 200 {
            return Err(CiError::Status {
                code,
                url: url.to_owned(),
            });
        }

        let mut reader = resp.into_body().into_reader();
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .map_err(|e| CiError::Http(e.to_string()))?;
        Ok(body)
    }
}

impl RunSource for HttpRunSource {
    fn recent_runs(&self, limit: usize) -> Result<Vec<RunRecord>, CiError> {
        let url = self.config.runs_url(limit);
        tracing::debug!("GET {url}");
        let body = self.do_get(&url)?;
        let parsed: RunsResponse =
            serde_json::from_slice(&body).map_err(|e| CiError::Serialization(e.to_string()))?;
        tracing::debug!("received {} run(s)", parsed.workflow_runs.len());
        Ok(parsed.workflow_runs.into_iter().take(limit).collect())
    }
}
