use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Url;
use tracing::{debug, warn};

use crate::config::{EXCLUDED_REPO, GITHUB_API_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::models::{ApiErrorBody, Repository};
use crate::utils::{lookback_window, to_query_timestamp};

const PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT_SECS: u64 = 30;

// The two questions the pipeline asks of the hosting service
pub trait RepositoryHost {
    // Every repository owned by the authenticated user, in API order
    fn repositories(&self) -> Result<Vec<Repository>>;

    // Number of commits on the default branch within `[since, until]`
    fn commit_count(&self, full_name: &str, since: DateTime<Utc>, until: DateTime<Utc>) -> Result<u32>;
}

/// Blocking GitHub REST client authenticated with a personal access token.
pub struct GitHubClient {
    base_url: String,
    http: Client,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(GITHUB_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url: base_url.into(), http })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let base = self.base_url.trim_end_matches('/');
        self.http.get(format!("{}/{}", base, path.trim_start_matches('/')))
    }
}

impl RepositoryHost for GitHubClient {
    fn repositories(&self) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();
        let mut page = 1u32;

        // Keep fetching until GitHub hands back a short page
        loop {
            let response = self
                .get("/user/repos")
                .query(&[("type", "owner")])
                .query(&[("per_page", PER_PAGE), ("page", page)])
                .send()?;
            let batch: Vec<Repository> = check_status(response)?.json()?;
            let done = batch.len() < PER_PAGE as usize;
            debug!(page, count = batch.len(), "fetched repository page");
            repos.extend(batch);
            if done {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    fn commit_count(&self, full_name: &str, since: DateTime<Utc>, until: DateTime<Utc>) -> Result<u32> {
        // One commit per page, so the number of the last page is the total
        let response = self
            .get(&format!("/repos/{}/commits", full_name))
            .query(&[("since", to_query_timestamp(since)), ("until", to_query_timestamp(until))])
            .query(&[("per_page", 1u32)])
            .send()?;
        let response = check_status(response)?;

        let last_page = response
            .headers()
            .get(header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_last_page);

        match last_page {
            Some(total) => Ok(total),
            None => {
                let commits: Vec<serde_json::Value> = response.json()?;
                Ok(commits.len() as u32)
            }
        }
    }
}

// Turns a non-2xx response into `Error::Api`, keeping GitHub's message when it sent one
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|err| err.message)
        .unwrap_or(body);
    Err(Error::Api { status: status.as_u16(), message })
}

// Extracts the `page` parameter of the `rel="last"` entry of a Link header
pub fn parse_last_page(link: &str) -> Option<u32> {
    link.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        if !params.split(';').any(|p| p.trim() == r#"rel="last""#) {
            return None;
        }
        let url = Url::parse(target.trim().trim_start_matches('<').trim_end_matches('>')).ok()?;
        let page = url.query_pairs().find(|(key, _)| key == "page")?.1;
        page.parse().ok()
    })
}

// Repository Lister: the user's repositories minus the profile repository
pub fn list_repositories(host: &impl RepositoryHost) -> Result<Vec<Repository>> {
    let repos = host.repositories()?;
    Ok(repos.into_iter().filter(|repo| repo.full_name != EXCLUDED_REPO).collect())
}

// Commit Counter: commits in the last 24h, or 0 when the lookup fails
pub fn count_commits(host: &impl RepositoryHost, repo: &Repository, now: DateTime<Utc>) -> u32 {
    let (since, until) = lookback_window(now);
    match host.commit_count(&repo.full_name, since, until) {
        Ok(count) => count,
        Err(e) => {
            println!("获取仓库 {} 的提交数量时出错: {}", repo.full_name, e);
            warn!(repo = %repo.full_name, error = %e, "commit count failed, reporting 0");
            0
        }
    }
}
