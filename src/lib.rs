pub mod config;
pub mod error;
pub mod models;
pub mod readme;
pub mod repo;
pub mod report;
pub mod utils;

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use error::Result;
use models::RepositoryRef;
use readme::write_to_readme;
use repo::{count_commits, list_repositories, RepositoryHost};
use report::render_report;
use utils::footer_timestamp;

// Lists the repositories and counts each one's commits, one request at a time
pub fn collect_activity(host: &impl RepositoryHost, now: DateTime<Utc>) -> Result<Vec<RepositoryRef>> {
    let repos = list_repositories(host)?;
    println!("📊 正在分析 {} 个仓库的提交情况...", repos.len());

    let mut repos_data = Vec::with_capacity(repos.len());
    for repo in &repos {
        let commit_count = count_commits(host, repo, now);
        println!("  ✓ {}: {} 个提交", repo.full_name, commit_count);
        repos_data.push(RepositoryRef::new(repo, commit_count));
    }

    Ok(repos_data)
}

// Whole run: collect, render, then rewrite the README at `readme_path`
pub fn run(host: &impl RepositoryHost, readme_path: &Path, now: DateTime<Utc>) -> Result<Vec<RepositoryRef>> {
    let repos_data = collect_activity(host, now)?;

    let report = render_report(&repos_data);
    write_to_readme(readme_path, &report, &footer_timestamp(now))?;
    info!(path = %readme_path.display(), repos = repos_data.len(), "README rewritten");

    println!("✅ README.md 已更新，包含 {} 个仓库的提交信息", repos_data.len());
    Ok(repos_data)
}
