use std::path::Path;
use std::process;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use readme_activity::config::{github_token, README_PATH, TOKEN_VAR};
use readme_activity::repo::GitHubClient;
use readme_activity::run;

fn main() {
    // Diagnostics go to stderr; progress lines stay on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("Building README.md");

    // Bail out before touching the network when there is no credential
    let token = match github_token() {
        Ok(token) => token,
        Err(_) => {
            println!("错误: 未找到 {} 环境变量，请设置有效的 GitHub token", TOKEN_VAR);
            process::exit(1);
        }
    };

    let result = GitHubClient::new(token).and_then(|client| run(&client, Path::new(README_PATH), Utc::now()));
    if let Err(e) = result {
        eprintln!("Failed to update {}: {}", README_PATH, e);
        process::exit(1);
    }
}
