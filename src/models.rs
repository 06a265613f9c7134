use serde::Deserialize;

// Repository entry from `GET /user/repos`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
}

// One row of the activity report, built fresh every run
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRef {
    pub name: String,
    pub full_name: String,
    pub commit_count: u32,
}

impl RepositoryRef {
    pub fn new(repo: &Repository, commit_count: u32) -> Self {
        Self {
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            commit_count,
        }
    }

    pub fn is_active(&self) -> bool {
        self.commit_count > 0
    }

    pub fn html_url(&self) -> String {
        format!("https://github.com/{}", self.full_name)
    }
}

// Error payload GitHub sends along with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
