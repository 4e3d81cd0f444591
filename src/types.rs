use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
}
