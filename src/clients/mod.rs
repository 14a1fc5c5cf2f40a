pub mod github_client;
pub mod leetcode_client;

pub use github_client::GithubClient;
pub use leetcode_client::LeetCodeClient;
