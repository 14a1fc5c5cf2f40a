pub mod github;
pub mod leetcode;
pub mod problem;

pub use github::{CodeSearchItem, CodeSearchResponse};
pub use leetcode::{DailyChallengeData, GraphQlResponse, SessionStatus};
pub use problem::{ProblemRef, SourceLocation};
