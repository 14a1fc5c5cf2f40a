//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 按固定顺序执行一次完整的每日一题提交，不回退、不续跑。
//!
//! ## 阶段
//!
//! ```text
//! ValidateSession     (LeetCodeClient)
//!     ↓
//! FetchDailyProblem   (LeetCodeClient)
//!     ↓
//! SearchSolution      (SolutionFlow → GithubClient)
//!     ↓
//! FetchRawContent     (SolutionFlow → GithubClient)
//!     ↓
//! ExtractAndNormalize (SolutionFlow → solution)
//!     ↓
//! Submit              (SubmissionService → browser)
//! ```
//!
//! 任何阶段失败都会生成 `RunOutcome::Failed`，由 `main` 统一决定退出码。

pub mod app;

pub use app::{App, RunOutcome, Stage};
