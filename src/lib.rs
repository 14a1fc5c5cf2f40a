//! # LeetCode Daily Submit
//!
//! 自动提交 LeetCode 每日一题：从公开题解仓库找到对应的 C++ 题解，
//! 截取解题类后通过浏览器写入编辑器并提交。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `browser/` - 启动与关闭浏览器
//! - `JsExecutor` - 唯一的 page owner，提供 eval() 能力
//!
//! ### ② 客户端与能力层（Clients / Services）
//! - `LeetCodeClient` - 会话校验、每日一题查询
//! - `GithubClient` - 代码搜索、原始文件下载
//! - `SubmissionService` - 注入代码并点击提交
//!
//! ### ③ 流程层（Workflow）
//! - `SolutionFlow` - 搜索 → 下载 → 截取 → 清理
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 按阶段顺序执行，生成 `RunOutcome`
//!
//! ## 模块结构

pub mod browser;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod solution;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ExtractError};
pub use infrastructure::JsExecutor;
pub use models::{ProblemRef, SourceLocation};
pub use orchestrator::{App, RunOutcome, Stage};
pub use solution::{extract, normalize, ExtractedBlock, NormalizedCode};
pub use workflow::SolutionFlow;
