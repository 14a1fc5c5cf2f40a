//! 题解获取流程 - 流程层
//!
//! 流程顺序：
//! 1. 在题解仓库中搜索文件
//! 2. 下载原始内容
//! 3. 截取解题类并清理注释

use tracing::{debug, info};

use crate::clients::GithubClient;
use crate::config::Config;
use crate::error::{AppResult, ExtractError};
use crate::models::{ProblemRef, SourceLocation};
use crate::solution::{extract, normalize, NormalizedCode, SOLUTION_MARKER};

/// 题解获取流程
///
/// - 只负责"从题目到可提交代码"
/// - 不持有浏览器资源
pub struct SolutionFlow {
    github: GithubClient,
}

impl SolutionFlow {
    /// 创建新的题解获取流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            github: GithubClient::new(config)?,
        })
    }

    /// 使用指定的 GitHub 客户端创建流程
    pub fn with_client(github: GithubClient) -> Self {
        Self { github }
    }

    /// 搜索题解文件
    pub async fn locate(&self, problem: &ProblemRef) -> AppResult<SourceLocation> {
        let slug = problem.normalized_slug();
        info!("🔍 正在搜索题目 {} 的题解...", slug);

        let location = self.github.search_solution(&slug).await?;
        info!("✓ 找到题解文件: {}", location.raw_url);
        Ok(location)
    }

    /// 下载题解文件原始内容
    pub async fn download(&self, location: &SourceLocation) -> AppResult<String> {
        self.github.fetch_raw_content(location).await
    }

    /// 截取并清理题解代码
    ///
    /// 清理后为空（整个代码块都是注释）也视为截取失败
    pub fn prepare(raw: &str) -> AppResult<NormalizedCode> {
        let block = extract(raw, SOLUTION_MARKER)?;
        debug!("截取到代码块 {} 字节", block.as_str().len());

        let code = normalize(block.as_str());
        if code.is_empty() {
            return Err(ExtractError::EmptyAfterNormalize.into());
        }
        Ok(code)
    }
}
