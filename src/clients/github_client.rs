//! GitHub API 客户端
//!
//! 封装代码搜索和原始文件下载

use reqwest::header::ACCEPT;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::github::CodeSearchResponse;
use crate::models::problem::SourceLocation;
use crate::utils::logging::truncate_text;

const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// 题解仓库所有者
pub const REPO_OWNER: &str = "kamyu104";
/// 题解仓库名称
pub const REPO_NAME: &str = "LeetCode-Solutions";
/// 题解文件扩展名
pub const SOLUTION_EXTENSION: &str = "cpp";

/// GitHub 要求所有请求带 User-Agent
const CLIENT_USER_AGENT: &str = concat!("leetcode-daily-submit/", env!("CARGO_PKG_VERSION"));

/// GitHub 客户端
pub struct GithubClient {
    http: reqwest::Client,
    api_base_url: String,
    token: String,
}

impl GithubClient {
    /// 创建新的 GitHub 客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Self::with_base_url(config, GITHUB_API_BASE_URL)
    }

    /// 使用自定义 API 地址创建客户端
    pub fn with_base_url(config: &Config, api_base_url: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            api_base_url: api_base_url.into(),
            token: config.github_token.clone(),
        })
    }

    /// 在题解仓库中搜索指定 slug 的题解文件
    ///
    /// # 参数
    /// - `slug`: 题目 slug（已将空格替换为连字符）
    ///
    /// # 返回
    /// 返回题解文件的原始内容地址
    pub async fn search_solution(&self, slug: &str) -> AppResult<SourceLocation> {
        let url = format!("{}/search/code", self.api_base_url);
        let query = build_search_query(slug);
        info!("🔍 正在请求 GitHub 代码搜索: {} (q={})", url, query);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query.as_str())])
            .header(ACCEPT, "application/vnd.github.v3+json")
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        info!("GitHub 响应状态: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("GitHub API 错误响应: {}", truncate_text(&body, 500));
            return Err(AppError::remote_query(
                url,
                format!("GitHub API 返回状态码 {}", status),
            ));
        }

        let body: CodeSearchResponse = response.json().await?;
        debug!("搜索结果总数: {}", body.total_count);

        select_solution(&body, slug).map_err(|e| {
            error!("搜索题解失败: {}", e);
            e
        })
    }

    /// 下载原始文件内容
    pub async fn fetch_raw_content(&self, location: &SourceLocation) -> AppResult<String> {
        info!("📥 正在下载原始文件: {}", location.raw_url);

        let response = self.http.get(&location.raw_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            error!("下载原始文件失败，状态码: {}", status);
            return Err(AppError::remote_query(
                location.raw_url.clone(),
                format!("下载原始文件失败，状态码 {}", status),
            ));
        }

        let content = response.text().await?;
        debug!("原始文件长度: {} 字节", content.len());
        Ok(content)
    }
}

/// 构造代码搜索的查询串
pub fn build_search_query(slug: &str) -> String {
    format!(
        "filename:{}.{} repo:{}/{}",
        slug, SOLUTION_EXTENSION, REPO_OWNER, REPO_NAME
    )
}

/// 从搜索结果中挑出路径包含 slug 的第一个文件（不区分大小写）
pub fn select_solution(response: &CodeSearchResponse, slug: &str) -> AppResult<SourceLocation> {
    if response.total_count == 0 || response.items.is_empty() {
        return Err(AppError::no_matching_solution(format!(
            "仓库中没有题目 {} 的题解",
            slug
        )));
    }

    let needle = slug.to_lowercase();
    let item = response
        .items
        .iter()
        .find(|item| item.path.to_lowercase().contains(&needle))
        .ok_or_else(|| {
            AppError::no_matching_solution(format!("没有与题目 {} 相关的题解文件", slug))
        })?;
    debug!("选中题解文件: {} ({})", item.name, item.path);

    Ok(SourceLocation {
        path: item.path.clone(),
        raw_url: to_raw_url(&item.html_url),
    })
}

/// 把网页地址改写为 raw.githubusercontent.com 的原始内容地址
pub fn to_raw_url(html_url: &str) -> String {
    html_url
        .replacen("github.com", "raw.githubusercontent.com", 1)
        .replacen("/blob/", "/", 1)
}
