//! GitHub 代码搜索接口的数据结构

use serde::Deserialize;

/// `/search/code` 响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeSearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<CodeSearchItem>,
}

/// 单个搜索结果
#[derive(Debug, Clone, Deserialize)]
pub struct CodeSearchItem {
    #[serde(default)]
    pub name: String,
    pub path: String,
    pub html_url: String,
}
