//! 单次运行中流转的领域对象

use std::fmt;

/// LeetCode 题目页面的基础地址
pub const LEETCODE_BASE_URL: &str = "https://leetcode.com";

/// 每日一题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRef {
    /// 题目标题，如 `Two Sum`
    pub title: String,
    /// 题目 slug，如 `two-sum`
    pub slug: String,
}

impl ProblemRef {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }

    /// 用于搜索文件名的 slug（空格替换为连字符）
    pub fn normalized_slug(&self) -> String {
        self.slug.trim().replace(' ', "-")
    }

    /// 题目页面地址
    pub fn problem_url(&self) -> String {
        format!("{}/problems/{}/", LEETCODE_BASE_URL, self.normalized_slug())
    }
}

impl fmt::Display for ProblemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.slug)
    }
}

/// 题解文件的原始内容地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// 仓库中的文件路径
    pub path: String,
    /// raw.githubusercontent.com 上的地址
    pub raw_url: String,
}
