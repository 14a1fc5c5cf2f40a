//! LeetCode 接口的数据结构

use serde::Deserialize;
use serde_json::Value;

/// GraphQL 通用响应
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<Value>>,
}

/// `questionOfTheDay` 查询的 data 部分
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeData {
    pub active_daily_coding_challenge_question: Option<DailyChallenge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyChallenge {
    pub question: DailyQuestion,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestion {
    pub title: String,
    pub title_slug: String,
}

/// `/api/problems/all/` 响应中与会话有关的部分
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub user_name: Value,
}

impl SessionStatus {
    /// 返回登录用户名；未登录时接口返回 null 或空串
    pub fn identity(&self) -> Option<String> {
        if !is_truthy(&self.user_name) {
            return None;
        }
        match &self.user_name {
            Value::String(name) => Some(name.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
