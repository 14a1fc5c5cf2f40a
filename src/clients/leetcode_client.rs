//! LeetCode API 客户端
//!
//! 封装会话校验和每日一题查询

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::StatusCode;
use serde_json::json;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::leetcode::{DailyChallengeData, GraphQlResponse, SessionStatus};
use crate::models::problem::{ProblemRef, LEETCODE_BASE_URL};

/// 会话 Cookie 名称
pub const SESSION_COOKIE_NAME: &str = "LEETCODE_SESSION";

const DAILY_PROBLEM_QUERY: &str = r#"
    query questionOfTheDay {
      activeDailyCodingChallengeQuestion {
        question {
          title
          titleSlug
        }
      }
    }
"#;

/// LeetCode 客户端
pub struct LeetCodeClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: String,
}

impl LeetCodeClient {
    /// 创建新的 LeetCode 客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Self::with_base_url(config, LEETCODE_BASE_URL)
    }

    /// 使用自定义地址创建客户端
    pub fn with_base_url(config: &Config, base_url: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    /// 检查会话是否有效
    ///
    /// # 返回
    /// 返回登录用户名
    pub async fn check_session(&self) -> AppResult<String> {
        let url = format!("{}/api/problems/all/", self.base_url);
        debug!("校验会话: {}", url);

        let response = self
            .http
            .get(&url)
            .header(COOKIE, format!("{}={}", SESSION_COOKIE_NAME, self.session_cookie))
            .send()
            .await?;

        let status = response.status();
        debug!("会话校验响应状态: {}", status);
        let body = if status == StatusCode::OK {
            response.json().await?
        } else {
            SessionStatus::default()
        };

        match evaluate_session(status, &body) {
            Ok(user_name) => {
                info!("✓ 会话有效，当前用户: {}", user_name);
                Ok(user_name)
            }
            Err(e) => {
                error!("会话无效，请更新 SESSION_COOKIE: {}", e);
                Err(e)
            }
        }
    }

    /// 获取每日一题
    pub async fn fetch_daily_problem(&self) -> AppResult<ProblemRef> {
        let url = format!("{}/graphql", self.base_url);
        info!("🔍 正在获取 LeetCode 每日一题...");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "query": DAILY_PROBLEM_QUERY }))
            .send()
            .await?;

        let body: GraphQlResponse<DailyChallengeData> = response.json().await?;
        parse_daily_problem(&url, body).map_err(|e| {
            error!("获取每日一题失败: {}", e);
            e
        })
    }
}

/// 判断会话校验结果：必须是 200 且带有登录用户名
pub fn evaluate_session(status: StatusCode, body: &SessionStatus) -> AppResult<String> {
    if status != StatusCode::OK {
        return Err(AppError::InvalidSession {
            reason: format!("会话接口返回状态码 {}", status),
        });
    }

    body.identity().ok_or_else(|| AppError::InvalidSession {
        reason: "响应中没有登录用户".to_string(),
    })
}

/// 从 GraphQL 响应中取出题目
pub fn parse_daily_problem(
    endpoint: &str,
    body: GraphQlResponse<DailyChallengeData>,
) -> AppResult<ProblemRef> {
    if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
        let message = serde_json::to_string(&errors).unwrap_or_else(|_| format!("{:?}", errors));
        return Err(AppError::remote_query(endpoint, message));
    }

    let question = body
        .data
        .and_then(|data| data.active_daily_coding_challenge_question)
        .map(|challenge| challenge.question)
        .ok_or_else(|| AppError::remote_query(endpoint, "没有找到每日一题"))?;

    Ok(ProblemRef::new(question.title, question.title_slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::stub_server::{test_config, StubServer};
    use serde_json::json;

    const ENDPOINT: &str = "https://leetcode.com/graphql";

    fn parse(body: serde_json::Value) -> AppResult<ProblemRef> {
        parse_daily_problem(ENDPOINT, serde_json::from_value(body).unwrap())
    }

    fn session(body: serde_json::Value) -> SessionStatus {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_evaluate_session_valid() {
        let user = evaluate_session(StatusCode::OK, &session(json!({"user_name": "alice"}))).unwrap();
        assert_eq!(user, "alice");
    }

    #[test]
    fn test_evaluate_session_null_user() {
        let err = evaluate_session(StatusCode::OK, &session(json!({"user_name": null}))).unwrap_err();
        assert!(matches!(err, AppError::InvalidSession { .. }));
    }

    #[test]
    fn test_evaluate_session_non_200() {
        let err = evaluate_session(
            StatusCode::FORBIDDEN,
            &session(json!({"user_name": "alice"})),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidSession { ref reason } if reason.contains("403")));
    }

    #[test]
    fn test_parse_daily_problem() {
        let problem = parse(json!({
            "data": {
                "activeDailyCodingChallengeQuestion": {
                    "question": {"title": "Two Sum", "titleSlug": "two-sum"}
                }
            }
        }))
        .unwrap();
        assert_eq!(problem, ProblemRef::new("Two Sum", "two-sum"));
    }

    #[test]
    fn test_parse_daily_problem_with_errors() {
        let err = parse(json!({
            "errors": [{"message": "rate limited"}],
            "data": {
                "activeDailyCodingChallengeQuestion": {
                    "question": {"title": "Two Sum", "titleSlug": "two-sum"}
                }
            }
        }))
        .unwrap_err();
        match err {
            AppError::RemoteQuery { endpoint, message } => {
                assert_eq!(endpoint, ENDPOINT);
                assert!(message.contains("rate limited"));
            }
            other => panic!("错误类型不对: {:?}", other),
        }
    }

    #[test]
    fn test_parse_daily_problem_null_challenge() {
        let err = parse(json!({"data": {"activeDailyCodingChallengeQuestion": null}})).unwrap_err();
        assert!(matches!(err, AppError::RemoteQuery { .. }));
    }

    #[test]
    fn test_parse_daily_problem_missing_data() {
        let err = parse(json!({})).unwrap_err();
        assert!(matches!(err, AppError::RemoteQuery { .. }));
    }

    #[tokio::test]
    async fn test_check_session_forbidden() {
        let server = StubServer::start(vec![(
            "/api/problems/all/",
            403,
            r#"{"detail":"forbidden"}"#.to_string(),
        )])
        .await;
        let client = LeetCodeClient::with_base_url(&test_config(), &server.base_url).unwrap();

        let err = client.check_session().await.unwrap_err();
        assert!(matches!(err, AppError::InvalidSession { ref reason } if reason.contains("403")));
        assert_eq!(server.requests(), vec!["GET /api/problems/all/"]);
    }

    #[tokio::test]
    async fn test_check_session_anonymous_user() {
        let server = StubServer::start(vec![(
            "/api/problems/all/",
            200,
            r#"{"user_name":null}"#.to_string(),
        )])
        .await;
        let client = LeetCodeClient::with_base_url(&test_config(), &server.base_url).unwrap();

        let err = client.check_session().await.unwrap_err();
        assert!(matches!(err, AppError::InvalidSession { .. }));
    }

    #[tokio::test]
    async fn test_check_session_valid_user() {
        let server = StubServer::start(vec![(
            "/api/problems/all/",
            200,
            r#"{"user_name":"alice","num_solved":3}"#.to_string(),
        )])
        .await;
        let client = LeetCodeClient::with_base_url(&test_config(), &server.base_url).unwrap();

        assert_eq!(client.check_session().await.unwrap(), "alice");
    }

    #[tokio::test]
    async fn test_fetch_daily_problem_from_server() {
        let body = json!({
            "data": {
                "activeDailyCodingChallengeQuestion": {
                    "question": {"title": "Two Sum", "titleSlug": "two-sum"}
                }
            }
        });
        let server = StubServer::start(vec![("/graphql", 200, body.to_string())]).await;
        let client = LeetCodeClient::with_base_url(&test_config(), &server.base_url).unwrap();

        let problem = client.fetch_daily_problem().await.unwrap();
        assert_eq!(problem, ProblemRef::new("Two Sum", "two-sum"));
        assert_eq!(server.requests(), vec!["POST /graphql"]);
    }

    #[tokio::test]
    async fn test_fetch_daily_problem_graphql_errors() {
        let body = json!({"errors": [{"message": "boom"}], "data": null});
        let server = StubServer::start(vec![("/graphql", 200, body.to_string())]).await;
        let client = LeetCodeClient::with_base_url(&test_config(), &server.base_url).unwrap();

        let err = client.fetch_daily_problem().await.unwrap_err();
        assert!(matches!(err, AppError::RemoteQuery { ref message, .. } if message.contains("boom")));
    }

    #[tokio::test]
    #[ignore] // 需要真实的 SESSION_COOKIE：cargo test -- --ignored
    async fn test_check_session_live() {
        let config = Config::from_env().expect("缺少凭据");
        let client = LeetCodeClient::new(&config).unwrap();
        let user_name = client.check_session().await.expect("会话校验失败");
        assert!(!user_name.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_fetch_daily_problem_live() {
        let config = Config::from_env().expect("缺少凭据");
        let client = LeetCodeClient::new(&config).unwrap();
        let problem = client.fetch_daily_problem().await.expect("获取每日一题失败");
        assert!(!problem.slug.is_empty());
    }
}
