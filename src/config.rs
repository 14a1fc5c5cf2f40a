use std::fmt;

use crate::error::{AppError, AppResult};

/// LeetCode 会话 Cookie 的环境变量名
pub const SESSION_COOKIE_VAR: &str = "SESSION_COOKIE";
/// GitHub API Token 的环境变量名
pub const GITHUB_TOKEN_VAR: &str = "GT_TOKEN";

/// 程序配置
///
/// 启动时构造一次，之后以引用传给各个组件，运行中不再读取环境变量
#[derive(Clone)]
pub struct Config {
    /// LeetCode `LEETCODE_SESSION` Cookie
    pub session_cookie: String,
    /// GitHub API Token
    pub github_token: String,
    /// 是否以无头模式启动浏览器
    pub headless: bool,
    /// 浏览器可执行文件路径，为空时由 chromiumoxide 自动查找
    pub chrome_executable: Option<String>,
    /// 等待编辑器加载的超时时间（秒）
    pub editor_timeout_secs: u64,
    /// 点击提交后的等待时间（秒）
    pub submit_settle_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Config {
    /// 从环境变量加载配置（会先尝试读取 `.env` 文件）
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数构造配置
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::missing_credential(name))
        };

        let session_cookie = required(SESSION_COOKIE_VAR)?;
        let github_token = required(GITHUB_TOKEN_VAR)?;

        Ok(Self {
            session_cookie,
            github_token,
            headless: lookup("HEADLESS").and_then(|v| v.parse().ok()).unwrap_or(false),
            chrome_executable: lookup("CHROME_EXECUTABLE").filter(|v| !v.trim().is_empty()),
            editor_timeout_secs: lookup("EDITOR_TIMEOUT_SECS").and_then(|v| v.parse().ok()).unwrap_or(60),
            submit_settle_secs: lookup("SUBMIT_SETTLE_SECS").and_then(|v| v.parse().ok()).unwrap_or(5),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(false),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("session_cookie", &"***")
            .field("github_token", &"***")
            .field("headless", &self.headless)
            .field("chrome_executable", &self.chrome_executable)
            .field("editor_timeout_secs", &self.editor_timeout_secs)
            .field("submit_settle_secs", &self.submit_settle_secs)
            .field("verbose_logging", &self.verbose_logging)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_with_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("SESSION_COOKIE", "abc"), ("GT_TOKEN", "ghp_x")]))
                .unwrap();
        assert_eq!(config.session_cookie, "abc");
        assert_eq!(config.github_token, "ghp_x");
        assert!(!config.headless);
        assert_eq!(config.chrome_executable, None);
        assert_eq!(config.editor_timeout_secs, 60);
        assert_eq!(config.submit_settle_secs, 5);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_from_lookup_missing_session_cookie() {
        let err = Config::from_lookup(lookup_from(&[("GT_TOKEN", "ghp_x")])).unwrap_err();
        assert!(matches!(err, AppError::MissingCredential { ref var_name } if var_name == "SESSION_COOKIE"));
    }

    #[test]
    fn test_from_lookup_blank_token_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[("SESSION_COOKIE", "abc"), ("GT_TOKEN", "  ")]))
            .unwrap_err();
        assert!(matches!(err, AppError::MissingCredential { ref var_name } if var_name == "GT_TOKEN"));
    }

    #[test]
    fn test_from_lookup_overrides_and_bad_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("SESSION_COOKIE", "abc"),
            ("GT_TOKEN", "ghp_x"),
            ("HEADLESS", "true"),
            ("EDITOR_TIMEOUT_SECS", "not-a-number"),
            ("SUBMIT_SETTLE_SECS", "2"),
            ("CHROME_EXECUTABLE", "/usr/bin/chromium"),
        ]))
        .unwrap();
        assert!(config.headless);
        assert_eq!(config.editor_timeout_secs, 60);
        assert_eq!(config.submit_settle_secs, 2);
        assert_eq!(config.chrome_executable.as_deref(), Some("/usr/bin/chromium"));
    }

    #[test]
    fn test_debug_masks_credentials() {
        let config =
            Config::from_lookup(lookup_from(&[("SESSION_COOKIE", "secret-cookie"), ("GT_TOKEN", "ghp_secret")]))
                .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-cookie"));
        assert!(!debug.contains("ghp_secret"));
    }
}
