use thiserror::Error;

/// 应用程序错误类型
///
/// 每一种错误都对应运行流程中的一个失败点，最终由 `main` 统一决定退出码
#[derive(Debug, Error)]
pub enum AppError {
    /// 缺少必需的凭据（启动前检查）
    #[error("配置错误: 环境变量 {var_name} 未设置")]
    MissingCredential { var_name: String },

    /// 会话 Cookie 无效或已过期
    #[error("会话无效: {reason}")]
    InvalidSession { reason: String },

    /// 远程查询失败（GraphQL 错误、非 2xx 状态码、空结果、网络错误）
    #[error("远程查询失败 ({endpoint}): {message}")]
    RemoteQuery { endpoint: String, message: String },

    /// 没有找到匹配的题解文件
    #[error("未找到匹配的题解: {reason}")]
    NoMatchingSolution { reason: String },

    /// 题解代码截取失败
    #[error("题解截取失败: {0}")]
    Extraction(#[from] ExtractError),

    /// 浏览器启动或 CDP 调用失败
    #[error("浏览器错误: {source}")]
    Browser {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 提交阶段失败
    #[error("提交失败: {message}")]
    Submission { message: String },
}

/// 题解截取错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// 文件中没有起始标记
    #[error("文件中找不到起始标记 '{marker}'")]
    NotFound { marker: String },

    /// 扫描到文件末尾花括号仍未配平
    #[error("花括号不配平 (文件末尾深度: {depth})")]
    Unbalanced { depth: i64 },

    /// 右花括号之后没有终止符
    #[error("右花括号之后缺少终止符 '{terminator}'")]
    MissingTerminator { terminator: char },

    /// 清理注释后代码为空
    #[error("清理注释后代码为空")]
    EmptyAfterNormalize,
}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RemoteQuery {
            endpoint: err.url().map(|u| u.to_string()).unwrap_or_default(),
            message: err.to_string(),
        }
    }
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser {
            source: Box::new(err),
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建缺少凭据错误
    pub fn missing_credential(var_name: impl Into<String>) -> Self {
        AppError::MissingCredential {
            var_name: var_name.into(),
        }
    }

    /// 创建远程查询错误
    pub fn remote_query(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::RemoteQuery {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// 创建无匹配题解错误
    pub fn no_matching_solution(reason: impl Into<String>) -> Self {
        AppError::NoMatchingSolution {
            reason: reason.into(),
        }
    }

    /// 创建浏览器错误（配置类错误没有底层 error 类型）
    pub fn browser(message: impl Into<String>) -> Self {
        AppError::Browser {
            source: message.into().into(),
        }
    }

    /// 把浏览器流程中的 anyhow 错误归为提交失败
    pub fn submission(err: &anyhow::Error) -> Self {
        AppError::Submission {
            message: format!("{:#}", err),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
