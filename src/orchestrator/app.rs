use std::fmt;
use std::process::ExitCode;

use tracing::{error, info};

use crate::clients::LeetCodeClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::ProblemRef;
use crate::services::SubmissionService;
use crate::utils::logging;
use crate::workflow::SolutionFlow;

/// 运行阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ValidateSession,
    FetchDailyProblem,
    SearchSolution,
    FetchRawContent,
    ExtractAndNormalize,
    Submit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ValidateSession => "校验会话",
            Stage::FetchDailyProblem => "获取每日一题",
            Stage::SearchSolution => "搜索题解",
            Stage::FetchRawContent => "下载题解",
            Stage::ExtractAndNormalize => "截取题解",
            Stage::Submit => "提交代码",
        };
        f.write_str(name)
    }
}

/// 一次运行的结果
#[derive(Debug)]
pub enum RunOutcome {
    /// 全部阶段成功
    Success { problem: ProblemRef },
    /// 在某个阶段失败
    Failed { stage: Stage, error: AppError },
}

impl RunOutcome {
    fn failed(stage: Stage, error: AppError) -> Self {
        error!("❌ [{}] 失败: {}", stage, error);
        RunOutcome::Failed { stage, error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }

    /// 成功返回 0，任何阶段失败返回 1
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// 应用主结构
pub struct App {
    leetcode: LeetCodeClient,
    solution_flow: SolutionFlow,
    submission: SubmissionService,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: &Config) -> AppResult<Self> {
        logging::log_startup(config);

        Ok(Self {
            leetcode: LeetCodeClient::new(config)?,
            solution_flow: SolutionFlow::new(config)?,
            submission: SubmissionService::new(config),
        })
    }

    /// 由已构造好的组件组装应用
    pub fn from_parts(
        leetcode: LeetCodeClient,
        solution_flow: SolutionFlow,
        submission: SubmissionService,
    ) -> Self {
        Self {
            leetcode,
            solution_flow,
            submission,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> RunOutcome {
        if let Err(e) = self.leetcode.check_session().await {
            return RunOutcome::failed(Stage::ValidateSession, e);
        }

        let problem = match self.leetcode.fetch_daily_problem().await {
            Ok(problem) => problem,
            Err(e) => return RunOutcome::failed(Stage::FetchDailyProblem, e),
        };
        logging::log_problem(&problem);

        let location = match self.solution_flow.locate(&problem).await {
            Ok(location) => location,
            Err(e) => return RunOutcome::failed(Stage::SearchSolution, e),
        };

        let raw = match self.solution_flow.download(&location).await {
            Ok(raw) => raw,
            Err(e) => return RunOutcome::failed(Stage::FetchRawContent, e),
        };

        let code = match SolutionFlow::prepare(&raw) {
            Ok(code) => code,
            Err(e) => return RunOutcome::failed(Stage::ExtractAndNormalize, e),
        };
        logging::log_extracted_code(&code);

        if let Err(e) = self.submission.submit(&code, &problem.problem_url()).await {
            return RunOutcome::failed(Stage::Submit, e);
        }

        info!("🎉 每日一题 {} 已提交", problem.title);
        RunOutcome::Success { problem }
    }
}
