//! 测验流程 - 流程层
//!
//! 状态：`Configuring → InProgress → Completed`，任意状态都可以 `restart` 回到 `Configuring`。
//!
//! - 配置阶段只预览可抽题数，不抽样
//! - `start` 时抽样一次，之后修改筛选条件不影响本次测验
//! - `exit` 丢弃进行中的会话，不保留任何进度
//! - 前置条件不满足的操作一律忽略

use crate::models::Mcq;
use crate::services::selection::{self, McqFilters};
use crate::workflow::quiz_session::{AdvanceOutcome, QuizSession, QuizSummary};
use crate::workflow::snapshot::{QuestionView, QuizSnapshot};
use rand::Rng;
use tracing::{debug, info};

/// 测验状态
#[derive(Debug, Clone)]
pub enum QuizState<'a> {
    Configuring,
    InProgress(QuizSession<'a>),
    Completed(QuizSummary<'a>),
}

impl QuizState<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            QuizState::Configuring => "configuring",
            QuizState::InProgress(_) => "in_progress",
            QuizState::Completed(_) => "completed",
        }
    }
}

/// 界面可触发的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    Configure(McqFilters),
    Start,
    SelectOption(usize),
    Advance,
    Exit,
    Restart,
}

/// 测验状态机
///
/// 只借用题库中的选择题，从不修改题库
#[derive(Debug, Clone)]
pub struct Quiz<'a> {
    mcqs: &'a [Mcq],
    filters: McqFilters,
    state: QuizState<'a>,
}

impl<'a> Quiz<'a> {
    pub fn new(mcqs: &'a [Mcq]) -> Self {
        Self {
            mcqs,
            filters: McqFilters::default(),
            state: QuizState::Configuring,
        }
    }

    pub fn state(&self) -> &QuizState<'a> {
        &self.state
    }

    pub fn filters(&self) -> &McqFilters {
        &self.filters
    }

    /// 更新筛选条件
    ///
    /// 任何状态下都会记下新条件，但不会改动进行中测验的题目序列
    pub fn configure(&mut self, filters: McqFilters) {
        debug!("更新测验筛选条件: {:?} (状态: {})", filters, self.state.name());
        self.filters = filters;
    }

    /// 按当前筛选条件可抽到的题目数（不超过抽题上限）
    pub fn eligible_count(&self) -> usize {
        selection::eligible_count(self.mcqs, &self.filters)
    }

    /// 开始测验，使用线程随机数源
    pub fn start(&mut self) -> bool {
        self.start_with(&mut rand::thread_rng())
    }

    /// 开始测验
    ///
    /// 只在配置阶段且至少有一道可用题目时生效
    pub fn start_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !matches!(self.state, QuizState::Configuring) {
            debug!("忽略 start: 当前状态为 {}", self.state.name());
            return false;
        }

        let sampled = selection::select_sample(self.mcqs, &self.filters, rng);
        match QuizSession::new(sampled) {
            Some(session) => {
                info!("✓ 测验开始，共 {} 道题", session.total());
                self.state = QuizState::InProgress(session);
                true
            }
            None => {
                debug!("忽略 start: 当前筛选条件下没有题目");
                false
            }
        }
    }

    /// 选择当前题目的选项
    pub fn select_option(&mut self, index: usize) -> bool {
        if let QuizState::InProgress(session) = &mut self.state {
            return session.select_option(index);
        }
        debug!("忽略 select_option: 当前状态为 {}", self.state.name());
        false
    }

    /// "下一步"：确认答案、进入下一题或结束测验
    pub fn advance(&mut self) -> AdvanceOutcome {
        let outcome = match &mut self.state {
            QuizState::InProgress(session) => session.advance(),
            _ => AdvanceOutcome::Ignored,
        };

        match outcome {
            AdvanceOutcome::Ignored => debug!("忽略 advance: 状态 {}", self.state.name()),
            AdvanceOutcome::Revealed { correct } => {
                debug!("揭晓答案: {}", if correct { "正确" } else { "错误" })
            }
            AdvanceOutcome::Next => {}
            AdvanceOutcome::Finished => self.finish(),
        }

        outcome
    }

    fn finish(&mut self) {
        let state = std::mem::replace(&mut self.state, QuizState::Configuring);
        self.state = match state {
            QuizState::InProgress(session) => {
                let summary = session.into_summary();
                info!("🏁 测验完成: {}", summary);
                QuizState::Completed(summary)
            }
            other => other,
        };
    }

    /// 中途退出，丢弃进行中的测验
    pub fn exit(&mut self) -> bool {
        if let QuizState::InProgress(session) = &self.state {
            info!(
                "测验中途退出，已作答 {}/{} 道题，进度不保留",
                session.answered(),
                session.total()
            );
            self.state = QuizState::Configuring;
            true
        } else {
            debug!("忽略 exit: 当前状态为 {}", self.state.name());
            false
        }
    }

    /// 从任意状态回到配置阶段，筛选条件保留
    pub fn restart(&mut self) {
        debug!("重新开始: {} -> configuring", self.state.name());
        self.state = QuizState::Configuring;
    }

    /// 统一入口，返回操作是否生效
    pub fn dispatch(&mut self, action: QuizAction) -> bool {
        match action {
            QuizAction::Configure(filters) => {
                self.configure(filters);
                true
            }
            QuizAction::Start => self.start(),
            QuizAction::SelectOption(index) => self.select_option(index),
            QuizAction::Advance => self.advance() != AdvanceOutcome::Ignored,
            QuizAction::Exit => self.exit(),
            QuizAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// 当前状态的渲染快照
    pub fn snapshot(&self) -> QuizSnapshot<'_> {
        match &self.state {
            QuizState::Configuring => {
                let eligible = self.eligible_count();
                QuizSnapshot::Configuring {
                    eligible,
                    can_start: eligible > 0,
                }
            }
            QuizState::InProgress(session) => {
                QuizSnapshot::InProgress(QuestionView::from_session(session))
            }
            QuizState::Completed(summary) => QuizSnapshot::Completed {
                score: summary.score(),
                total: summary.total,
                percentage: summary.percentage(),
                band: summary.band(),
                review: &summary.review,
            },
        }
    }
}
