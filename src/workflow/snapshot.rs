//! 渲染快照
//!
//! 视图层只读这里的数据，不直接接触会话内部

use crate::models::Mcq;
use crate::workflow::quiz_session::{AnswerRecord, QuizSession, ResultBand, Step};

/// 各状态下渲染所需的数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSnapshot<'s> {
    Configuring {
        /// 预览的可抽题数
        eligible: usize,
        can_start: bool,
    },
    InProgress(QuestionView<'s>),
    Completed {
        score: usize,
        total: usize,
        percentage: u32,
        band: ResultBand,
        /// 按出题顺序排列
        review: &'s [AnswerRecord<'s>],
    },
}

/// 进行中测验的当前题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'s> {
    pub question: &'s Mcq,
    /// 当前题目索引（从 0 开始）
    pub index: usize,
    pub total: usize,
    pub selected: Option<usize>,
    pub revealed: bool,
    /// 揭晓后才有值
    pub correct: Option<bool>,
    pub score: usize,
    /// 已揭晓的题目数
    pub answered: usize,
}

impl<'s> QuestionView<'s> {
    pub(crate) fn from_session(session: &'s QuizSession<'_>) -> Self {
        let (selected, revealed, correct) = match session.step() {
            Step::Answering { selected } => (selected, false, None),
            Step::Revealed { selected, correct } => (Some(selected), true, Some(correct)),
        };

        Self {
            question: session.current_question(),
            index: session.current_index(),
            total: session.total(),
            selected,
            revealed,
            correct,
            score: session.score(),
            answered: session.answered(),
        }
    }

    /// 界面显示的题号（从 1 开始）
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn is_last(&self) -> bool {
        self.position() == self.total
    }
}
