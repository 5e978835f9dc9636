//! 单次测验会话
//!
//! 开始时抽好的题目序列在整个会话中不变；每道题先作答、再揭晓、再前进。
//! 揭晓时判分且只判一次

use crate::models::Mcq;
use std::fmt;

/// 一道题的作答记录，用于结束后的回顾
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord<'a> {
    pub question: &'a Mcq,
    pub selected: usize,
    pub correct: bool,
}

/// 当前题目所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 作答中，可以反复更改选择
    Answering { selected: Option<usize> },
    /// 已揭晓，结果锁定
    Revealed { selected: usize, correct: bool },
}

/// `advance` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// 前置条件不满足，什么也没做
    Ignored,
    /// 确认了选择并揭晓结果
    Revealed { correct: bool },
    /// 进入下一题
    Next,
    /// 最后一题已揭晓，测验结束
    Finished,
}

/// 测验会话
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    questions: Vec<&'a Mcq>,
    current_index: usize,
    step: Step,
    score: usize,
    log: Vec<AnswerRecord<'a>>,
}

impl<'a> QuizSession<'a> {
    /// 用抽好的题目创建会话，题目为空时返回 `None`
    pub fn new(questions: Vec<&'a Mcq>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            current_index: 0,
            step: Step::Answering { selected: None },
            score: 0,
            log: Vec::new(),
        })
    }

    pub fn questions(&self) -> &[&'a Mcq] {
        &self.questions
    }

    pub fn current_question(&self) -> &'a Mcq {
        self.questions[self.current_index]
    }

    /// 当前题目索引（从 0 开始）
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// 已揭晓的题目数
    pub fn answered(&self) -> usize {
        self.log.len()
    }

    pub fn log(&self) -> &[AnswerRecord<'a>] {
        &self.log
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// 选择选项；已揭晓或索引越界时忽略
    pub fn select_option(&mut self, index: usize) -> bool {
        match self.step {
            Step::Answering { .. } if index < self.current_question().options.len() => {
                self.step = Step::Answering {
                    selected: Some(index),
                };
                true
            }
            _ => false,
        }
    }

    /// 确认当前选择并判分；没有选择或已揭晓时忽略
    pub fn confirm(&mut self) -> Option<bool> {
        let Step::Answering {
            selected: Some(selected),
        } = self.step
        else {
            return None;
        };

        let question = self.current_question();
        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.log.push(AnswerRecord {
            question,
            selected,
            correct,
        });
        self.step = Step::Revealed { selected, correct };

        Some(correct)
    }

    /// "下一步"按钮：作答中则确认，已揭晓则前进
    pub fn advance(&mut self) -> AdvanceOutcome {
        match self.step {
            Step::Answering { selected: None } => AdvanceOutcome::Ignored,
            Step::Answering { .. } => match self.confirm() {
                Some(correct) => AdvanceOutcome::Revealed { correct },
                None => AdvanceOutcome::Ignored,
            },
            Step::Revealed { .. } if self.is_last() => AdvanceOutcome::Finished,
            Step::Revealed { .. } => {
                self.current_index += 1;
                self.step = Step::Answering { selected: None };
                AdvanceOutcome::Next
            }
        }
    }

    /// 结束会话，生成成绩
    pub fn into_summary(self) -> QuizSummary<'a> {
        QuizSummary {
            total: self.questions.len(),
            review: self.log,
        }
    }
}

/// 成绩档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultBand {
    /// 70% 及以上
    Excellent,
    /// 50% 到 69%
    Fair,
    /// 50% 以下
    Poor,
}

impl ResultBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            70.. => ResultBand::Excellent,
            50..=69 => ResultBand::Fair,
            _ => ResultBand::Poor,
        }
    }
}

/// 测验成绩
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary<'a> {
    pub total: usize,
    /// 按出题顺序排列
    pub review: Vec<AnswerRecord<'a>>,
}

impl QuizSummary<'_> {
    /// 答对题数
    pub fn score(&self) -> usize {
        self.review.iter().filter(|r| r.correct).count()
    }

    /// `round(100 * score / total)`，四舍五入
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let score = self.score() as u64;
        let total = self.total as u64;
        ((200 * score + total) / (2 * total)) as u32
    }

    pub fn band(&self) -> ResultBand {
        ResultBand::from_percentage(self.percentage())
    }
}

impl fmt::Display for QuizSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}%)",
            self.score(),
            self.total,
            self.percentage()
        )
    }
}
