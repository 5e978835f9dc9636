//! 选题引擎 - 业务能力层
//!
//! 根据筛选条件从数据集中选出题目子集；测验模式下再随机抽样。
//! 全部是纯函数，不修改题库

use crate::models::{Difficulty, Mcq, SolvedQuestion};
use rand::seq::SliceRandom;
use rand::Rng;

/// 每次测验最多抽取的题目数
pub const QUIZ_SAMPLE_CAP: usize = 20;

/// 下拉框中表示"不筛选"的取值
const ALL: &str = "all";

/// 选择题筛选条件
///
/// 各条件相互独立、均可省略，同时设置时取交集
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McqFilters {
    pub year: Option<u16>,
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// 题干或任一选项包含该文本（忽略大小写）
    pub query: Option<String>,
}

impl McqFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// 设置搜索文本，去掉首尾空白后为空则视为不筛选
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
        self
    }

    /// 从界面上的原始选择值构造筛选条件
    ///
    /// `"all"` 或空串表示不筛选；年份无法解析、难度无法识别时同样视为不筛选
    pub fn from_selection(year: &str, topic: &str, difficulty: &str, query: &str) -> Self {
        let year = selected(year).and_then(|y| y.parse().ok());
        let topic = selected(topic).map(str::to_string);
        let difficulty = selected(difficulty).and_then(Difficulty::parse);

        Self {
            year,
            topic,
            difficulty,
            query: None,
        }
        .with_query(query)
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.topic.is_none()
            && self.difficulty.is_none()
            && self.query.is_none()
    }

    /// 判断一道题是否满足全部条件
    pub fn matches(&self, mcq: &Mcq) -> bool {
        year_matches(self.year, mcq)
            && topic_matches(self.topic.as_deref(), mcq)
            && difficulty_matches(self.difficulty, mcq)
            && text_matches(self.query.as_deref(), mcq)
    }
}

fn selected(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(raw)
    }
}

fn year_matches(year: Option<u16>, mcq: &Mcq) -> bool {
    year.map_or(true, |y| mcq.year == Some(y))
}

fn topic_matches(topic: Option<&str>, mcq: &Mcq) -> bool {
    topic.map_or(true, |t| mcq.topic == t)
}

fn difficulty_matches(difficulty: Option<Difficulty>, mcq: &Mcq) -> bool {
    difficulty.map_or(true, |d| mcq.difficulty == Some(d))
}

fn text_matches(query: Option<&str>, mcq: &Mcq) -> bool {
    let Some(query) = query else {
        return true;
    };
    let needle = query.to_lowercase();
    mcq.question.to_lowercase().contains(&needle)
        || mcq
            .options
            .iter()
            .any(|option| option.to_lowercase().contains(&needle))
}

/// 按筛选条件选出题目，保持数据集原有顺序
pub fn select<'a>(mcqs: &'a [Mcq], filters: &McqFilters) -> Vec<&'a Mcq> {
    mcqs.iter().filter(|mcq| filters.matches(mcq)).collect()
}

/// 打乱后截取前 `cap` 道题
///
/// 不足 `cap` 道时全部返回，但仍然打乱
pub fn sample<'a, R: Rng + ?Sized>(mut subset: Vec<&'a Mcq>, cap: usize, rng: &mut R) -> Vec<&'a Mcq> {
    subset.shuffle(rng);
    subset.truncate(cap);
    subset
}

/// 测验抽题：筛选、打乱、截取到 [`QUIZ_SAMPLE_CAP`]
pub fn select_sample<'a, R: Rng + ?Sized>(
    mcqs: &'a [Mcq],
    filters: &McqFilters,
    rng: &mut R,
) -> Vec<&'a Mcq> {
    sample(select(mcqs, filters), QUIZ_SAMPLE_CAP, rng)
}

/// 预览测验可抽到的题目数，不做实际抽样
pub fn eligible_count(mcqs: &[Mcq], filters: &McqFilters) -> usize {
    mcqs.iter()
        .filter(|mcq| filters.matches(mcq))
        .take(QUIZ_SAMPLE_CAP)
        .count()
}

/// 按年份筛选主观题，`None` 表示全部年份
pub fn select_solved(questions: &[SolvedQuestion], year: Option<u16>) -> Vec<&SolvedQuestion> {
    questions
        .iter()
        .filter(|q| year.map_or(true, |y| q.year == y))
        .collect()
}
