//! 题库内容存储
//!
//! 进程启动时一次性加载，之后只读。加载要么全部成功，要么整体失败

use crate::error::{AppResult, ContentError};
use crate::models::{Mcq, Paper, PaperYear, SolvedQuestion, SolvedQuestionRecord};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// 数据集名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Mcqs,
    Papers,
    Solved,
}

impl Dataset {
    /// 数据文件名（不含扩展名）
    pub fn file_stem(self) -> &'static str {
        match self {
            Dataset::Mcqs => "mcqs",
            Dataset::Papers => "papers",
            Dataset::Solved => "subjective-questions",
        }
    }
}

/// `list_all` 的返回值，按数据集区分记录类型
#[derive(Debug, Clone)]
pub enum DatasetView<'a> {
    Mcqs(&'a [Mcq]),
    Papers(Vec<&'a Paper>),
    Solved(&'a [SolvedQuestion]),
}

impl DatasetView<'_> {
    pub fn len(&self) -> usize {
        match self {
            DatasetView::Mcqs(items) => items.len(),
            DatasetView::Papers(items) => items.len(),
            DatasetView::Solved(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 只读题库
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    mcqs: Vec<Mcq>,
    paper_years: Vec<PaperYear>,
    solved: Vec<SolvedQuestion>,
}

impl ContentStore {
    /// 从目录加载题库，见 [`crate::models::load_content_dir`]
    pub async fn load(dir: impl AsRef<Path>) -> AppResult<Self> {
        crate::models::load_content_dir(dir).await
    }

    /// 由文件中读出的原始记录构造题库
    ///
    /// 主观题记录先逐条转换，任何一条不合法都会让整个构造失败
    pub fn from_records(
        mcqs: Vec<Mcq>,
        paper_years: Vec<PaperYear>,
        solved: Vec<SolvedQuestionRecord>,
    ) -> AppResult<Self> {
        let solved = solved
            .into_iter()
            .map(SolvedQuestion::try_from)
            .collect::<Result<Vec<_>, ContentError>>()?;
        Self::from_parts(mcqs, paper_years, solved)
    }

    /// 由三个数据集构造题库，构造前逐条校验
    pub fn from_parts(
        mcqs: Vec<Mcq>,
        paper_years: Vec<PaperYear>,
        solved: Vec<SolvedQuestion>,
    ) -> AppResult<Self> {
        validate_mcqs(&mcqs)?;
        validate_papers(&paper_years)?;
        ensure_unique("subjective-questions", solved.iter().map(|q| q.id.as_str()))?;

        debug!(
            "题库校验通过: {} 道选择题, {} 个年份分组, {} 道主观题",
            mcqs.len(),
            paper_years.len(),
            solved.len()
        );

        Ok(Self {
            mcqs,
            paper_years,
            solved,
        })
    }

    /// 按数据集列出全部记录，顺序与文件中一致
    pub fn list_all(&self, dataset: Dataset) -> DatasetView<'_> {
        match dataset {
            Dataset::Mcqs => DatasetView::Mcqs(&self.mcqs),
            Dataset::Papers => DatasetView::Papers(self.papers().collect()),
            Dataset::Solved => DatasetView::Solved(&self.solved),
        }
    }

    pub fn mcqs(&self) -> &[Mcq] {
        &self.mcqs
    }

    pub fn paper_years(&self) -> &[PaperYear] {
        &self.paper_years
    }

    /// 所有试卷，按年份分组的书写顺序展开
    pub fn papers(&self) -> impl Iterator<Item = &Paper> + '_ {
        self.paper_years.iter().flat_map(|group| group.papers.iter())
    }

    pub fn solved_questions(&self) -> &[SolvedQuestion] {
        &self.solved
    }
}

fn validate_mcqs(mcqs: &[Mcq]) -> Result<(), ContentError> {
    for mcq in mcqs {
        mcq.validate()?;
    }
    ensure_unique("mcqs", mcqs.iter().map(|m| m.id.as_str()))
}

fn validate_papers(paper_years: &[PaperYear]) -> Result<(), ContentError> {
    for paper in paper_years.iter().flat_map(|group| group.papers.iter()) {
        paper.validate()?;
    }
    ensure_unique(
        "papers",
        paper_years
            .iter()
            .flat_map(|group| group.papers.iter())
            .map(|p| p.id.as_str()),
    )
}

fn ensure_unique<'a>(
    dataset: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                dataset,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
