//! 主观题浏览
//!
//! 按年份筛选，同一时间只展开一道题；解答文本经标记解析后输出安全 HTML

use crate::models::{SolvedBody, SolvedQuestion};
use crate::services::markup;
use crate::services::selection::select_solved;

/// 渲染好的一问一答
///
/// `*_html` 字段已转义，可直接插入页面；`label` 是纯文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPart {
    /// 小题标号，整题形式为 `None`
    pub label: Option<String>,
    pub marks: u32,
    pub question_html: String,
    pub answer_html: String,
    pub explanation_html: Option<String>,
}

pub struct SolvedBrowser<'a> {
    questions: &'a [SolvedQuestion],
    year: Option<u16>,
    expanded: Option<String>,
}

impl<'a> SolvedBrowser<'a> {
    pub fn new(questions: &'a [SolvedQuestion]) -> Self {
        Self {
            questions,
            year: None,
            expanded: None,
        }
    }

    /// 可选年份，从新到旧
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.questions.iter().map(|q| q.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }

    pub fn set_year(&mut self, year: Option<u16>) {
        self.year = year;
    }

    /// 从下拉框取值设置年份，`"all"` 或无法解析时显示全部
    pub fn set_year_selection(&mut self, raw: &str) {
        self.year = raw.trim().parse().ok();
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn visible(&self) -> Vec<&'a SolvedQuestion> {
        select_solved(self.questions, self.year)
    }

    /// 展开或收起一道题；展开新题会收起之前展开的题
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// 渲染一道题的全部解答
    pub fn render(question: &SolvedQuestion) -> Vec<RenderedPart> {
        match &question.body {
            SolvedBody::Single {
                question: text,
                answer,
                explanation,
            } => vec![RenderedPart {
                label: None,
                marks: question.marks,
                question_html: markup::render_html(text),
                answer_html: markup::render_html(answer),
                explanation_html: explanation.as_deref().map(markup::render_html),
            }],
            SolvedBody::Parts(parts) => parts
                .iter()
                .map(|part| RenderedPart {
                    label: Some(part.part.clone()),
                    marks: part.marks,
                    question_html: markup::render_html(&part.question),
                    answer_html: markup::render_html(&part.answer),
                    explanation_html: None,
                })
                .collect(),
        }
    }

    /// 当前展开题目的解答，没有展开时为空
    pub fn expanded_parts(&self) -> Vec<RenderedPart> {
        self.visible()
            .into_iter()
            .find(|q| self.is_expanded(&q.id))
            .map(Self::render)
            .unwrap_or_default()
    }
}
