//! 试卷关联服务 - 业务能力层
//!
//! 试卷与选择题之间没有外键，每次按年份和试卷编号现算

use crate::models::{Mcq, Paper};

/// 试卷详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaperDetail<'a> {
    /// 有关联的选择题，按数据集顺序排列
    Available(Vec<&'a Mcq>),
    /// 暂无选择题，界面显示"暂未上线"而不是报错
    NotYetAvailable,
}

impl<'a> PaperDetail<'a> {
    pub fn mcqs(&self) -> &[&'a Mcq] {
        match self {
            PaperDetail::Available(mcqs) => mcqs,
            PaperDetail::NotYetAvailable => &[],
        }
    }
}

/// 找出属于某张试卷的选择题
///
/// 条件：`mcq.year == paper.year` 且 `mcq.paper` 等于从试卷 ID 解析出的编号
pub fn paper_mcqs<'a>(paper: &Paper, mcqs: &'a [Mcq]) -> Vec<&'a Mcq> {
    let Some(number) = paper.paper_number() else {
        return Vec::new();
    };

    mcqs.iter()
        .filter(|mcq| mcq.year == Some(paper.year) && mcq.paper == Some(number))
        .collect()
}

/// 试卷关联的选择题数量（用于列表角标）
pub fn paper_mcq_count(paper: &Paper, mcqs: &[Mcq]) -> usize {
    paper_mcqs(paper, mcqs).len()
}

/// 试卷详情，空结果转为 [`PaperDetail::NotYetAvailable`]
pub fn paper_detail<'a>(paper: &Paper, mcqs: &'a [Mcq]) -> PaperDetail<'a> {
    let linked = paper_mcqs(paper, mcqs);
    if linked.is_empty() {
        PaperDetail::NotYetAvailable
    } else {
        PaperDetail::Available(linked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mcq::sample_mcq;
    use crate::models::paper::sample_paper;

    fn mcqs() -> Vec<Mcq> {
        let mut list = vec![
            sample_mcq("1", 2020, "OS", 0),
            sample_mcq("2", 2020, "OS", 0),
            sample_mcq("3", 2020, "OS", 0),
            sample_mcq("4", 2021, "OS", 0),
        ];
        list[1].paper = Some(2);
        list[2].paper = None;
        list
    }

    #[test]
    fn joins_on_year_and_paper_number() {
        let mcqs = mcqs();
        let paper = sample_paper("css-2020-paper-1", 2020);

        let ids: Vec<&str> = paper_mcqs(&paper, &mcqs)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, ["1"]);
        assert_eq!(paper_mcq_count(&paper, &mcqs), 1);
    }

    #[test]
    fn paper_without_mcqs_is_not_yet_available() {
        let mcqs = mcqs();
        let paper = sample_paper("css-2019-paper-1", 2019);

        assert_eq!(paper_detail(&paper, &mcqs), PaperDetail::NotYetAvailable);
        assert!(paper_detail(&paper, &mcqs).mcqs().is_empty());
    }

    #[test]
    fn join_reflects_current_data() {
        let mut mcqs = mcqs();
        let paper = sample_paper("css-2021-paper-2", 2021);
        assert_eq!(paper_mcq_count(&paper, &mcqs), 0);

        mcqs[3].paper = Some(2);
        assert_eq!(paper_mcq_count(&paper, &mcqs), 1);
    }
}
