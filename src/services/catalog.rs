//! 题库统计（首页和测验配置页展示用）

use crate::models::{ContentStore, Mcq};
use std::collections::BTreeMap;

/// 题库概况
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub total_mcqs: usize,
    /// 年份，从新到旧
    pub years: Vec<u16>,
    /// 主题，按字母顺序
    pub topics: Vec<String>,
    /// 每个主题的选择题数量
    pub topic_counts: BTreeMap<String, usize>,
    /// 全部年份分组下的试卷总数
    pub total_papers: usize,
    pub total_solved: usize,
}

impl Catalog {
    pub fn from_store(store: &ContentStore) -> Self {
        let mcqs = store.mcqs();
        let mut topic_counts = BTreeMap::new();
        for mcq in mcqs.iter().filter(|m| !m.topic.is_empty()) {
            *topic_counts.entry(mcq.topic.clone()).or_insert(0) += 1;
        }

        Self {
            total_mcqs: mcqs.len(),
            years: available_years(mcqs),
            topics: available_topics(mcqs),
            topic_counts,
            total_papers: store
                .paper_years()
                .iter()
                .map(|group| group.papers.len())
                .sum(),
            total_solved: store.solved_questions().len(),
        }
    }
}

/// 选择题中出现过的年份，去重后从新到旧排列
pub fn available_years(mcqs: &[Mcq]) -> Vec<u16> {
    let mut years: Vec<u16> = mcqs.iter().filter_map(|m| m.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// 选择题中出现过的主题，去重后按字母顺序排列
pub fn available_topics(mcqs: &[Mcq]) -> Vec<String> {
    let mut topics: Vec<String> = mcqs
        .iter()
        .filter(|m| !m.topic.is_empty())
        .map(|m| m.topic.clone())
        .collect();
    topics.sort();
    topics.dedup();
    topics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mcq::sample_mcq;
    use crate::models::paper::sample_paper;
    use crate::models::PaperYear;

    #[test]
    fn catalog_counts() {
        let mut no_year = sample_mcq("4", 2020, "Networks", 0);
        no_year.year = None;
        let store = ContentStore::from_parts(
            vec![
                sample_mcq("1", 2019, "OS", 0),
                sample_mcq("2", 2021, "Networks", 0),
                sample_mcq("3", 2019, "Networks", 0),
                no_year,
            ],
            vec![
                PaperYear {
                    year: 2021,
                    papers: vec![
                        sample_paper("css-2021-paper-1", 2021),
                        sample_paper("css-2021-paper-2", 2021),
                    ],
                },
                PaperYear {
                    year: 2019,
                    papers: vec![sample_paper("css-2019-paper-1", 2019)],
                },
            ],
            Vec::new(),
        )
        .unwrap();

        let catalog = Catalog::from_store(&store);
        assert_eq!(catalog.total_mcqs, 4);
        assert_eq!(catalog.years, [2021, 2019]);
        assert_eq!(catalog.topics, ["Networks", "OS"]);
        assert_eq!(catalog.topic_counts["Networks"], 3);
        assert_eq!(catalog.total_papers, 3);
        assert_eq!(catalog.total_solved, 0);
    }
}
