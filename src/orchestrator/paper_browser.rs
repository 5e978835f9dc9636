//! 真题试卷浏览

use crate::models::{ContentStore, Paper, PaperYear};
use crate::services::paper_service::{paper_detail, paper_mcq_count, PaperDetail};

pub struct PaperBrowser<'a> {
    store: &'a ContentStore,
    selected: Option<&'a Paper>,
}

impl<'a> PaperBrowser<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self {
            store,
            selected: None,
        }
    }

    /// 年份分组，从新到旧
    pub fn year_groups(&self) -> Vec<&'a PaperYear> {
        let mut groups: Vec<&PaperYear> = self.store.paper_years().iter().collect();
        groups.sort_by(|a, b| b.year.cmp(&a.year));
        groups
    }

    /// 列表角标上的选择题数量
    pub fn mcq_count(&self, paper: &Paper) -> usize {
        paper_mcq_count(paper, self.store.mcqs())
    }

    /// 打开一张试卷，ID 不存在时不动
    pub fn open(&mut self, paper_id: &str) -> bool {
        match self.store.papers().find(|p| p.id == paper_id) {
            Some(paper) => {
                self.selected = Some(paper);
                true
            }
            None => false,
        }
    }

    /// 返回试卷列表
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'a Paper> {
        self.selected
    }

    /// 当前打开试卷的详情
    pub fn detail(&self) -> Option<PaperDetail<'a>> {
        self.selected
            .map(|paper| paper_detail(paper, self.store.mcqs()))
    }
}
