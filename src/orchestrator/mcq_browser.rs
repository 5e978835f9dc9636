//! 选择题浏览
//!
//! 持有筛选条件、页码和每张卡片的"显示答案"开关，不修改题库

use crate::models::Mcq;
use crate::services::pagination::{page_slice, total_pages, PageSlice, PAGE_SIZE};
use crate::services::selection::{select, McqFilters};
use std::collections::HashSet;
use tracing::debug;

pub struct McqBrowser<'a> {
    mcqs: &'a [Mcq],
    filters: McqFilters,
    filtered: Vec<&'a Mcq>,
    page: usize,
    revealed: HashSet<String>,
}

impl<'a> McqBrowser<'a> {
    pub fn new(mcqs: &'a [Mcq]) -> Self {
        Self {
            mcqs,
            filters: McqFilters::default(),
            filtered: mcqs.iter().collect(),
            page: 1,
            revealed: HashSet::new(),
        }
    }

    pub fn filters(&self) -> &McqFilters {
        &self.filters
    }

    /// 更新筛选条件，页码回到第 1 页
    pub fn set_filters(&mut self, filters: McqFilters) {
        self.filtered = select(self.mcqs, &filters);
        self.filters = filters;
        self.page = 1;
        debug!("筛选后共 {} 道选择题", self.filtered.len());
    }

    /// 筛选结果（数据集原有顺序）
    pub fn filtered(&self) -> &[&'a Mcq] {
        &self.filtered
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), PAGE_SIZE)
    }

    pub fn current_page(&self) -> PageSlice<'_, &'a Mcq> {
        page_slice(&self.filtered, self.page, PAGE_SIZE)
    }

    /// 跳到指定页，超出 `[1, total_pages]` 时不动
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }

    /// 切换某道题的答案显示
    pub fn toggle_reveal(&mut self, id: &str) -> bool {
        if !self.revealed.remove(id) {
            self.revealed.insert(id.to_string());
        }
        self.is_revealed(id)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
