//! 分页（仅用于浏览）

/// 每页条数
pub const PAGE_SIZE: usize = 20;

/// 一页数据以及翻页所需的信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// 当前页码（从 1 开始）
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> PageSlice<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// 总页数，`ceil(count / size)`
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        count.div_ceil(size)
    }
}

/// 取第 `page` 页：`[(page-1)*size, page*size)`，并截断到数据范围内
///
/// 越界页码由调用方避免，这里只保证不越界访问（返回空切片）
pub fn paginate<T>(items: &[T], page: usize, size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = page.saturating_mul(size).min(items.len());
    &items[start..end.max(start)]
}

/// 取一页并附带页码信息
pub fn page_slice<T>(items: &[T], page: usize, size: usize) -> PageSlice<'_, T> {
    PageSlice {
        items: paginate(items, page, size),
        page,
        total_pages: total_pages(items.len(), size),
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_five_records_make_three_pages() {
        let records: Vec<usize> = (0..45).collect();

        assert_eq!(total_pages(records.len(), PAGE_SIZE), 3);
        assert_eq!(paginate(&records, 1, PAGE_SIZE), &records[0..20]);
        assert_eq!(paginate(&records, 2, PAGE_SIZE), &records[20..40]);
        assert_eq!(paginate(&records, 3, PAGE_SIZE), &records[40..45]);
        assert_eq!(paginate(&records, 3, PAGE_SIZE).len(), 5);
    }

    #[test]
    fn out_of_range_pages_are_clamped_to_empty() {
        let records: Vec<usize> = (0..45).collect();
        assert!(paginate(&records, 4, PAGE_SIZE).is_empty());
        assert!(paginate(&records, 0, PAGE_SIZE).is_empty());
        assert!(paginate(&records, usize::MAX, PAGE_SIZE).is_empty());
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let records: Vec<usize> = Vec::new();
        let slice = page_slice(&records, 1, PAGE_SIZE);
        assert_eq!(slice.total_pages, 0);
        assert!(slice.items.is_empty());
        assert!(!slice.has_next());
        assert!(!slice.has_prev());
    }

    #[test]
    fn page_slice_reports_neighbours() {
        let records: Vec<usize> = (0..45).collect();
        let slice = page_slice(&records, 2, PAGE_SIZE);
        assert!(slice.has_prev());
        assert!(slice.has_next());
        assert_eq!(slice.total_items, 45);
    }
}
