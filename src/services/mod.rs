pub mod catalog;
pub mod markup;
pub mod pagination;
pub mod paper_service;
pub mod selection;

pub use catalog::Catalog;
pub use pagination::{page_slice, paginate, PageSlice, PAGE_SIZE};
pub use paper_service::{paper_detail, paper_mcq_count, paper_mcqs, PaperDetail};
pub use selection::{eligible_count, select, select_sample, McqFilters, QUIZ_SAMPLE_CAP};
