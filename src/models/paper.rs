use crate::error::ContentError;
use crate::models::de::deserialize_id;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// 真题试卷元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// 形如 `css-2020-paper-1`，编码了年份和试卷编号
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub year: u16,
    #[serde(default)]
    pub mcq_count: u32,
    #[serde(default)]
    pub descriptive_count: u32,
}

/// 按年份分组的试卷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperYear {
    pub year: u16,
    pub papers: Vec<Paper>,
}

fn paper_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)paper[-_ ]?(\d+)").expect("paper number pattern is valid"))
}

impl Paper {
    /// 从试卷 ID 中解析试卷编号
    pub fn paper_number(&self) -> Option<u8> {
        paper_number_regex()
            .captures(&self.id)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// 校验试卷 ID 中能解析出 1 或 2
    pub fn validate(&self) -> Result<(), ContentError> {
        match paper_number_regex()
            .captures(&self.id)
            .and_then(|cap| cap.get(1))
        {
            None => Err(ContentError::MissingPaperNumber {
                id: self.id.clone(),
            }),
            Some(m) => match m.as_str().parse::<u32>() {
                Ok(1..=2) => Ok(()),
                Ok(n) => Err(ContentError::InvalidPaperNumber {
                    id: self.id.clone(),
                    paper: n,
                }),
                Err(_) => Err(ContentError::MissingPaperNumber {
                    id: self.id.clone(),
                }),
            },
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_paper(id: &str, year: u16) -> Paper {
    Paper {
        id: id.to_string(),
        title: format!("CSS {} {}", year, id),
        year,
        mcq_count: 0,
        descriptive_count: 0,
    }
}
