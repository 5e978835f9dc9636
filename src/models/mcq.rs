use crate::error::ContentError;
use crate::models::de::deserialize_id;
use crate::models::Difficulty;
use serde::{Deserialize, Serialize};

/// 选择题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mcq {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// 试卷编号（1 或 2）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<u8>,
    pub question: String,
    pub options: Vec<String>,
    /// 正确选项索引（从 0 开始）
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Mcq {
    /// 校验选项数量、正确答案索引和试卷编号
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                id: self.id.clone(),
                options_len: self.options.len(),
            });
        }
        if self.correct_answer >= self.options.len() {
            return Err(ContentError::CorrectAnswerOutOfRange {
                id: self.id.clone(),
                index: self.correct_answer,
                options_len: self.options.len(),
            });
        }
        if let Some(paper) = self.paper {
            if !(1..=2).contains(&paper) {
                return Err(ContentError::InvalidPaperNumber {
                    id: self.id.clone(),
                    paper: u32::from(paper),
                });
            }
        }
        Ok(())
    }

    /// 判断所选选项是否正确
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }

    /// 正确选项的文本
    pub fn correct_option_text(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// 选项字母标签：0 -> 'A'，1 -> 'B'，……
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map(char::from)
        .unwrap_or('?')
}

#[cfg(test)]
pub(crate) fn sample_mcq(id: &str, year: u16, topic: &str, correct_answer: usize) -> Mcq {
    Mcq {
        id: id.to_string(),
        year: Some(year),
        paper: Some(1),
        question: format!("Question {}", id),
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        correct_answer,
        explanation: String::new(),
        topic: topic.to_string(),
        difficulty: None,
    }
}
