use crate::error::ContentError;
use crate::models::de::deserialize_id;
use serde::Deserialize;

/// 已解答的主观题，由 [`SolvedQuestionRecord`] 校验转换而来
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedQuestion {
    pub id: String,
    pub year: u16,
    pub paper: u8,
    pub question_number: u32,
    pub section: String,
    /// 总分
    pub marks: u32,
    pub body: SolvedBody,
}

/// 主观题内容：整题一问一答，或按小题拆分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolvedBody {
    Single {
        question: String,
        answer: String,
        explanation: Option<String>,
    },
    Parts(Vec<QuestionPart>),
}

/// 小题
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionPart {
    /// 小题标号，如 `a`、`b`
    #[serde(deserialize_with = "deserialize_id")]
    pub part: String,
    #[serde(default)]
    pub marks: u32,
    pub question: String,
    pub answer: String,
}

impl SolvedQuestion {
    /// 小题数量，整题形式计为 1
    pub fn part_count(&self) -> usize {
        match &self.body {
            SolvedBody::Single { .. } => 1,
            SolvedBody::Parts(parts) => parts.len(),
        }
    }

    pub fn parts(&self) -> &[QuestionPart] {
        match &self.body {
            SolvedBody::Single { .. } => &[],
            SolvedBody::Parts(parts) => parts,
        }
    }
}

/// 文件中的原始记录
///
/// 反序列化只检查字段形状；试卷编号和题目内容在构造题库时校验
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedQuestionRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub year: u16,
    pub paper: u32,
    pub question_number: u32,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub section: String,
    #[serde(default)]
    pub marks: u32,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub parts: Vec<QuestionPart>,
}

impl TryFrom<SolvedQuestionRecord> for SolvedQuestion {
    type Error = ContentError;

    fn try_from(record: SolvedQuestionRecord) -> Result<Self, Self::Error> {
        let paper = match u8::try_from(record.paper) {
            Ok(p @ 1..=2) => p,
            _ => {
                return Err(ContentError::InvalidPaperNumber {
                    id: record.id,
                    paper: record.paper,
                })
            }
        };

        let body = if !record.parts.is_empty() {
            SolvedBody::Parts(record.parts)
        } else if let Some(answer) = record.answer {
            SolvedBody::Single {
                question: record.question.unwrap_or_default(),
                answer,
                explanation: record.explanation,
            }
        } else {
            return Err(ContentError::EmptySolvedQuestion { id: record.id });
        };

        Ok(Self {
            id: record.id,
            year: record.year,
            paper,
            question_number: record.question_number,
            section: record.section,
            marks: record.marks,
            body,
        })
    }
}
