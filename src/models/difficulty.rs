use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 标签（小写）到难度的静态映射
static DIFFICULTY_LABELS: phf::Map<&'static str, Difficulty> = phf_map! {
    "easy" => Difficulty::Easy,
    "medium" => Difficulty::Medium,
    "hard" => Difficulty::Hard,
};

impl Difficulty {
    /// 全部难度，按从易到难排列
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// 获取标准标签
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 从标签解析难度（忽略大小写和首尾空白）
    pub fn parse(label: &str) -> Option<Self> {
        DIFFICULTY_LABELS
            .get(label.trim().to_lowercase().as_str())
            .copied()
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("未知的难度等级: {}", value))
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
