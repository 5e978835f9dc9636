use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库内容校验错误
    #[error("内容错误: {0}")]
    Content(#[from] ContentError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 题库内容校验错误
///
/// 加载阶段发现的任何一条都会让整个加载失败
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// 正确答案索引超出选项范围
    #[error("选择题 {id} 的正确答案索引 {index} 超出范围 (共 {options_len} 个选项)")]
    CorrectAnswerOutOfRange {
        id: String,
        index: usize,
        options_len: usize,
    },
    /// 选项少于两个
    #[error("选择题 {id} 只有 {options_len} 个选项，至少需要 2 个")]
    TooFewOptions { id: String, options_len: usize },
    /// 同一数据集内 ID 重复
    #[error("数据集 {dataset} 中存在重复的 ID: {id}")]
    DuplicateId { dataset: &'static str, id: String },
    /// 试卷编号不是 1 或 2
    #[error("记录 {id} 的试卷编号 {paper} 无效，只能是 1 或 2")]
    InvalidPaperNumber { id: String, paper: u32 },
    /// 试卷 ID 中无法解析出试卷编号
    #[error("无法从试卷 ID 中解析试卷编号: {id}")]
    MissingPaperNumber { id: String },
    /// 主观题既没有题干答案也没有小题
    #[error("主观题 {id} 既没有答案也没有小题")]
    EmptySolvedQuestion { id: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 JSON 解析错误
    pub fn json_parse_failed(path: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::File(FileError::JsonParseFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_error_converts_into_app_error() {
        let err: AppError = ContentError::TooFewOptions {
            id: "7".to_string(),
            options_len: 1,
        }
        .into();

        assert!(matches!(err, AppError::Content(ContentError::TooFewOptions { .. })));
        assert!(err.to_string().contains("选择题 7"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::file_read_failed("data/mcqs.json", io);

        assert!(err.to_string().contains("data/mcqs.json"));
        assert!(err.source().is_some());
    }
}
