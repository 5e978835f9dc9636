use crate::error::{AppError, AppResult, FileError};
use crate::models::{ContentStore, Dataset, Mcq, PaperYear, SolvedQuestionRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// `mcqs.json` 的顶层结构
#[derive(Debug, Deserialize)]
struct McqFile {
    mcqs: Vec<Mcq>,
}

/// `papers.json` 的顶层结构
#[derive(Debug, Deserialize)]
struct PaperFile {
    papers: Vec<PaperYear>,
}

/// `subjective-questions.json` 的顶层结构
#[derive(Debug, Deserialize)]
struct SolvedFile {
    questions: Vec<SolvedQuestionRecord>,
}

/// 从目录加载全部三个数据集并构造题库
///
/// 任何一个文件缺失、读取失败、解析失败或校验失败，都会让整个加载失败
pub async fn load_content_dir(folder_path: impl AsRef<Path>) -> AppResult<ContentStore> {
    let folder = folder_path.as_ref();

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder.display().to_string(),
        }
        .into());
    }

    let mcqs: McqFile = load_dataset(folder, Dataset::Mcqs).await?;
    info!("成功加载 {} 道选择题", mcqs.mcqs.len());

    let papers: PaperFile = load_dataset(folder, Dataset::Papers).await?;
    info!("成功加载 {} 个年份的试卷", papers.papers.len());

    let solved: SolvedFile = load_dataset(folder, Dataset::Solved).await?;
    info!("成功加载 {} 道主观题", solved.questions.len());

    ContentStore::from_records(mcqs.mcqs, papers.papers, solved.questions)
}

/// 查找数据集文件，`.json` 优先，其次 `.toml`
async fn load_dataset<T: DeserializeOwned>(folder: &Path, dataset: Dataset) -> AppResult<T> {
    let stem = dataset.file_stem();
    let candidates: [PathBuf; 2] = [
        folder.join(format!("{}.json", stem)),
        folder.join(format!("{}.toml", stem)),
    ];

    for path in &candidates {
        let exists = fs::try_exists(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        if exists {
            info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );
            return load_dataset_file(path).await;
        }
    }

    Err(FileError::NotFound {
        path: candidates[0].display().to_string(),
    }
    .into())
}

/// 按扩展名解析单个数据文件
pub async fn load_dataset_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&display, e))?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => {
            toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&display, e))
        }
        _ => serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(&display, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_error_is_not_reported_as_missing_file() {
        // 把普通文件当作目录，查找候选文件时得到的是 I/O 错误而不是“不存在”
        let not_a_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("content")
            .join("mcqs.json");

        let err = load_dataset::<McqFile>(&not_a_dir, Dataset::Mcqs)
            .await
            .expect_err("应该报错");

        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
    }
}
