use crate::error::ConfigError;
use std::str::FromStr;

/// 程序配置
///
/// 只影响内容检查程序（从哪里加载题库、日志详细程度、报告写到哪里），
/// 不改变抽题上限、分页大小等核心行为
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库文件所在目录
    pub content_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 内容报告输出文件
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: "data".to_string(),
            verbose_logging: false,
            report_file: "content_report.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量读取配置
    ///
    /// # 返回
    /// 返回配置，以及无法解析而回退到默认值的变量错误。
    /// 调用方在日志初始化之后再输出这些错误
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let default = Self::default();
        let mut fallbacks = Vec::new();

        let verbose_logging = match parse_var(&lookup, "VERBOSE_LOGGING", "bool") {
            Ok(value) => value.unwrap_or(default.verbose_logging),
            Err(e) => {
                fallbacks.push(e);
                default.verbose_logging
            }
        };

        let config = Self {
            content_dir: lookup("CONTENT_DIR").unwrap_or(default.content_dir),
            verbose_logging,
            report_file: lookup("REPORT_FILE").unwrap_or(default.report_file),
        };
        (config, fallbacks)
    }
}

/// 解析单个环境变量，未设置时返回 `Ok(None)`
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn unset_vars_use_defaults() {
        let (config, fallbacks) = Config::from_lookup(lookup_from(&[]));
        assert!(fallbacks.is_empty());
        assert_eq!(config.content_dir, "data");
        assert!(!config.verbose_logging);
        assert_eq!(config.report_file, "content_report.txt");
    }

    #[test]
    fn set_vars_override_defaults() {
        let (config, _) = Config::from_lookup(lookup_from(&[
            ("CONTENT_DIR", "content"),
            ("VERBOSE_LOGGING", "true"),
        ]));
        assert_eq!(config.content_dir, "content");
        assert!(config.verbose_logging);
    }

    #[test]
    fn bad_bool_falls_back_and_reports_the_variable() {
        let (config, fallbacks) = Config::from_lookup(lookup_from(&[("VERBOSE_LOGGING", "loud")]));
        assert!(!config.verbose_logging);

        assert!(matches!(
            fallbacks.as_slice(),
            [ConfigError::EnvVarParseFailed { var_name, value, .. }]
                if var_name == "VERBOSE_LOGGING" && value == "loud"
        ));
    }
}
