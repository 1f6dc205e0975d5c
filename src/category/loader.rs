//! 分类配置加载器
//! 负责从本地JSON文件读取“分类 → 课程名列表”配置

use std::path::Path;
use serde_json::{Map, Value};

use super::model::{Category, CategoryMap};
use crate::error::{TxResult, TranscriptError};

/// 分类配置加载器
pub struct CategoryMapLoader;

impl CategoryMapLoader {
    /// 从本地文件加载分类配置（文件缺失/损坏均为致命配置错误）
    pub fn load_from_path(path: &Path) -> TxResult<CategoryMap> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranscriptError::ConfigLoadError(format!(
                "读取分类配置[{}]失败：{}",
                path.display(),
                e
            ))
        })?;
        let map = Self::load_from_str(&content)?;
        log_debug!(
            "分类配置[{}]加载成功，分类数：{}，课程名总数：{}",
            path.display(),
            map.len(),
            map.course_count()
        );
        Ok(map)
    }

    /// 异步从本地文件加载分类配置
    #[cfg(feature = "async-io")]
    pub async fn load_from_path_async(path: &Path) -> TxResult<CategoryMap> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            TranscriptError::ConfigLoadError(format!(
                "读取分类配置[{}]失败：{}",
                path.display(),
                e
            ))
        })?;
        Self::load_from_str(&content)
    }

    /// 解析JSON文本：`{ "<分类>": ["<课程名>", ...], ... }`
    pub fn load_from_str(content: &str) -> TxResult<CategoryMap> {
        // preserve_order：保留书写顺序，冲突时后写者覆盖
        let raw: Map<String, Value> = serde_json::from_str(content).map_err(|e| {
            TranscriptError::ConfigLoadError(format!("分类配置不是合法的JSON对象：{}", e))
        })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (label, value) in raw {
            let category: Category = label
                .parse()
                .map_err(TranscriptError::ConfigLoadError)?;
            let names: Vec<String> = serde_json::from_value(value).map_err(|e| {
                TranscriptError::ConfigLoadError(format!(
                    "分类[{}]的课程列表格式错误：{}",
                    label, e
                ))
            })?;
            entries.push((category, names));
        }

        Ok(CategoryMap::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_str_keeps_document_order() {
        let json = r#"{
            "II類選修": ["日本社會"],
            "必修": ["日文文法", "日文會話"],
            "I類選修": []
        }"#;
        let map = CategoryMapLoader::load_from_str(json).unwrap();
        let order: Vec<Category> = map.entries().iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            order,
            vec![Category::ElectiveTwo, Category::Required, Category::ElectiveOne]
        );
        assert_eq!(map.entries()[1].1, vec!["日文文法".to_string(), "日文會話".to_string()]);
        assert_eq!(map.course_count(), 3);
    }

    #[test]
    fn test_unknown_category_label_is_config_error() {
        let err = CategoryMapLoader::load_from_str(r#"{"III類選修": ["x"]}"#).unwrap_err();
        assert!(matches!(err, TranscriptError::ConfigLoadError(_)));
        assert!(err.to_string().contains("III類選修"));
    }

    #[test]
    fn test_malformed_values_are_config_errors() {
        // 非数组
        let err = CategoryMapLoader::load_from_str(r#"{"必修": "日文文法"}"#).unwrap_err();
        assert!(matches!(err, TranscriptError::ConfigLoadError(_)));
        // 非字符串课程名
        let err = CategoryMapLoader::load_from_str(r#"{"必修": ["日文文法", 3]}"#).unwrap_err();
        assert!(matches!(err, TranscriptError::ConfigLoadError(_)));
        // 顶层非对象
        let err = CategoryMapLoader::load_from_str(r#"["必修"]"#).unwrap_err();
        assert!(matches!(err, TranscriptError::ConfigLoadError(_)));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"必修": ["日文文法"], "I類選修": ["日文會話"]}}"#).unwrap();

        let map = CategoryMapLoader::load_from_path(file.path()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.course_count(), 2);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = CategoryMapLoader::load_from_path(Path::new("/nonexistent/category_map.json"))
            .unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("/nonexistent/category_map.json"));
    }

    #[cfg(feature = "async-io")]
    #[tokio::test]
    async fn test_load_from_path_async() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"II類選修": ["日本社會"]}}"#).unwrap();

        let map = CategoryMapLoader::load_from_path_async(file.path()).await.unwrap();
        assert_eq!(map.entries()[0].0, Category::ElectiveTwo);
    }
}
