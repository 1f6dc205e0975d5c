//! 分类数据模型定义
//! 仅存储分类数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// 课程分类（封闭集合）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "必修")]
    Required,
    #[serde(rename = "I類選修")]
    ElectiveOne,
    #[serde(rename = "II類選修")]
    ElectiveTwo,
    /// 配置中查无此课时的默认分类
    #[default]
    #[serde(rename = "一般選修")]
    GeneralElective,
}

impl Category {
    /// 全部分类，按报表顺序排列
    pub const ALL: [Category; 4] = [
        Category::Required,
        Category::ElectiveOne,
        Category::ElectiveTwo,
        Category::GeneralElective,
    ];

    /// 分类标签（与配置文件中的键一致）
    pub fn label(&self) -> &'static str {
        match self {
            Category::Required => "必修",
            Category::ElectiveOne => "I類選修",
            Category::ElectiveTwo => "II類選修",
            Category::GeneralElective => "一般選修",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|cat| cat.label() == s)
            .ok_or_else(|| format!("未知分类标签：{}", s))
    }
}

/// 分类配置：分类 → 课程名列表
/// 保留配置文件中的书写顺序（冲突时“后者覆盖前者”依赖此顺序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap {
    entries: Vec<(Category, Vec<String>)>,
}

impl CategoryMap {
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// 按书写顺序遍历分类及其课程名
    pub fn entries(&self) -> &[(Category, Vec<String>)] {
        &self.entries
    }

    /// 分类数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 课程名总数（含重复）
    pub fn course_count(&self) -> usize {
        self.entries.iter().map(|(_, names)| names.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_round_trip() {
        for cat in Category::ALL {
            assert_eq!(cat.label().parse::<Category>(), Ok(cat));
        }
        assert!("I 類選修".parse::<Category>().is_err());
        assert!("選修總學分".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_label() {
        let json = serde_json::to_string(&Category::ElectiveTwo).unwrap();
        assert_eq!(json, "\"II類選修\"");
        let cat: Category = serde_json::from_str("\"必修\"").unwrap();
        assert_eq!(cat, Category::Required);
    }

    #[test]
    fn test_default_is_general_elective() {
        assert_eq!(Category::default(), Category::GeneralElective);
    }

    #[test]
    fn test_category_map_counts() {
        let map = CategoryMap::new(vec![
            (Category::Required, vec!["日文文法".to_string(), "日文會話".to_string()]),
            (Category::ElectiveOne, vec!["日本文學".to_string()]),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.course_count(), 3);
        assert!(!map.is_empty());
        assert!(CategoryMap::default().is_empty());
    }
}
