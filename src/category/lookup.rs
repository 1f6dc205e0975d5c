//! 课程名 → 分类 对照表
//! 由分类配置反转而来，加载后只读，可在多次请求间共享

use std::collections::HashMap;
use std::path::Path;

use super::loader::CategoryMapLoader;
use super::model::{Category, CategoryMap};
use crate::config::GlobalConfig;
use crate::error::TxResult;

/// 同一课程名出现在两个分类下的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub course: String,
    /// 被覆盖的分类
    pub overridden: Category,
    /// 最终生效的分类
    pub winner: Category,
}

/// 课程名 → 分类 对照表
#[derive(Debug, Clone, Default)]
pub struct CategoryLookup {
    name_to_category: HashMap<String, Category>,
    collisions: Vec<NameCollision>,
}

impl CategoryLookup {
    /// 反转分类配置：依次遍历分类与课程名，重名时后者覆盖前者
    pub fn from_map(map: &CategoryMap) -> Self {
        let mut name_to_category = HashMap::with_capacity(map.course_count());
        let mut collisions = Vec::new();

        for (category, names) in map.entries() {
            for name in names {
                if let Some(previous) = name_to_category.insert(name.clone(), *category) {
                    if previous != *category {
                        log_warn!(
                            "课程[{}]同时出现在分类[{}]与[{}]中，以后者为准",
                            name,
                            previous,
                            category
                        );
                        collisions.push(NameCollision {
                            course: name.clone(),
                            overridden: previous,
                            winner: *category,
                        });
                    }
                }
            }
        }

        Self {
            name_to_category,
            collisions,
        }
    }

    /// 按全局配置中的路径加载对照表
    pub fn load(config: &GlobalConfig) -> TxResult<Self> {
        Self::load_from_path(&config.category_map_path)
    }

    /// 从本地文件加载对照表
    pub fn load_from_path(path: &Path) -> TxResult<Self> {
        let map = CategoryMapLoader::load_from_path(path)?;
        Ok(Self::from_map(&map))
    }

    /// 异步加载对照表
    #[cfg(feature = "async-io")]
    pub async fn load_async(config: &GlobalConfig) -> TxResult<Self> {
        let map = CategoryMapLoader::load_from_path_async(&config.category_map_path).await?;
        Ok(Self::from_map(&map))
    }

    /// 精确匹配课程名
    pub fn get(&self, course_name: &str) -> Option<Category> {
        self.name_to_category.get(course_name).copied()
    }

    /// 查询课程分类，未配置的课程归入一般選修
    pub fn category_of(&self, course_name: &str) -> Category {
        self.get(course_name).unwrap_or_default()
    }

    /// 重名冲突记录（按发生顺序）
    pub fn collisions(&self) -> &[NameCollision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.name_to_category.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_category.is_empty()
    }
}

impl From<&CategoryMap> for CategoryLookup {
    fn from(map: &CategoryMap) -> Self {
        Self::from_map(map)
    }
}
