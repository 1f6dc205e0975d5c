//! 分类模块：负责分类配置的加载、课程名→分类对照表的构建
pub mod model;
pub mod loader;
pub mod lookup;

// 导出核心接口
pub use self::model::{Category, CategoryMap};
pub use self::loader::CategoryMapLoader;
pub use self::lookup::{CategoryLookup, NameCollision};
