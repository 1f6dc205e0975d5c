//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 默认分类配置文件路径
pub const DEFAULT_CATEGORY_MAP_PATH: &str = "data/category_map.json";
/// 默认最多处理的PDF页数
pub const DEFAULT_MAX_PAGES: usize = 5;
/// GPA及格门槛（达到该值的课程学分才计入）
pub const GPA_PASS_THRESHOLD: f64 = 1.7;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 分类配置文件路径
    pub category_map_path: PathBuf,
    // 最多处理的PDF页数（≥1）
    pub max_pages: usize,
    // GPA及格门槛
    pub pass_threshold: f64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            category_map_path: PathBuf::from(DEFAULT_CATEGORY_MAP_PATH),
            max_pages: DEFAULT_MAX_PAGES,
            pass_threshold: GPA_PASS_THRESHOLD,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn category_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.category_map_path = path.into();
        self
    }

    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    pub fn pass_threshold(mut self, threshold: f64) -> Self {
        self.config.pass_threshold = threshold;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
