//! credit-audit - 成绩单PDF毕业学分检核工具

// 日志宏须先于其他模块声明
#[macro_use]
mod logging;

// 导出全局错误类型
pub use self::error::{TranscriptError, TxResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig};

// 导出分类对照模块核心接口
pub use self::category::{Category, CategoryLookup, CategoryMap, CategoryMapLoader, NameCollision};

// 导出提取模块核心接口
pub use self::extractor::{PageText, PdfExtractor};

// 导出解析模块核心接口
pub use self::parser::{extract_courses, CourseLinePattern, CourseParser, ParseStats};

// 导出检核模块核心接口
pub use self::audit::{
    AuditOptions, AuditReport, CategorySummary, ClassifiedCourse, CourseClassifier, CourseRecord,
    CreditAggregator, RequirementChecker, RequirementStatus, SummaryLabel, SummaryRow,
    TranscriptAuditor,
};

// 导出工具模块核心接口
pub use self::utils::{NumberParser, TableFormatter};

// 声明所有子模块
pub mod audit;
pub mod category;
pub mod config;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod utils;
