//! 检核模块：课程分类、学分汇总、达标检查及完整流程编排
pub mod model;
pub mod classifier;
pub mod checker;
pub mod auditor;

// 导出核心接口
pub use self::model::{
    AuditReport, CategorySummary, ClassifiedCourse, CourseRecord, RequirementStatus,
    SummaryLabel, SummaryRow,
};
pub use self::classifier::{CourseClassifier, CreditAggregator};
pub use self::checker::RequirementChecker;
pub use self::auditor::{AuditOptions, TranscriptAuditor};
