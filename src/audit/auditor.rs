//! 成绩单检核器：整合提取、解析、分类、汇总与达标检查，输出完整报告
//! 分类对照表以 Arc 注入，只读共享；每次检核互不影响
use std::sync::Arc;

use super::checker::RequirementChecker;
use super::classifier::{CourseClassifier, CreditAggregator};
use super::model::{AuditReport, CategorySummary, CourseRecord, SummaryLabel};
use crate::category::CategoryLookup;
use crate::config::{GlobalConfig, DEFAULT_MAX_PAGES, GPA_PASS_THRESHOLD};
use crate::error::TxResult;
use crate::extractor::PdfExtractor;
use crate::parser::CourseParser;

/// 单次检核参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditOptions {
    pub max_pages: usize,
    pub pass_threshold: f64,
    /// 逐门输出课程分类明细
    pub verbose: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            pass_threshold: GPA_PASS_THRESHOLD,
            verbose: false,
        }
    }
}

impl From<&GlobalConfig> for AuditOptions {
    fn from(config: &GlobalConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            pass_threshold: config.pass_threshold,
            verbose: config.verbose,
        }
    }
}

/// 成绩单检核器
#[derive(Debug, Clone)]
pub struct TranscriptAuditor {
    lookup: Arc<CategoryLookup>,
    options: AuditOptions,
    parser: CourseParser,
}

impl TranscriptAuditor {
    /// 使用已加载的对照表创建检核器
    pub fn new(lookup: Arc<CategoryLookup>, options: AuditOptions) -> Self {
        Self {
            lookup,
            options,
            parser: CourseParser::default(),
        }
    }

    /// 按全局配置加载对照表并创建检核器（配置缺失即失败）
    pub fn from_config(config: &GlobalConfig) -> TxResult<Self> {
        let lookup = CategoryLookup::load(config)?;
        log_info!(
            "分类对照表加载完成，课程名{}个，重名冲突{}处",
            lookup.len(),
            lookup.collisions().len()
        );
        Ok(Self::new(Arc::new(lookup), AuditOptions::from(config)))
    }

    /// 替换默认解析器
    pub fn with_parser(mut self, parser: CourseParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn lookup(&self) -> &CategoryLookup {
        &self.lookup
    }

    pub fn options(&self) -> AuditOptions {
        self.options
    }

    /// 检核一份PDF成绩单；文档无法读取时直接失败，不输出部分结果
    pub fn audit_pdf(&self, pdf_bytes: &[u8]) -> TxResult<AuditReport> {
        let extractor = PdfExtractor::new(self.options.max_pages)?;
        let text = extractor.extract(pdf_bytes)?;
        Ok(self.audit_text(&text))
    }

    /// 检核已提取的成绩单文本
    pub fn audit_text(&self, text: &str) -> AuditReport {
        let (records, _) = self.parser.parse_with_stats(text);
        self.audit_records(records)
    }

    /// 检核课程记录
    pub fn audit_records(&self, records: Vec<CourseRecord>) -> AuditReport {
        let (courses, summary) = if records.is_empty() {
            // 无课程：跳过分类，直接给出全零统计
            (Vec::new(), CategorySummary::zero())
        } else {
            let classifier = CourseClassifier::new(&self.lookup, self.options.pass_threshold);
            let courses = classifier.classify_all(records);
            if self.options.verbose {
                for course in &courses {
                    log_info!(
                        "课程[{}] {}學分 GPA:{:?} → {}，有效学分{}",
                        course.record.name,
                        course.record.credit,
                        course.record.gpa,
                        course.category,
                        course.valid_credit
                    );
                }
            }
            let summary = CreditAggregator::summarize(&courses);
            (courses, summary)
        };
        let status = RequirementChecker::check(&summary);

        log_info!(
            "检核完成：课程{}门，必修{}/{}，選修總學分{}/{}",
            courses.len(),
            summary.earned(SummaryLabel::Required),
            SummaryLabel::Required.required_credits(),
            summary.earned(SummaryLabel::ElectiveTotal),
            SummaryLabel::ElectiveTotal.required_credits()
        );

        AuditReport {
            courses,
            summary,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, CategoryMap};

    fn auditor() -> TranscriptAuditor {
        let map = CategoryMap::new(vec![
            (Category::Required, vec!["日文文法".to_string()]),
            (Category::ElectiveOne, vec!["日文會話".to_string()]),
        ]);
        TranscriptAuditor::new(Arc::new(CategoryLookup::from_map(&map)), AuditOptions::default())
    }

    #[test]
    fn test_audit_text_scenario() {
        let report = auditor().audit_text("日文會話 2學分 GPA:4.0\n日文文法 3學分 GPA:1.0");

        assert_eq!(report.courses.len(), 2);
        assert_eq!(report.courses[0].category, Category::ElectiveOne);
        assert_eq!(report.courses[0].valid_credit, 2.0);
        assert_eq!(report.courses[1].valid_credit, 0.0);
        assert_eq!(report.summary.earned(SummaryLabel::ElectiveOne), 2.0);
        assert_eq!(report.summary.earned(SummaryLabel::ElectiveTotal), 2.0);
        assert_eq!(report.status[1].remaining, 8.0);
    }

    #[test]
    fn test_audit_empty_text() {
        let report = auditor().audit_text("");
        assert!(report.courses.is_empty());
        assert_eq!(report.summary, CategorySummary::zero());
        assert!(!report.all_met());
    }

    #[test]
    fn test_zero_page_limit_is_invalid_input() {
        let auditor = TranscriptAuditor::new(
            Arc::new(CategoryLookup::default()),
            AuditOptions { max_pages: 0, ..AuditOptions::default() },
        );
        let err = auditor.audit_pdf(b"%PDF-1.5").unwrap_err();
        assert!(matches!(err, crate::error::TranscriptError::InvalidInput(_)));
    }

    #[test]
    fn test_options_from_config() {
        let config = crate::config::ConfigManager::custom()
            .max_pages(3)
            .pass_threshold(2.0)
            .verbose(true)
            .build();
        let options = AuditOptions::from(&config);
        assert_eq!(
            options,
            AuditOptions { max_pages: 3, pass_threshold: 2.0, verbose: true }
        );
        assert!(!AuditOptions::default().verbose);
    }

    #[test]
    fn test_verbose_does_not_change_report() {
        let text = "日文會話 2學分 GPA:4.0\n西洋史 3學分 GPA:1.0";
        let quiet = auditor().audit_text(text);
        let verbose = TranscriptAuditor::new(
            auditor().lookup.clone(),
            AuditOptions { verbose: true, ..AuditOptions::default() },
        )
        .audit_text(text);
        assert_eq!(quiet, verbose);
    }
}
