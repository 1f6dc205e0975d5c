//! 课程记录解析器
//! 将提取出的成绩单文本逐行匹配为课程记录，保持原文顺序，不去重

use once_cell::sync::Lazy;

use super::pattern::CourseLinePattern;
use crate::audit::model::CourseRecord;
use crate::utils::NumberParser;

/// 默认解析器（學分 / GPA 标记）
static DEFAULT_PARSER: Lazy<CourseParser> = Lazy::new(CourseParser::default);

/// 解析统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// 非空行数
    pub lines: usize,
    pub matched: usize,
    pub skipped: usize,
}

/// 课程记录解析器
#[derive(Debug, Clone, Default)]
pub struct CourseParser {
    pattern: CourseLinePattern,
}

impl CourseParser {
    pub fn new(pattern: CourseLinePattern) -> Self {
        Self { pattern }
    }

    /// 按行边界切分文本（\n \r \v \f \x1c-\x1e \x85 U+2028 U+2029）
    pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
        text.split(|c: char| {
            matches!(
                c,
                '\n' | '\r'
                    | '\u{0b}'
                    | '\u{0c}'
                    | '\u{1c}'
                    | '\u{1d}'
                    | '\u{1e}'
                    | '\u{85}'
                    | '\u{2028}'
                    | '\u{2029}'
            )
        })
    }

    /// 解析单行，不匹配时返回 None
    pub fn parse_line(&self, line: &str) -> Option<CourseRecord> {
        let matched = self.pattern.matches(line)?;
        let credit = NumberParser::parse_credit(matched.credit_token)?;
        let gpa = matched.gpa_token.and_then(NumberParser::parse_gpa);

        Some(CourseRecord::new(matched.name, credit, gpa))
    }

    /// 解析整段文本
    pub fn parse(&self, text: &str) -> Vec<CourseRecord> {
        self.parse_with_stats(text).0
    }

    /// 解析整段文本，同时返回统计信息
    pub fn parse_with_stats(&self, text: &str) -> (Vec<CourseRecord>, ParseStats) {
        let mut stats = ParseStats::default();
        let mut records = Vec::new();

        for line in Self::split_lines(text).filter(|l| !l.trim().is_empty()) {
            stats.lines += 1;
            match self.parse_line(line) {
                Some(record) => {
                    stats.matched += 1;
                    records.push(record);
                }
                None => stats.skipped += 1,
            }
        }

        log_debug!(
            "课程行解析完成：非空行{}，匹配{}，跳过{}",
            stats.lines,
            stats.matched,
            stats.skipped
        );
        (records, stats)
    }
}

/// 使用默认解析器解析成绩单文本
pub fn extract_courses(text: &str) -> Vec<CourseRecord> {
    DEFAULT_PARSER.parse(text)
}
