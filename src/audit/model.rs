//! 检核结果数据模型定义
//! 课程记录、分类结果、学分统计与达标状态，均支持序列化

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// 成绩单中匹配到的一条课程记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    /// 学分（≥0）
    pub credit: f64,
    /// GPA，缺失或无法解析时为 None
    pub gpa: Option<f64>,
}

impl CourseRecord {
    pub fn new(name: impl Into<String>, credit: f64, gpa: Option<f64>) -> Self {
        Self {
            name: name.into(),
            credit,
            gpa,
        }
    }

    /// GPA 是否达到门槛（GPA 缺失视为未达标）
    pub fn is_passing(&self, threshold: f64) -> bool {
        self.gpa.is_some_and(|gpa| gpa >= threshold)
    }

    /// 有效学分：达标计入全部学分，否则为0
    pub fn valid_credit(&self, threshold: f64) -> f64 {
        if self.is_passing(threshold) {
            self.credit
        } else {
            0.0
        }
    }
}

/// 完成分类的课程（创建后不再修改）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedCourse {
    #[serde(flatten)]
    pub record: CourseRecord,
    pub category: Category,
    pub valid_credit: f64,
}

impl ClassifiedCourse {
    pub fn new(record: CourseRecord, category: Category, threshold: f64) -> Self {
        let valid_credit = record.valid_credit(threshold);
        Self {
            record,
            category,
            valid_credit,
        }
    }
}

/// 学分统计行标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryLabel {
    #[serde(rename = "必修")]
    Required,
    #[serde(rename = "I類選修")]
    ElectiveOne,
    #[serde(rename = "II類選修")]
    ElectiveTwo,
    /// I類 + II類 + 一般選修
    #[serde(rename = "選修總學分")]
    ElectiveTotal,
}

impl SummaryLabel {
    /// 报表固定顺序
    pub const ALL: [SummaryLabel; 4] = [
        SummaryLabel::Required,
        SummaryLabel::ElectiveOne,
        SummaryLabel::ElectiveTwo,
        SummaryLabel::ElectiveTotal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryLabel::Required => "必修",
            SummaryLabel::ElectiveOne => "I類選修",
            SummaryLabel::ElectiveTwo => "II類選修",
            SummaryLabel::ElectiveTotal => "選修總學分",
        }
    }

    /// 毕业应修学分（固定值）
    pub fn required_credits(&self) -> f64 {
        match self {
            SummaryLabel::Required => 84.0,
            SummaryLabel::ElectiveOne => 10.0,
            SummaryLabel::ElectiveTwo => 10.0,
            SummaryLabel::ElectiveTotal => 44.0,
        }
    }
}

impl fmt::Display for SummaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 学分统计行
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: SummaryLabel,
    pub earned_credits: f64,
    pub required_credits: f64,
}

/// 学分统计表：固定四行（必修 / I類選修 / II類選修 / 選修總學分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySummary {
    rows: [SummaryRow; 4],
}

impl CategorySummary {
    /// 由各分类已修有效学分构建统计表，選修總學分 = I類 + II類 + 一般選修
    pub fn from_earned(
        required: f64,
        elective_one: f64,
        elective_two: f64,
        general_elective: f64,
    ) -> Self {
        let elective_total = elective_one + elective_two + general_elective;
        let earned = [required, elective_one, elective_two, elective_total];

        let rows = std::array::from_fn(|i| {
            let label = SummaryLabel::ALL[i];
            SummaryRow {
                label,
                earned_credits: earned[i],
                required_credits: label.required_credits(),
            }
        });
        Self { rows }
    }

    /// 全零统计表（无课程时使用）
    pub fn zero() -> Self {
        Self::from_earned(0.0, 0.0, 0.0, 0.0)
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn row(&self, label: SummaryLabel) -> &SummaryRow {
        // rows 与 SummaryLabel::ALL 顺序一致
        &self.rows[label as usize]
    }

    pub fn earned(&self, label: SummaryLabel) -> f64 {
        self.row(label).earned_credits
    }
}

impl Default for CategorySummary {
    fn default() -> Self {
        Self::zero()
    }
}

/// 达标状态行
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequirementStatus {
    #[serde(flatten)]
    pub row: SummaryRow,
    pub met: bool,
    /// 尚缺学分（≥0）
    pub remaining: f64,
}

/// 一份成绩单的完整检核报告（三张表）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub courses: Vec<ClassifiedCourse>,
    pub summary: CategorySummary,
    pub status: Vec<RequirementStatus>,
}

impl AuditReport {
    /// 是否全部达标
    pub fn all_met(&self) -> bool {
        self.status.iter().all(|s| s.met)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credit_threshold() {
        let threshold = 1.7;
        assert_eq!(CourseRecord::new("日文會話", 2.0, Some(4.0)).valid_credit(threshold), 2.0);
        assert_eq!(CourseRecord::new("日文會話", 2.0, Some(1.7)).valid_credit(threshold), 2.0);
        assert_eq!(CourseRecord::new("日文會話", 2.0, Some(1.0)).valid_credit(threshold), 0.0);
        // GPA 缺失不计学分
        assert_eq!(CourseRecord::new("日文會話", 2.0, None).valid_credit(threshold), 0.0);
    }

    #[test]
    fn test_zero_summary_targets() {
        let summary = CategorySummary::zero();
        let targets: Vec<(&str, f64, f64)> = summary
            .rows()
            .iter()
            .map(|r| (r.label.label(), r.earned_credits, r.required_credits))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("必修", 0.0, 84.0),
                ("I類選修", 0.0, 10.0),
                ("II類選修", 0.0, 10.0),
                ("選修總學分", 0.0, 44.0),
            ]
        );
    }

    #[test]
    fn test_elective_total_excludes_required() {
        let summary = CategorySummary::from_earned(30.0, 4.0, 2.0, 6.5);
        assert_eq!(summary.earned(SummaryLabel::Required), 30.0);
        assert_eq!(summary.earned(SummaryLabel::ElectiveTotal), 12.5);
        assert_eq!(summary.row(SummaryLabel::ElectiveTwo).required_credits, 10.0);
    }

    #[test]
    fn test_classified_course_serializes_flat() {
        let course = ClassifiedCourse::new(
            CourseRecord::new("日文會話", 2.0, Some(4.0)),
            Category::ElectiveOne,
            1.7,
        );
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["name"], "日文會話");
        assert_eq!(json["category"], "I類選修");
        assert_eq!(json["valid_credit"], 2.0);
    }
}
