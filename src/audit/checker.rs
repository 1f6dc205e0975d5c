//! 毕业学分达标检查
use crate::audit::model::{CategorySummary, RequirementStatus, SummaryRow};

/// 达标检查器
pub struct RequirementChecker;

impl RequirementChecker {
    /// 逐行检查，输出顺序与统计表一致
    pub fn check(summary: &CategorySummary) -> Vec<RequirementStatus> {
        summary.rows().iter().map(Self::check_row).collect()
    }

    /// 已修 ≥ 应修即达标；尚缺学分不为负
    pub fn check_row(row: &SummaryRow) -> RequirementStatus {
        RequirementStatus {
            row: *row,
            met: row.earned_credits >= row.required_credits,
            remaining: (row.required_credits - row.earned_credits).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::model::SummaryLabel;

    #[test]
    fn test_zero_summary_all_unmet() {
        let status = RequirementChecker::check(&CategorySummary::zero());
        assert_eq!(status.len(), 4);
        for s in &status {
            assert!(!s.met);
            assert_eq!(s.remaining, s.row.required_credits);
        }
    }

    #[test]
    fn test_partial_exact_and_over_completion() {
        let summary = CategorySummary::from_earned(90.0, 10.0, 4.0, 30.0);
        let status = RequirementChecker::check(&summary);

        let required = &status[0];
        assert_eq!(required.row.label, SummaryLabel::Required);
        assert!(required.met);
        assert_eq!(required.remaining, 0.0);

        let elective_one = &status[1];
        assert!(elective_one.met);
        assert_eq!(elective_one.remaining, 0.0);

        let elective_two = &status[2];
        assert!(!elective_two.met);
        assert_eq!(elective_two.remaining, 6.0);

        let total = &status[3];
        assert_eq!(total.row.earned_credits, 44.0);
        assert!(total.met);
        assert_eq!(total.remaining, 0.0);
    }
}
