//! 课程分类与学分汇总
use crate::audit::model::{CategorySummary, ClassifiedCourse, CourseRecord};
use crate::category::{Category, CategoryLookup};

/// 课程分类器
pub struct CourseClassifier<'a> {
    lookup: &'a CategoryLookup,
    threshold: f64,
}

impl<'a> CourseClassifier<'a> {
    pub fn new(lookup: &'a CategoryLookup, threshold: f64) -> Self {
        Self { lookup, threshold }
    }

    /// 分类单门课程并计算有效学分，配置中查无此课归入一般選修
    pub fn classify(&self, record: CourseRecord) -> ClassifiedCourse {
        let category = self.lookup.category_of(&record.name);
        ClassifiedCourse::new(record, category, self.threshold)
    }

    /// 按原顺序分类全部课程
    pub fn classify_all(&self, records: Vec<CourseRecord>) -> Vec<ClassifiedCourse> {
        records.into_iter().map(|r| self.classify(r)).collect()
    }
}

/// 学分汇总器
pub struct CreditAggregator;

impl CreditAggregator {
    /// 按分类累加有效学分
    pub fn summarize(courses: &[ClassifiedCourse]) -> CategorySummary {
        if courses.is_empty() {
            return CategorySummary::zero();
        }

        let mut required = 0.0;
        let mut elective_one = 0.0;
        let mut elective_two = 0.0;
        let mut general_elective = 0.0;

        for course in courses {
            let bucket = match course.category {
                Category::Required => &mut required,
                Category::ElectiveOne => &mut elective_one,
                Category::ElectiveTwo => &mut elective_two,
                Category::GeneralElective => &mut general_elective,
            };
            *bucket += course.valid_credit;
        }

        CategorySummary::from_earned(required, elective_one, elective_two, general_elective)
    }
}
