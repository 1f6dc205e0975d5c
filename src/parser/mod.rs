//! 解析模块：将成绩单文本解析为课程记录
pub mod pattern;
pub mod course_parser;

pub use self::pattern::{CourseLinePattern, LineMatch, CREDIT_MARKER, GPA_MARKER};
pub use self::course_parser::{CourseParser, ParseStats, extract_courses};
