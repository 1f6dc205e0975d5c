//! 提取模块：从PDF成绩单中提取文本层
pub mod pdf_extractor;

pub use self::pdf_extractor::{PageText, PdfExtractor};
