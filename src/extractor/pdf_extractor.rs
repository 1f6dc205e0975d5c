//! PDF文本提取器
//! 逐页提取文本层，按页序拼接；纯图片页（扫描件）不产生文本，直接跳过

use lopdf::Document;

use crate::config::DEFAULT_MAX_PAGES;
use crate::error::{TxResult, TranscriptError};

/// 单页提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 页码（从1开始）
    pub page_number: u32,
    pub text: String,
}

/// PDF文本提取器
#[derive(Debug, Clone, Copy)]
pub struct PdfExtractor {
    max_pages: usize,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl PdfExtractor {
    /// 创建提取器，页数上限必须 ≥ 1
    pub fn new(max_pages: usize) -> TxResult<Self> {
        if max_pages == 0 {
            return Err(TranscriptError::InvalidInput(
                "页数上限必须至少为1".to_string(),
            ));
        }
        Ok(Self { max_pages })
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// 从内存中的PDF提取文本，页间以换行分隔；无任何文本时返回空串
    pub fn extract(&self, pdf_bytes: &[u8]) -> TxResult<String> {
        let pages = self.extract_pages(pdf_bytes)?;

        let mut text = String::new();
        for page in &pages {
            text.push_str(&page.text);
            text.push('\n');
        }
        Ok(text)
    }

    /// 逐页提取（仅返回含文本的页，最多处理 max_pages 页）
    pub fn extract_pages(&self, pdf_bytes: &[u8]) -> TxResult<Vec<PageText>> {
        let doc = Document::load_mem(pdf_bytes)
            .map_err(|e| TranscriptError::DocumentReadError(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        log_debug!(
            "PDF共{}页，处理前{}页",
            page_numbers.len(),
            page_numbers.len().min(self.max_pages)
        );

        let mut pages = Vec::new();
        for page_number in page_numbers.into_iter().take(self.max_pages) {
            match doc.extract_text(&[page_number]) {
                Ok(raw) => {
                    let text = raw.trim_end_matches(['\r', '\n']);
                    if text.trim().is_empty() {
                        log_debug!("第{}页无文本层，跳过", page_number);
                        continue;
                    }
                    log_debug!("第{}页提取文本{}字符", page_number, text.chars().count());
                    pages.push(PageText {
                        page_number,
                        text: text.to_string(),
                    });
                }
                Err(e) => {
                    // 单页解码失败按无文本页处理
                    log_warn!("第{}页文本解码失败，跳过：{}", page_number, e);
                }
            }
        }

        Ok(pages)
    }
}
