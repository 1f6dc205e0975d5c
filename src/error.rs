//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum TranscriptError {
    // 配置相关错误（启动期致命）
    #[error("分类配置加载失败：{0}")]
    ConfigLoadError(String),

    // 文档相关错误（单次请求失败，不重试）
    #[error("成绩单PDF读取失败：{0}")]
    DocumentReadError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl TranscriptError {
    /// 是否为启动期致命错误（配置缺失/损坏）
    pub fn is_fatal(&self) -> bool {
        matches!(self, TranscriptError::ConfigLoadError(_))
    }
}

// 全局Result类型
pub type TxResult<T> = Result<T, TranscriptError>;
