//! 课程行匹配器
//! 显式实现以下行模式（不依赖运行期正则）：
//!
//! `<课程名><空白+><学分: 数字[.数字]>學分<空白+>GPA[:：]?<空白*><GPA记号>?`
//!
//! 匹配语义：
//! - 依次尝试行内每一处“學分”标记，取第一处使整行模式成立者
//! - 学分记号为紧贴标记之前的最长“数字/小数点”串，其前必须是空白
//! - 课程名为学分前空白串之前的全部内容（去首尾空白），至少占一个字符
//! - GPA记号为 `GPA[:：]?` 及可选空白之后的整段非空白串，可缺失
//! - 不满足模式的行返回 None（跳过，不报错）

use crate::utils::NumberParser;

/// 学分标记
pub const CREDIT_MARKER: &str = "學分";
/// GPA标记
pub const GPA_MARKER: &str = "GPA";

/// 单行匹配结果（借用原行）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// 已去首尾空白的课程名
    pub name: &'a str,
    pub credit_token: &'a str,
    pub gpa_token: Option<&'a str>,
}

/// 课程行匹配器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLinePattern {
    credit_marker: String,
    gpa_marker: String,
}

impl Default for CourseLinePattern {
    fn default() -> Self {
        Self::new(CREDIT_MARKER, GPA_MARKER)
    }
}

impl CourseLinePattern {
    pub fn new(credit_marker: impl Into<String>, gpa_marker: impl Into<String>) -> Self {
        Self {
            credit_marker: credit_marker.into(),
            gpa_marker: gpa_marker.into(),
        }
    }

    /// 匹配一行文本
    pub fn matches<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        if self.credit_marker.is_empty() {
            return None;
        }
        line.match_indices(self.credit_marker.as_str())
            .find_map(|(marker_pos, _)| self.match_at(line, marker_pos))
    }

    /// 以指定位置的学分标记尝试匹配
    fn match_at<'a>(&self, line: &'a str, marker_pos: usize) -> Option<LineMatch<'a>> {
        let head = &line[..marker_pos];

        // 1. 学分记号：紧贴标记前的最长数字/小数点串
        let credit_start = Self::run_start(head, |c| NumberParser::is_digit(c) || c == '.')?;
        let credit_token = &head[credit_start..];
        if !NumberParser::is_credit_token(credit_token) {
            return None;
        }

        // 2. 学分前必须有空白；课程名至少一个字符
        let before_credit = &head[..credit_start];
        let ws_start = Self::run_start(before_credit, char::is_whitespace)?;
        let name_end = if ws_start > 0 {
            ws_start
        } else {
            // 行首即空白：首个空白字符充当课程名，其后仍需至少一个空白
            let mut chars = before_credit.char_indices().skip(1);
            let (second, _) = chars.next()?;
            second
        };
        let name = before_credit[..name_end].trim();

        // 3. 标记之后：空白+ GPA [:：]? 空白* 记号?
        let tail = &line[marker_pos + self.credit_marker.len()..];
        let after_ws = tail.trim_start();
        if after_ws.len() == tail.len() {
            return None;
        }
        let rest = after_ws.strip_prefix(self.gpa_marker.as_str())?;
        let rest = rest.strip_prefix([':', '：']).unwrap_or(rest);
        let rest = rest.trim_start();
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let gpa_token = (token_end > 0).then(|| &rest[..token_end]);

        Some(LineMatch {
            name,
            credit_token,
            gpa_token,
        })
    }

    /// 末尾连续满足条件的字符串起始位置；末尾字符不满足时返回 None
    fn run_start(s: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
        s.char_indices()
            .rev()
            .take_while(|(_, c)| pred(*c))
            .last()
            .map(|(i, _)| i)
    }
}
