//! 报表文本格式化工具
//! 将检核报告渲染为等宽文本表格（中日韩全角字符按两列宽计算）

use std::fmt::Write;

use crate::audit::model::{AuditReport, CategorySummary, ClassifiedCourse, RequirementStatus};

/// 报表文本格式化工具
pub struct TableFormatter;

impl TableFormatter {
    /// 渲染完整报告（成绩解析结果 / 学分统计结果 / 学分检查状态）
    pub fn render_report(report: &AuditReport) -> String {
        let mut out = String::new();
        out.push_str("✅ 成績解析結果\n");
        out.push_str(&Self::course_table(&report.courses));
        out.push_str("\n📊 學分統計結果\n");
        out.push_str(&Self::summary_table(&report.summary));
        out.push_str("\n🚦 學分檢查狀態\n");
        out.push_str(&Self::status_table(&report.status));
        out
    }

    /// 课程表
    pub fn course_table(courses: &[ClassifiedCourse]) -> String {
        let rows: Vec<Vec<String>> = courses
            .iter()
            .map(|c| {
                vec![
                    c.record.name.clone(),
                    Self::format_number(c.record.credit),
                    c.record.gpa.map_or_else(|| "-".to_string(), Self::format_number),
                    c.category.label().to_string(),
                    Self::format_number(c.valid_credit),
                ]
            })
            .collect();
        Self::render_table(&["課程名稱", "學分", "GPA", "分類", "有效學分"], &rows)
    }

    /// 学分统计表
    pub fn summary_table(summary: &CategorySummary) -> String {
        let rows: Vec<Vec<String>> = summary
            .rows()
            .iter()
            .map(|r| {
                vec![
                    r.label.label().to_string(),
                    Self::format_number(r.earned_credits),
                    Self::format_number(r.required_credits),
                ]
            })
            .collect();
        Self::render_table(&["分類", "已修學分", "應修學分"], &rows)
    }

    /// 达标状态表
    pub fn status_table(status: &[RequirementStatus]) -> String {
        let rows: Vec<Vec<String>> = status
            .iter()
            .map(|s| {
                vec![
                    s.row.label.label().to_string(),
                    Self::format_number(s.row.earned_credits),
                    Self::format_number(s.row.required_credits),
                    if s.met { "是" } else { "否" }.to_string(),
                    Self::format_number(s.remaining),
                ]
            })
            .collect();
        Self::render_table(&["分類", "已修學分", "應修學分", "是否達標", "尚缺學分"], &rows)
    }

    /// 整数不带小数位，其余保留原精度
    pub fn format_number(value: f64) -> String {
        format!("{}", value)
    }

    /// 通用表格渲染：表头 + 分隔线 + 数据行，各列左对齐
    pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| Self::display_width(h)).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(Self::display_width(cell));
            }
        }

        let mut out = String::new();
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        Self::write_row(&mut out, &header_cells, &widths);
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        Self::write_row(&mut out, &separator, &widths);
        for row in rows {
            Self::write_row(&mut out, row, &widths);
        }
        out
    }

    fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if i > 0 {
                line.push_str(" | ");
            }
            let pad = width.saturating_sub(Self::display_width(cell));
            let _ = write!(line, "{}{}", cell, " ".repeat(pad));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    /// 显示宽度：东亚全角字符计2列
    pub fn display_width(s: &str) -> usize {
        s.chars().map(|c| if Self::is_wide(c) { 2 } else { 1 }).sum()
    }

    fn is_wide(c: char) -> bool {
        matches!(c as u32,
            0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1FAFF
        )
    }
}
