//! 数值记号解析工具
//! 负责学分/GPA记号的识别与转换（兼容全角数字）

/// 数值记号解析工具
pub struct NumberParser;

impl NumberParser {
    /// 是否为十进制数字（ASCII 或全角 ０-９）
    pub fn is_digit(c: char) -> bool {
        c.is_ascii_digit() || ('０'..='９').contains(&c)
    }

    /// 全角数字转为ASCII，其余字符保持不变
    pub fn normalize(token: &str) -> String {
        token
            .chars()
            .map(|c| match c {
                '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
                _ => c,
            })
            .collect()
    }

    /// 学分记号：`\d+(\.\d+)?`
    pub fn is_credit_token(token: &str) -> bool {
        let (int_part, frac_part) = match token.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (token, None),
        };
        let all_digits = |s: &str| !s.is_empty() && s.chars().all(Self::is_digit);

        all_digits(int_part) && frac_part.is_none_or(all_digits)
    }

    /// 解析学分记号，格式不符时返回 None
    pub fn parse_credit(token: &str) -> Option<f64> {
        if !Self::is_credit_token(token) {
            return None;
        }
        Self::normalize(token).parse().ok()
    }

    /// 解析GPA记号：去掉第一个小数点后须全为数字（且非空），否则视为缺失
    pub fn parse_gpa(token: &str) -> Option<f64> {
        let without_first_dot = token.replacen('.', "", 1);
        if without_first_dot.is_empty() || !without_first_dot.chars().all(Self::is_digit) {
            return None;
        }
        Self::normalize(token).parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_token_shape() {
        assert!(NumberParser::is_credit_token("2"));
        assert!(NumberParser::is_credit_token("12"));
        assert!(NumberParser::is_credit_token("1.5"));
        assert!(NumberParser::is_credit_token("３"));
        assert!(!NumberParser::is_credit_token(""));
        assert!(!NumberParser::is_credit_token("."));
        assert!(!NumberParser::is_credit_token("2."));
        assert!(!NumberParser::is_credit_token(".5"));
        assert!(!NumberParser::is_credit_token("1.2.3"));
        assert!(!NumberParser::is_credit_token("2a"));
    }

    #[test]
    fn test_parse_credit() {
        assert_eq!(NumberParser::parse_credit("2"), Some(2.0));
        assert_eq!(NumberParser::parse_credit("0.5"), Some(0.5));
        assert_eq!(NumberParser::parse_credit("３"), Some(3.0));
        assert_eq!(NumberParser::parse_credit("1.2.3"), None);
    }

    #[test]
    fn test_parse_gpa_accepts_single_decimal_point() {
        assert_eq!(NumberParser::parse_gpa("4.0"), Some(4.0));
        assert_eq!(NumberParser::parse_gpa("3"), Some(3.0));
        assert_eq!(NumberParser::parse_gpa("1.7"), Some(1.7));
        assert_eq!(NumberParser::parse_gpa("4."), Some(4.0));
        assert_eq!(NumberParser::parse_gpa(".5"), Some(0.5));
        assert_eq!(NumberParser::parse_gpa("３.５"), Some(3.5));
    }

    #[test]
    fn test_parse_gpa_rejects_other_tokens() {
        assert_eq!(NumberParser::parse_gpa(""), None);
        assert_eq!(NumberParser::parse_gpa("."), None);
        assert_eq!(NumberParser::parse_gpa("A+"), None);
        assert_eq!(NumberParser::parse_gpa("1.2.3"), None);
        assert_eq!(NumberParser::parse_gpa("-1"), None);
        assert_eq!(NumberParser::parse_gpa("抵免"), None);
        assert_eq!(NumberParser::parse_gpa("4.0(重修)"), None);
    }
}
