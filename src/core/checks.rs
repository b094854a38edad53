use crate::domain::model::{CheckResult, FileVerdict, Rule, RuleSet};
use regex::Regex;
use std::sync::LazyLock;

static LINE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line separator pattern is valid"));

/// 第一個 JSON 值的頂層成員數（物件欄位或陣列元素），純量為 0。
/// 第一個值之後的內容不檢查，例如同一行裡的第二個回應。
pub fn json_member_count(payload: &str) -> std::result::Result<usize, serde_json::Error> {
    let first = serde_json::Deserializer::from_str(payload)
        .into_iter::<serde_json::Value>()
        .next();
    let value = match first {
        Some(value) => value?,
        // 空白內容：交給 from_str 產生 EOF 錯誤
        None => serde_json::from_str::<serde_json::Value>(payload)?,
    };
    Ok(match value {
        serde_json::Value::Object(map) => map.len(),
        serde_json::Value::Array(items) => items.len(),
        _ => 0,
    })
}

/// 以 `\r\n`、`\r`、`\n` 切行；結尾的空行不計，空字串算一行
pub fn line_count(content: &str) -> usize {
    if content.is_empty() {
        return 1;
    }

    let mut segments: Vec<&str> = LINE_SEPARATOR.split(content).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments.len()
}

/// 在 `[min, max]` 內回傳 0，否則回傳帶正負號的偏差
pub fn line_deviation(count: usize, min: usize, max: usize) -> i64 {
    let count = count as i64;
    if count > max as i64 {
        count - max as i64
    } else if count < min as i64 {
        count - min as i64
    } else {
        0
    }
}

/// 回傳找不到的字串（不分大小寫），保持設定順序
pub fn missing_substrings(content: &str, required: &[String]) -> Vec<String> {
    let haystack = content.to_lowercase();
    required
        .iter()
        .filter(|needle| !haystack.contains(&needle.to_lowercase()))
        .cloned()
        .collect()
}

pub fn contains_any(content: &str, alternatives: &[String]) -> bool {
    let haystack = content.to_lowercase();
    alternatives
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}

pub fn check_json(payload: &str) -> CheckResult {
    match json_member_count(payload) {
        Ok(members) => CheckResult::pass(Rule::JsonSyntax, format!("Size: {}", members)),
        Err(e) => CheckResult::fail(Rule::JsonSyntax, format!("JSON parsing error: {}", e)),
    }
}

pub fn check_line_count(payload: &str, min: usize, max: usize) -> CheckResult {
    let count = line_count(payload);
    match line_deviation(count, min, max) {
        0 => CheckResult::pass(Rule::LineCount, format!("{} lines", count)),
        deviation => CheckResult::fail(
            Rule::LineCount,
            format!(
                "{} lines, deviation {:+} (allowed {}..={})",
                count, deviation, min, max
            ),
        )
        .with_deviation(deviation),
    }
}

pub fn check_mandatory(payload: &str, required: &[String]) -> CheckResult {
    let missing = missing_substrings(payload, required);
    if missing.is_empty() {
        CheckResult::pass(Rule::Mandatory, format!("all {} found", required.len()))
    } else {
        CheckResult::fail(Rule::Mandatory, format!("missing: {}", missing.join(",")))
    }
}

pub fn check_at_least_one_of(payload: &str, alternatives: &[String]) -> CheckResult {
    if alternatives.is_empty() {
        return CheckResult::pass(Rule::AtLeastOneOf, "no alternatives configured");
    }

    let listed = alternatives.join(",");
    if contains_any(payload, alternatives) {
        CheckResult::pass(Rule::AtLeastOneOf, listed)
    } else {
        CheckResult::fail(Rule::AtLeastOneOf, format!("none of {} found", listed))
    }
}

/// 執行全部檢查；每項獨立，任一失敗不影響其他項
pub fn run_checks(rules: &RuleSet, payload: &str) -> FileVerdict {
    let checks = vec![
        check_json(payload),
        check_line_count(payload, rules.min_lines, rules.max_lines),
        check_mandatory(payload, &rules.mandatory),
        check_at_least_one_of(payload, &rules.at_least_one_of),
    ];

    for check in &checks {
        tracing::debug!(rule = %check.rule, passed = check.passed, "{}", check.detail);
    }

    FileVerdict::new(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::extract_payload;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_json_member_count() {
        assert_eq!(json_member_count(r#"{"action":"greet","result":"200"}"#).unwrap(), 2);
        assert_eq!(json_member_count("[1, 2, 3]").unwrap(), 3);
        assert_eq!(json_member_count("42").unwrap(), 0);
        assert!(json_member_count("{\"a\":1").is_err());
        assert!(json_member_count("").is_err());
        assert!(json_member_count("  \n").is_err());
    }

    #[test]
    fn test_json_ignores_text_after_first_value() {
        let content = r#"request {"action":"greet"} response {"result":"200"}"#;
        let result = check_json(extract_payload(content).text);
        assert!(result.passed, "{}", result.detail);
        assert_eq!(result.detail, "Size: 1");

        let result = check_json("{\"a\":1} trailing }");
        assert!(result.passed, "{}", result.detail);
        assert_eq!(result.detail, "Size: 1");
    }

    #[test]
    fn test_check_json_reports_parser_message() {
        let result = check_json("{\"a\":1");
        assert!(!result.passed);
        assert!(result.detail.starts_with("JSON parsing error:"));
        assert!(result.detail.contains("line 1"));
    }

    #[test]
    fn test_line_count_separators() {
        assert_eq!(line_count("one line"), 1);
        assert_eq!(line_count("a\nb\r\nc\rd"), 4);
        assert_eq!(line_count("a\r\n\r\nb"), 3);
        assert_eq!(line_count("a\nb\n"), 2);
        assert_eq!(line_count(""), 1);
    }

    #[test]
    fn test_line_count_is_stable_across_calls() {
        let content = "{\n  \"a\": 1,\r\n  \"b\": 2\r}";
        assert_eq!(line_count(content), line_count(content));
    }

    #[test]
    fn test_line_deviation() {
        assert_eq!(line_deviation(300, 100, 500), 0);
        assert_eq!(line_deviation(100, 100, 500), 0);
        assert_eq!(line_deviation(500, 100, 500), 0);
        assert_eq!(line_deviation(600, 100, 500), 100);
        assert_eq!(line_deviation(40, 100, 500), -60);
    }

    #[test]
    fn test_check_line_count_over_bounds() {
        let content = "line\n".repeat(600);
        let result = check_line_count(&content, 100, 500);
        assert!(!result.passed);
        assert_eq!(result.deviation, Some(100));
        assert!(result.detail.contains("+100"));
    }

    #[test]
    fn test_missing_substrings_is_case_insensitive() {
        let content = r#"{"RESULT": "OK", "Action": "greet"}"#;
        assert!(missing_substrings(content, &strings(&["result", "action"])).is_empty());
        assert!(missing_substrings(content, &strings(&["Result"])).is_empty());
    }

    #[test]
    fn test_missing_substrings_keeps_order() {
        let content = "status 200";
        let missing = missing_substrings(content, &strings(&["precondition", "200", "/greet"]));
        assert_eq!(missing, strings(&["precondition", "/greet"]));

        let result = check_mandatory(content, &strings(&["precondition", "200", "/greet"]));
        assert_eq!(result.detail, "missing: precondition,/greet");
    }

    #[test]
    fn test_contains_any() {
        let alternatives = strings(&["character", "edge", "corner"]);
        assert!(contains_any("an EDGE case", &alternatives));
        assert!(!contains_any("nothing relevant", &alternatives));
    }

    #[test]
    fn test_at_least_one_of_without_alternatives_passes() {
        assert!(check_at_least_one_of("anything", &[]).passed);
    }

    #[test]
    fn test_run_checks_accepts_greet_payload() {
        let rules = RuleSet {
            min_lines: 1,
            max_lines: 5,
            mandatory: strings(&["200", "result"]),
            at_least_one_of: vec![],
        };
        let verdict = run_checks(&rules, r#"{"action":"greet","result":"200"}"#);
        assert!(verdict.is_ok());
        assert_eq!(verdict.checks.len(), 4);
        assert_eq!(verdict.checks[0].detail, "Size: 2");
        assert_eq!(verdict.checks[1].detail, "1 lines");
    }

    #[test]
    fn test_run_checks_runs_every_rule_after_a_failure() {
        let rules = RuleSet {
            min_lines: 10,
            max_lines: 20,
            mandatory: strings(&["result"]),
            at_least_one_of: strings(&["edge"]),
        };
        let verdict = run_checks(&rules, "{\"a\":1");
        assert!(!verdict.is_ok());
        assert_eq!(verdict.failures().count(), 4);
    }
}
