use super::*;

#[test]
fn seed_summary() {
    let summary = summarize(&seed());
    let cards: Vec<String> = summary.metrics.iter().map(|m| format!("{}={}", m.label, m.value)).collect();
    assert_eq!(cards, vec!["总问题数=2", "待处理=0", "处理中=1", "已解决=1"]);

    let types = summary.chart("问题类型分布").unwrap();
    assert_eq!(types.points.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(), vec!["设备故障", "质量问题"]);
}

#[test]
fn closed_issues_count_as_solved() {
    let mut records = seed();
    records.push(Record::new().with("status", FieldValue::choice("已关闭", "closed")));
    records.push(Record::new());

    let summary = summarize(&records);
    assert_eq!(summary.metric("已解决").unwrap().to_string(), "2");
    let status = summary.chart("问题状态分布").unwrap();
    assert_eq!(status.value_of("未知状态"), Some(1.0));
    assert_eq!(status.value_of("已关闭"), Some(1.0));
    let types = summary.chart("问题类型分布").unwrap();
    assert_eq!(types.value_of("未知类型"), Some(2.0));
}
