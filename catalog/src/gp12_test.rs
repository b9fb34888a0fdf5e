use super::*;

#[test]
fn seed_summary() {
    let summary = summarize(&seed());
    let cards: Vec<String> = summary.metrics.iter().map(|m| format!("{}={}", m.label, m.value)).collect();
    assert_eq!(cards, vec!["总批次=3", "生产总量=4500", "缺陷总数=3", "平均缺陷率(%)=0.09"]);
}

#[test]
fn trend_is_sorted_by_date() {
    let summary = summarize(&seed());
    let trend = summary.chart("日产量与缺陷趋势").unwrap();
    let dates: Vec<&str> = trend.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(dates, vec!["2025-09-24", "2025-09-25", "2025-09-26"]);
    assert_eq!(trend.points[2].values[..2], [1000.0, 2.0]);
    assert!((trend.points[2].values[2] - 0.2).abs() < 1e-9);
    assert_eq!(trend.points[1].values[2], 0.0);
}

#[test]
fn undated_batches_sort_last_and_share_a_bucket() {
    let mut records = seed();
    records.push(Record::new().with("quantity", "10").with("defectQuantity", "1"));
    records.push(Record::new().with("productionDate", "").with("quantity", "5"));
    let summary = summarize(&records);
    let trend = summary.chart("日产量与缺陷趋势").unwrap();
    let last = trend.points.last().unwrap();
    assert_eq!(last.label, UNKNOWN_DATE);
    assert_eq!(last.values[..2], [15.0, 1.0]);
}

#[test]
fn missing_quantity_divides_by_one() {
    let record = Record::new().with("quantity", "").with("defectQuantity", "2");
    assert!((batch_defect_rate(&record) - 200.0).abs() < 1e-9);
    let zero = Record::new().with("quantity", "0").with("defectQuantity", "2");
    assert_eq!(batch_defect_rate(&zero), 0.0);
    let junk = Record::new().with("quantity", "many").with("defectQuantity", "x");
    assert_eq!(batch_defect_rate(&junk), 0.0);
}

#[test]
fn dispositions_tally_with_unknown_bucket() {
    let mut records = seed();
    records.push(Record::new());
    let summary = summarize(&records);
    let dispositions = summary.chart("批次处理方式分布").unwrap();
    assert_eq!(dispositions.value_of("未知处理"), Some(1.0));
    assert_eq!(dispositions.points.len(), 4);
}

#[test]
fn huge_quantities_saturate_instead_of_overflowing() {
    let big = Record::new()
        .with("productionDate", "2025-09-26")
        .with("quantity", "9223372036854775807")
        .with("defectQuantity", "9223372036854775807");
    let summary = summarize(&[big.clone(), big]);

    assert_eq!(summary.metric("生产总量").unwrap().to_string(), i64::MAX.to_string());
    assert_eq!(summary.metric("缺陷总数").unwrap().to_string(), i64::MAX.to_string());
    let trend = summary.chart("日产量与缺陷趋势").unwrap();
    assert_eq!(trend.points.len(), 1);
    assert_eq!(trend.value_of("2025-09-26"), Some(int_f64(i64::MAX)));
}
