//! 5S workplace inspections: one row per area check, scored 1-5 on each of
//! the five dimensions.

use records::{Column, FieldValue, Record};

use crate::shared::{choice_score, distinct_labels, group_by, int_f64, label_or, options, round_half_up};
use crate::summary::{Chart, Metric, Summary, as_f64};

const AREAS: &[(&str, &str)] = &[
    ("生产线A", "lineA"),
    ("生产线B", "lineB"),
    ("仓库", "warehouse"),
    ("质检区", "qcArea"),
    ("办公区", "office"),
];

const SCORES: &[(&str, &str)] =
    &[("优秀(5分)", "5"), ("良好(4分)", "4"), ("一般(3分)", "3"), ("较差(2分)", "2"), ("差(1分)", "1")];

/// Score column keys paired with the dimension name shown in charts.
const DIMENSIONS: [(&str, &str); 5] = [
    ("sortScore", "整理"),
    ("setScore", "整顿"),
    ("sweepScore", "清扫"),
    ("sanitizeScore", "清洁"),
    ("sustainScore", "素养"),
];

const FULL_MARKS: f64 = 25.0;

pub(crate) fn columns() -> Vec<Column> {
    vec![
        Column::select("area", "区域", options(AREAS)).required(),
        Column::date("checkDate", "检查日期").required(),
        Column::text("checker", "检查人").required(),
        Column::select("sortScore", "整理评分", options(SCORES)).required(),
        Column::select("setScore", "整顿评分", options(SCORES)).required(),
        Column::select("sweepScore", "清扫评分", options(SCORES)).required(),
        Column::select("sanitizeScore", "清洁评分", options(SCORES)).required(),
        Column::select("sustainScore", "素养评分", options(SCORES)).required(),
        Column::text("issues", "问题点"),
        Column::text("improvement", "改进措施"),
        Column::checkbox("completed", "已完成"),
    ]
}

pub(crate) fn seed() -> Vec<Record> {
    vec![
        Record::new()
            .with("area", FieldValue::choice("生产线A", "lineA"))
            .with("checkDate", "2025-09-20")
            .with("checker", "张三")
            .with("sortScore", FieldValue::choice("优秀(5分)", "5"))
            .with("setScore", FieldValue::choice("良好(4分)", "4"))
            .with("sweepScore", FieldValue::choice("优秀(5分)", "5"))
            .with("sanitizeScore", FieldValue::choice("良好(4分)", "4"))
            .with("sustainScore", FieldValue::choice("一般(3分)", "3"))
            .with("issues", "部分工具摆放不规范")
            .with("improvement", "重新规划工具摆放位置")
            .with("completed", true),
        Record::new()
            .with("area", FieldValue::choice("生产线B", "lineB"))
            .with("checkDate", "2025-09-21")
            .with("checker", "李四")
            .with("sortScore", FieldValue::choice("良好(4分)", "4"))
            .with("setScore", FieldValue::choice("一般(3分)", "3"))
            .with("sweepScore", FieldValue::choice("良好(4分)", "4"))
            .with("sanitizeScore", FieldValue::choice("一般(3分)", "3"))
            .with("sustainScore", FieldValue::choice("良好(4分)", "4"))
            .with("issues", "地面有少量油污")
            .with("improvement", "加强设备维护和地面清洁")
            .with("completed", false),
    ]
}

fn total_score(record: &Record) -> i64 {
    DIMENSIONS.iter().map(|(key, _)| choice_score(record, key)).sum()
}

fn is_completed(record: &Record) -> bool {
    record.get("completed").is_some_and(FieldValue::is_truthy)
}

pub(crate) fn summarize(records: &[Record]) -> Summary {
    let completed = records.iter().filter(|r| is_completed(r)).count();

    // Average summed score per area, as a percentage of full marks.
    let area_scores = group_by::<i64>(
        records,
        |r| label_or(r, "area", "未知区域").to_owned(),
        |total, r| *total += total_score(r),
    )
    .into_iter()
    .map(|g| {
        let avg = int_f64(g.acc) / as_f64(g.count);
        (g.label, round_half_up(avg / FULL_MARKS * 100.0))
    })
    .collect();

    let rows = as_f64(records.len().max(1));
    let dimension_scores = DIMENSIONS
        .iter()
        .map(|(key, name)| {
            let sum: i64 = records.iter().map(|r| choice_score(r, key)).sum();
            ((*name).to_owned(), round_half_up(int_f64(sum) / rows))
        })
        .collect();

    Summary {
        metrics: vec![
            Metric::count("检查区域数", distinct_labels(records, "area")),
            Metric::count("待改进项", records.len() - completed),
            Metric::count("已完成改进", completed),
        ],
        charts: vec![
            Chart::values("各区域5S评分(%)", "5S评分", area_scores),
            Chart::values("5S各维度平均得分", "平均得分", dimension_scores),
        ],
    }
}

#[cfg(test)]
#[path = "five_s_test.rs"]
mod tests;
