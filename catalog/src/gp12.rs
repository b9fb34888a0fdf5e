//! GP12 early production containment: per-batch inspection results.
//!
//! Quantities are free text. Summaries read them leniently: the leading
//! integer is used, and anything else counts as 0.

use records::{Column, FieldValue, Record};

use crate::shared::{group_by, int_f64, options, tally, text_int};
use crate::summary::{Chart, Metric, Point, Summary, as_f64};

const DISPOSITIONS: &[(&str, &str)] =
    &[("合格放行", "pass"), ("返工", "rework"), ("报废", "scrap"), ("隔离", "quarantine")];

const UNKNOWN_DATE: &str = "未知日期";

pub(crate) fn columns() -> Vec<Column> {
    vec![
        Column::text("partNumber", "零件编号").required(),
        Column::text("partName", "零件名称").required(),
        Column::date("productionDate", "生产日期").required(),
        Column::text("batchNumber", "批次号").required(),
        Column::text("quantity", "生产数量").required(),
        Column::text("samplingSize", "抽样数量").required(),
        Column::text("inspector", "检验员").required(),
        Column::text("inspectionItems", "检验项目").required(),
        Column::text("defectDescription", "缺陷描述"),
        Column::text("defectQuantity", "缺陷数量"),
        Column::select("disposition", "处理方式", options(DISPOSITIONS)).required(),
        Column::text("comments", "备注"),
    ]
}

pub(crate) fn seed() -> Vec<Record> {
    vec![
        Record::new()
            .with("partNumber", "FAN-001")
            .with("partName", "散热风扇总成")
            .with("productionDate", "2025-09-26")
            .with("batchNumber", "B20250926001")
            .with("quantity", "1000")
            .with("samplingSize", "50")
            .with("inspector", "张三")
            .with("inspectionItems", "外观、尺寸、性能测试、噪音测试")
            .with("defectDescription", "2台噪音超标")
            .with("defectQuantity", "2")
            .with("disposition", FieldValue::choice("返工", "rework"))
            .with("comments", "需重新调整风扇平衡"),
        Record::new()
            .with("partNumber", "FAN-002")
            .with("partName", "风扇叶片")
            .with("productionDate", "2025-09-25")
            .with("batchNumber", "B20250925002")
            .with("quantity", "2000")
            .with("samplingSize", "40")
            .with("inspector", "李四")
            .with("inspectionItems", "外观、尺寸、材质硬度")
            .with("defectDescription", "无缺陷")
            .with("defectQuantity", "0")
            .with("disposition", FieldValue::choice("合格放行", "pass"))
            .with("comments", "质量稳定"),
        Record::new()
            .with("partNumber", "FAN-003")
            .with("partName", "风扇电机")
            .with("productionDate", "2025-09-24")
            .with("batchNumber", "B20250924003")
            .with("quantity", "1500")
            .with("samplingSize", "30")
            .with("inspector", "王五")
            .with("inspectionItems", "电气性能、绝缘测试、寿命测试")
            .with("defectDescription", "1台绝缘测试不通过")
            .with("defectQuantity", "1")
            .with("disposition", FieldValue::choice("报废", "scrap"))
            .with("comments", "需检查原材料质量"),
    ]
}

fn quantity(record: &Record) -> i64 {
    text_int(record, "quantity")
}

fn defects(record: &Record) -> i64 {
    text_int(record, "defectQuantity")
}

/// Defect rate of one batch in percent. A blank or unparsable quantity
/// divides by 1; a zero quantity has no meaningful rate and counts as 0.
fn batch_defect_rate(record: &Record) -> f64 {
    let divisor = match record.text("quantity").map(str::trim) {
        None | Some("") => 1,
        Some(_) => quantity(record),
    };
    if divisor == 0 { 0.0 } else { int_f64(defects(record)) / int_f64(divisor) * 100.0 }
}

#[derive(Default)]
struct Daily {
    production: i64,
    defects: i64,
}

pub(crate) fn summarize(records: &[Record]) -> Summary {
    // Quantities are free text, so totals saturate instead of overflowing.
    let production = records.iter().map(quantity).fold(0, i64::saturating_add);
    let defect_total = records.iter().map(defects).fold(0, i64::saturating_add);
    let average_rate = if records.is_empty() {
        0.0
    } else {
        records.iter().map(batch_defect_rate).sum::<f64>() / as_f64(records.len())
    };

    let mut daily = group_by::<Daily>(
        records,
        |r| r.text("productionDate").filter(|d| !d.is_empty()).unwrap_or(UNKNOWN_DATE).to_owned(),
        |day, r| {
            day.production = day.production.saturating_add(quantity(r));
            day.defects = day.defects.saturating_add(defects(r));
        },
    );
    // ISO dates sort lexically; batches without a date go last.
    daily.sort_by(|a, b| (a.label == UNKNOWN_DATE, &a.label).cmp(&(b.label == UNKNOWN_DATE, &b.label)));
    let trend = Chart {
        title: "日产量与缺陷趋势",
        series: vec!["产量", "缺陷数", "缺陷率(%)"],
        points: daily
            .into_iter()
            .map(|g| {
                let rate = if g.acc.production > 0 {
                    int_f64(g.acc.defects) / int_f64(g.acc.production) * 100.0
                } else {
                    0.0
                };
                Point { label: g.label, values: vec![int_f64(g.acc.production), int_f64(g.acc.defects), rate] }
            })
            .collect(),
    };

    Summary {
        metrics: vec![
            Metric::count("总批次", records.len()),
            Metric::total("生产总量", production),
            Metric::total("缺陷总数", defect_total),
            Metric::fixed("平均缺陷率(%)", average_rate, 2),
        ],
        charts: vec![trend, Chart::counts("批次处理方式分布", "批次数量", tally(records, "disposition", "未知处理"))],
    }
}

#[cfg(test)]
#[path = "gp12_test.rs"]
mod tests;
