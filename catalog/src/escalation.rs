//! Escalation handling for issues that outgrew quick response.

use records::{Column, FieldValue, Record};

use crate::shared::{WORK_STATUS, count_labels, options, tally};
use crate::summary::{Chart, Metric, Summary, as_f64};

const PRIORITIES: &[(&str, &str)] = &[("紧急", "urgent"), ("高", "high"), ("中", "medium"), ("低", "low")];

pub(crate) fn columns() -> Vec<Column> {
    vec![
        Column::text("escalationId", "升级编号").required(),
        Column::text("relatedIssueId", "关联问题编号"),
        Column::date("escalationDate", "升级日期").required(),
        Column::text("escalator", "升级人").required(),
        Column::text("issueSummary", "问题摘要").required(),
        Column::select("currentStatus", "当前状态", options(WORK_STATUS)).required(),
        Column::select("priority", "优先级", options(PRIORITIES)).required(),
        Column::text("targetResolver", "负责解决人").required(),
        Column::date("expectedResolutionDate", "期望解决日期").required(),
        Column::date("actualResolutionDate", "实际解决日期"),
        Column::text("resolutionSummary", "解决摘要"),
        Column::text("preventiveActions", "预防措施"),
    ]
}

pub(crate) fn seed() -> Vec<Record> {
    vec![
        Record::new()
            .with("escalationId", "ESC-20250927-001")
            .with("relatedIssueId", "QR-20250927-002")
            .with("escalationDate", "2025-09-27")
            .with("escalator", "钱七")
            .with("issueSummary", "风扇噪音超标问题未能及时解决，已影响3批次产品质量")
            .with("currentStatus", FieldValue::choice("处理中", "processing"))
            .with("priority", FieldValue::choice("紧急", "urgent"))
            .with("targetResolver", "赵六")
            .with("expectedResolutionDate", "2025-09-28")
            .with("actualResolutionDate", "")
            .with("resolutionSummary", "")
            .with("preventiveActions", ""),
        Record::new()
            .with("escalationId", "ESC-20250926-001")
            .with("relatedIssueId", "4M1E-20250927-002")
            .with("escalationDate", "2025-09-26")
            .with("escalator", "孙八")
            .with("issueSummary", "装配工序优化方案审批延迟，影响生产效率提升计划")
            .with("currentStatus", FieldValue::choice("已解决", "solved"))
            .with("priority", FieldValue::choice("高", "high"))
            .with("targetResolver", "周九")
            .with("expectedResolutionDate", "2025-09-27")
            .with("actualResolutionDate", "2025-09-27")
            .with("resolutionSummary", "方案已批准，计划于明日实施")
            .with("preventiveActions", "优化审批流程，设定明确的审批时限"),
        Record::new()
            .with("escalationId", "ESC-20250925-001")
            .with("relatedIssueId", "")
            .with("escalationDate", "2025-09-25")
            .with("escalator", "吴十")
            .with("issueSummary", "新员工培训不到位，导致操作失误增加")
            .with("currentStatus", FieldValue::choice("处理中", "processing"))
            .with("priority", FieldValue::choice("中", "medium"))
            .with("targetResolver", "郑十一")
            .with("expectedResolutionDate", "2025-10-05")
            .with("actualResolutionDate", "")
            .with("resolutionSummary", "正在制定详细的培训计划")
            .with("preventiveActions", ""),
    ]
}

pub(crate) fn summarize(records: &[Record]) -> Summary {
    let resolved = count_labels(records, "currentStatus", &["已解决", "已关闭"]);
    let resolution_rate =
        if records.is_empty() { 0.0 } else { as_f64(resolved) / as_f64(records.len()) * 100.0 };

    Summary {
        metrics: vec![
            Metric::count("总升级数", records.len()),
            Metric::count("紧急/高优先级", count_labels(records, "priority", &["紧急", "高"])),
            Metric::count("待处理", count_labels(records, "currentStatus", &["待处理", "处理中"])),
            Metric::fixed("解决率(%)", resolution_rate, 1),
        ],
        charts: vec![
            Chart::counts("优先级分布", "升级数量", tally(records, "priority", "未知优先级")),
            Chart::counts("状态分布", "升级数量", tally(records, "currentStatus", "未知状态")),
        ],
    }
}

#[cfg(test)]
#[path = "escalation_test.rs"]
mod tests;
