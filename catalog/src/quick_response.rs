//! Quick response tracking of production issues.

use records::{Column, FieldValue, Record};

use crate::shared::{DEPARTMENTS, WORK_STATUS, count_labels, options, tally};
use crate::summary::{Chart, Metric, Summary};

const ISSUE_TYPES: &[(&str, &str)] = &[
    ("质量问题", "quality"),
    ("设备故障", "equipment"),
    ("物料短缺", "material"),
    ("人员问题", "personnel"),
    ("工艺问题", "process"),
    ("其他问题", "other"),
];

const SEVERITIES: &[(&str, &str)] = &[("紧急", "urgent"), ("严重", "serious"), ("一般", "normal"), ("轻微", "minor")];

pub(crate) fn columns() -> Vec<Column> {
    vec![
        Column::text("issueId", "问题编号").required(),
        Column::date("reportTime", "报告时间").required(),
        Column::text("reporter", "报告人").required(),
        Column::select("department", "所属部门", options(DEPARTMENTS)).required(),
        Column::select("issueType", "问题类型", options(ISSUE_TYPES)).required(),
        Column::text("description", "问题描述").required(),
        Column::select("severity", "严重程度", options(SEVERITIES)).required(),
        Column::text("responsible", "责任人").required(),
        Column::text("solution", "解决方案"),
        Column::date("solveTime", "解决时间"),
        Column::select("status", "状态", options(WORK_STATUS)).required(),
        Column::text("comment", "备注"),
    ]
}

pub(crate) fn seed() -> Vec<Record> {
    vec![
        Record::new()
            .with("issueId", "QR-20250927-001")
            .with("reportTime", "2025-09-27")
            .with("reporter", "王五")
            .with("department", FieldValue::choice("生产部", "production"))
            .with("issueType", FieldValue::choice("设备故障", "equipment"))
            .with("description", "生产线A的风扇装配机出现异响")
            .with("severity", FieldValue::choice("严重", "serious"))
            .with("responsible", "赵六")
            .with("solution", "更换轴承，调整装配参数")
            .with("solveTime", "2025-09-27")
            .with("status", FieldValue::choice("已解决", "solved"))
            .with("comment", "需加强设备日常维护"),
        Record::new()
            .with("issueId", "QR-20250927-002")
            .with("reportTime", "2025-09-27")
            .with("reporter", "钱七")
            .with("department", FieldValue::choice("品保部", "quality"))
            .with("issueType", FieldValue::choice("质量问题", "quality"))
            .with("description", "抽检发现5台成品风扇噪音超标")
            .with("severity", FieldValue::choice("紧急", "urgent"))
            .with("responsible", "孙八")
            .with("solution", "重新校准测试设备，排查生产工艺")
            .with("solveTime", "")
            .with("status", FieldValue::choice("处理中", "processing"))
            .with("comment", "暂停该批次出货"),
    ]
}

pub(crate) fn summarize(records: &[Record]) -> Summary {
    Summary {
        metrics: vec![
            Metric::count("总问题数", records.len()),
            Metric::count("待处理", count_labels(records, "status", &["待处理"])),
            Metric::count("处理中", count_labels(records, "status", &["处理中"])),
            Metric::count("已解决", count_labels(records, "status", &["已解决", "已关闭"])),
        ],
        charts: vec![
            Chart::counts("问题类型分布", "问题数量", tally(records, "issueType", "未知类型")),
            Chart::counts("问题状态分布", "问题数量", tally(records, "status", "未知状态")),
        ],
    }
}

#[cfg(test)]
#[path = "quick_response_test.rs"]
mod tests;
