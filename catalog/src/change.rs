//! 4M1E change control: man, machine, material, method, environment.

use records::{Column, FieldValue, Record};

use crate::shared::{DEPARTMENTS, count_labels, options, tally};
use crate::summary::{Chart, Metric, Summary};

const CHANGE_TYPES: &[(&str, &str)] = &[
    ("人员变动(Man)", "man"),
    ("机器变动(Machine)", "machine"),
    ("材料变动(Material)", "material"),
    ("方法变动(Method)", "method"),
    ("环境变动(Environment)", "environment"),
];

const APPROVAL: &[(&str, &str)] = &[("待审批", "pending"), ("已批准", "approved"), ("已拒绝", "rejected")];

const EFFECTIVENESS: &[(&str, &str)] =
    &[("优秀", "excellent"), ("良好", "good"), ("一般", "normal"), ("较差", "poor")];

pub(crate) fn columns() -> Vec<Column> {
    vec![
        Column::text("changeId", "变动编号").required(),
        Column::select("changeType", "变动类型", options(CHANGE_TYPES)).required(),
        Column::date("changeDate", "变动日期").required(),
        Column::text("applicant", "申请人").required(),
        Column::select("department", "申请部门", options(DEPARTMENTS)).required(),
        Column::text("changeDescription", "变动描述").required(),
        Column::text("reason", "变动原因").required(),
        Column::text("impactAnalysis", "影响分析"),
        Column::select("approvalStatus", "审批状态", options(APPROVAL)).required(),
        Column::text("approver", "审批人"),
        Column::date("implementationDate", "实施日期"),
        Column::select("effectiveness", "效果评估", options(EFFECTIVENESS)),
    ]
}

pub(crate) fn seed() -> Vec<Record> {
    vec![
        Record::new()
            .with("changeId", "4M1E-20250927-001")
            .with("changeType", FieldValue::choice("机器变动(Machine)", "machine"))
            .with("changeDate", "2025-09-25")
            .with("applicant", "赵六")
            .with("department", FieldValue::choice("生技部", "equipment"))
            .with("changeDescription", "更换生产线A的风扇电机测试设备")
            .with("reason", "原设备老化，测试精度下降")
            .with("impactAnalysis", "可能影响前2小时的生产效率，需要重新校准参数")
            .with("approvalStatus", FieldValue::choice("已批准", "approved"))
            .with("approver", "钱七")
            .with("implementationDate", "2025-09-26")
            .with("effectiveness", FieldValue::choice("良好", "good")),
        Record::new()
            .with("changeId", "4M1E-20250927-002")
            .with("changeType", FieldValue::choice("方法变动(Method)", "method"))
            .with("changeDate", "2025-09-26")
            .with("applicant", "孙八")
            .with("department", FieldValue::choice("生产部", "production"))
            .with("changeDescription", "优化风扇叶片装配工序")
            .with("reason", "减少装配时间，提高生产效率")
            .with("impactAnalysis", "需对相关员工进行培训，预计1周内达到预期效率")
            .with("approvalStatus", FieldValue::choice("待审批", "pending"))
            .with("approver", "")
            .with("implementationDate", "")
            .with("effectiveness", FieldValue::Null),
        Record::new()
            .with("changeId", "4M1E-20250927-003")
            .with("changeType", FieldValue::choice("材料变动(Material)", "material"))
            .with("changeDate", "2025-09-24")
            .with("applicant", "周九")
            .with("department", FieldValue::choice("研发部", "rd"))
            .with("changeDescription", "更换风扇轴承供应商")
            .with("reason", "提高产品使用寿命和降低噪音")
            .with("impactAnalysis", "需重新验证产品性能，可能影响首批产品的交付时间")
            .with("approvalStatus", FieldValue::choice("已批准", "approved"))
            .with("approver", "吴十")
            .with("implementationDate", "2025-09-28")
            .with("effectiveness", FieldValue::Null),
    ]
}

pub(crate) fn summarize(records: &[Record]) -> Summary {
    Summary {
        metrics: vec![
            Metric::count("总变动数", records.len()),
            Metric::count("待审批", count_labels(records, "approvalStatus", &["待审批"])),
            Metric::count("已批准", count_labels(records, "approvalStatus", &["已批准"])),
        ],
        charts: vec![
            Chart::counts("4M1E变动类型分布", "变动数量", tally(records, "changeType", "未知类型")),
            Chart::counts("审批状态分布", "变动数量", tally(records, "approvalStatus", "未知状态")),
        ],
    }
}

#[cfg(test)]
#[path = "change_test.rs"]
mod tests;
