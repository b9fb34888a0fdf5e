//! Employee skill matrix, five skills scored 1-5.
//!
//! Seed rows also carry `yearsOfService`, `processSkill` and `qualitySkill`.
//! They are not columns: they are kept in storage untouched and never shown
//! or exported.

use records::{Column, FieldValue, Record};

use crate::shared::{DEPARTMENTS, choice_score, distinct_labels, group_by, int_f64, label_or, options, round_half_up};
use crate::summary::{Chart, Metric, Summary, as_f64};

const LEVELS: &[(&str, &str)] =
    &[("精通(5分)", "5"), ("熟练(4分)", "4"), ("一般(3分)", "3"), ("基础(2分)", "2"), ("无(1分)", "1")];

const SKILLS: [(&str, &str); 5] = [
    ("fanAssemblySkill", "风扇组装技能"),
    ("qualityInspectionSkill", "质量检测技能"),
    ("equipmentMaintenanceSkill", "设备维护技能"),
    ("problemSolvingSkill", "问题解决技能"),
    ("teamworkSkill", "团队合作技能"),
];

pub(crate) fn columns() -> Vec<Column> {
    let mut columns = vec![
        Column::text("employeeId", "员工编号").required(),
        Column::text("employeeName", "员工姓名").required(),
        Column::select("department", "所属部门", options(DEPARTMENTS)).required(),
        Column::text("position", "职位").required(),
    ];
    columns.extend(SKILLS.iter().map(|(key, title)| Column::select(key, title, options(LEVELS)).required()));
    columns.push(Column::text("trainingNeeds", "培训需求"));
    columns.push(Column::date("lastEvaluationDate", "上次评估日期"));
    columns
}

fn level(score: u8) -> FieldValue {
    let (label, value) = LEVELS[usize::from(5 - score.clamp(1, 5))];
    FieldValue::choice(label, value)
}

struct Employee {
    id: &'static str,
    name: &'static str,
    department: (&'static str, &'static str),
    position: &'static str,
    years: &'static str,
    /// process, quality, then the five columns in [`SKILLS`] order.
    scores: [u8; 7],
    training: &'static str,
    evaluated: &'static str,
}

const EMPLOYEES: [Employee; 3] = [
    Employee {
        id: "EMP-001",
        name: "张三",
        department: ("生产部", "production"),
        position: "生产线组长",
        years: "5年",
        scores: [5, 4, 5, 4, 3, 4, 5],
        training: "管理技能提升",
        evaluated: "2025-09-10",
    },
    Employee {
        id: "EMP-002",
        name: "李四",
        department: ("品保部", "quality"),
        position: "质检员",
        years: "3年",
        scores: [4, 5, 3, 5, 2, 3, 4],
        training: "设备知识学习",
        evaluated: "2025-09-15",
    },
    Employee {
        id: "EMP-003",
        name: "王五",
        department: ("生技部", "equipment"),
        position: "技术员",
        years: "2年",
        scores: [3, 4, 4, 4, 5, 4, 3],
        training: "团队协作训练",
        evaluated: "2025-09-05",
    },
];

pub(crate) fn seed() -> Vec<Record> {
    EMPLOYEES
        .iter()
        .map(|e| {
            let mut record = Record::new()
                .with("employeeId", e.id)
                .with("employeeName", e.name)
                .with("department", FieldValue::choice(e.department.0, e.department.1))
                .with("position", e.position)
                .with("yearsOfService", e.years)
                .with("processSkill", level(e.scores[0]))
                .with("qualitySkill", level(e.scores[1]));
            for ((key, _), score) in SKILLS.iter().zip(&e.scores[2..]) {
                record.insert(*key, level(*score));
            }
            record.with("trainingNeeds", e.training).with("lastEvaluationDate", e.evaluated)
        })
        .collect()
}

fn total_score(record: &Record) -> i64 {
    SKILLS.iter().map(|(key, _)| choice_score(record, key)).sum()
}

pub(crate) fn summarize(records: &[Record]) -> Summary {
    let training = records.iter().filter(|r| r.text("trainingNeeds").is_some_and(|t| !t.is_empty())).count();

    // Average per-skill score of each department.
    let department_scores = group_by::<i64>(
        records,
        |r| label_or(r, "department", "未知部门").to_owned(),
        |total, r| *total += total_score(r),
    )
    .into_iter()
    .map(|g| (g.label, round_half_up(int_f64(g.acc) / as_f64(g.count) / 5.0)))
    .collect();

    let employees = as_f64(records.len().max(1));
    let skill_scores = SKILLS
        .iter()
        .map(|(key, name)| {
            let sum: i64 = records.iter().map(|r| choice_score(r, key)).sum();
            ((*name).to_owned(), round_half_up(int_f64(sum) / employees))
        })
        .collect();

    Summary {
        metrics: vec![
            Metric::count("员工总数", records.len()),
            Metric::count("部门数量", distinct_labels(records, "department")),
            Metric::count("培训需求数", training),
        ],
        charts: vec![
            Chart::values("部门平均技能得分", "平均得分", department_scores),
            Chart::values("技能维度雷达图", "平均得分", skill_scores),
        ],
    }
}

#[cfg(test)]
#[path = "skill_matrix_test.rs"]
mod tests;
