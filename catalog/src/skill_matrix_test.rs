use super::*;

#[test]
fn seed_keeps_extra_fields() {
    let first = &seed()[0];
    assert_eq!(first.text("yearsOfService"), Some("5年"));
    assert_eq!(first.choice_label("processSkill"), Some("精通(5分)"));
    assert_eq!(first.choice_label("qualitySkill"), Some("熟练(4分)"));
    assert_eq!(first.choice_value("equipmentMaintenanceSkill"), Some("3"));
}

#[test]
fn seed_summary() {
    let summary = summarize(&seed());
    assert_eq!(summary.metric("员工总数").unwrap().to_string(), "3");
    assert_eq!(summary.metric("部门数量").unwrap().to_string(), "3");
    assert_eq!(summary.metric("培训需求数").unwrap().to_string(), "3");

    let departments = summary.chart("部门平均技能得分").unwrap();
    assert_eq!(departments.value_of("生产部"), Some(4.0));
    assert_eq!(departments.value_of("品保部"), Some(3.0));
    assert_eq!(departments.value_of("生技部"), Some(4.0));

    let skills = summary.chart("技能维度雷达图").unwrap();
    let values: Vec<f64> = skills.points.iter().map(|p| p.values[0]).collect();
    assert_eq!(values, vec![4.0, 4.0, 3.0, 4.0, 4.0]);
}

#[test]
fn empty_training_need_is_not_counted() {
    let mut records = seed();
    records[1].insert("trainingNeeds", FieldValue::empty());
    let summary = summarize(&records);
    assert_eq!(summary.metric("培训需求数").unwrap().to_string(), "2");
}
