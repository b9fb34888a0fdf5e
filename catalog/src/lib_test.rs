use std::sync::Arc;

use records::{MemoryStore, Table};

use super::*;

#[test]
fn every_module_definition_is_valid() {
    for module in ModuleKind::ALL {
        let config = module.definition().unwrap_or_else(|e| panic!("{module}: {e}"));
        assert_eq!(config.module_name, module.name());
        assert!(!config.schema.is_empty());
        assert!(!config.seed.is_empty());
    }
}

#[test]
fn seed_values_fit_their_columns() {
    for module in ModuleKind::ALL {
        let schema = module.schema().unwrap();
        for record in module.seed() {
            for column in schema.columns() {
                let value = record.get(&column.key).cloned().unwrap_or_default();
                let coerced = column.coerce(value.clone()).unwrap_or_else(|e| panic!("{module}: {e}"));
                assert_eq!(coerced, value, "{module}.{}", column.key);
            }
        }
    }
}

#[test]
fn slugs_and_names_are_unique() {
    let mut slugs: Vec<_> = ModuleKind::ALL.iter().map(|m| m.slug()).collect();
    let mut names: Vec<_> = ModuleKind::ALL.iter().map(|m| m.name()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    names.sort_unstable();
    names.dedup();
    assert_eq!(slugs.len(), 6);
    assert_eq!(names.len(), 6);
}

#[test]
fn parses_slug_or_name() {
    assert_eq!("gp12".parse::<ModuleKind>().unwrap(), ModuleKind::EarlyProduction);
    assert_eq!("Five-S".parse::<ModuleKind>().unwrap(), ModuleKind::FiveS);
    assert_eq!("4M1E变动管理".parse::<ModuleKind>().unwrap(), ModuleKind::ChangeManagement);
    assert_eq!(" escalation ".parse::<ModuleKind>().unwrap(), ModuleKind::Escalation);
    let err = "nope".parse::<ModuleKind>().unwrap_err();
    assert_eq!(err, CatalogError::UnknownModule("nope".into()));
    assert_eq!(err.error_code(), "E_MODULE_NOT_FOUND");
}

#[test]
fn display_is_module_name() {
    assert_eq!(ModuleKind::SkillMatrix.to_string(), "人员技能矩阵");
    assert_eq!(ModuleKind::QuickResponse.description(), "实时问题跟踪与解决");
}

#[test]
fn seeds_round_trip_through_table_storage() {
    let store = Arc::new(MemoryStore::new());
    for module in ModuleKind::ALL {
        let first = Table::open(module.definition().unwrap(), store.clone(), None);
        drop(first);
        let reopened = Table::open(module.definition().unwrap(), store.clone(), None);
        assert_eq!(reopened.load_outcome(), &records::LoadOutcome::Restored, "{module}");
        assert_eq!(reopened.records(), module.seed(), "{module}");
    }
}

#[test]
fn summaries_of_empty_tables_are_zeroed() {
    for module in ModuleKind::ALL {
        let summary = module.summarize(&[]);
        assert!(!summary.metrics.is_empty());
        for metric in &summary.metrics {
            assert_eq!(metric.value.to_string().trim_end_matches(['0', '.']), "", "{module}: {}", metric.label);
        }
    }
}

#[test]
fn summary_serializes_for_hosts() {
    let summary = ModuleKind::Escalation.summarize(&ModuleKind::Escalation.seed());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["metrics"][0], serde_json::json!({"label": "总升级数", "value": 3}));
    assert_eq!(json["metrics"][3]["value"]["decimals"], 1);
}
