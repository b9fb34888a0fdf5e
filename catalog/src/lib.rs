//! The six shop-floor dashboard modules.
//!
//! Each module contributes a column schema, seed rows, and a summary of its
//! records (metric cards plus chart series). Everything else about editing,
//! persisting, and exporting lives in `records`.
//!
//! ERROR HANDLING
//! ==============
//! Module definitions are static; [`ModuleKind::definition`] only fails if a
//! schema literal is itself invalid, which the tests rule out.

mod change;
mod escalation;
mod five_s;
mod gp12;
mod quick_response;
mod shared;
mod skill_matrix;
pub mod summary;

use std::fmt;
use std::str::FromStr;

use records::{ErrorCode, Record, Schema, SchemaError, TableConfig};

pub use summary::{Chart, Metric, MetricValue, Point, Summary};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown module: {0}")]
    UnknownModule(String),
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownModule(_) => "E_MODULE_NOT_FOUND",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    FiveS,
    QuickResponse,
    SkillMatrix,
    ChangeManagement,
    EarlyProduction,
    Escalation,
}

impl ModuleKind {
    pub const ALL: [Self; 6] = [
        Self::FiveS,
        Self::QuickResponse,
        Self::SkillMatrix,
        Self::ChangeManagement,
        Self::EarlyProduction,
        Self::Escalation,
    ];

    /// Short ASCII name used on the command line.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::FiveS => "five-s",
            Self::QuickResponse => "quick-response",
            Self::SkillMatrix => "skill-matrix",
            Self::ChangeManagement => "change",
            Self::EarlyProduction => "gp12",
            Self::Escalation => "escalation",
        }
    }

    /// Module name; also the suffix of the storage key and export file name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FiveS => "5S管理",
            Self::QuickResponse => "快速反应跟踪",
            Self::SkillMatrix => "人员技能矩阵",
            Self::ChangeManagement => "4M1E变动管理",
            Self::EarlyProduction => "GP12早期生产遏制",
            Self::Escalation => "升级处理",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::FiveS => "整理、整顿、清扫、清洁、素养",
            Self::QuickResponse => "实时问题跟踪与解决",
            Self::SkillMatrix => "员工技能水平与培训管理",
            Self::ChangeManagement => "人机料法环变动控制",
            Self::EarlyProduction => "新产品质量控制",
            Self::Escalation => "问题升级与处理流程",
        }
    }

    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the module's column list is invalid.
    pub fn schema(self) -> Result<Schema, SchemaError> {
        Schema::new(match self {
            Self::FiveS => five_s::columns(),
            Self::QuickResponse => quick_response::columns(),
            Self::SkillMatrix => skill_matrix::columns(),
            Self::ChangeManagement => change::columns(),
            Self::EarlyProduction => gp12::columns(),
            Self::Escalation => escalation::columns(),
        })
    }

    #[must_use]
    pub fn seed(self) -> Vec<Record> {
        match self {
            Self::FiveS => five_s::seed(),
            Self::QuickResponse => quick_response::seed(),
            Self::SkillMatrix => skill_matrix::seed(),
            Self::ChangeManagement => change::seed(),
            Self::EarlyProduction => gp12::seed(),
            Self::Escalation => escalation::seed(),
        }
    }

    /// Everything a table needs to host this module.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the module's column list is invalid.
    pub fn definition(self) -> Result<TableConfig, SchemaError> {
        Ok(TableConfig { module_name: self.name().to_owned(), schema: self.schema()?, seed: self.seed() })
    }

    #[must_use]
    pub fn summarize(self, records: &[Record]) -> Summary {
        match self {
            Self::FiveS => five_s::summarize(records),
            Self::QuickResponse => quick_response::summarize(records),
            Self::SkillMatrix => skill_matrix::summarize(records),
            Self::ChangeManagement => change::summarize(records),
            Self::EarlyProduction => gp12::summarize(records),
            Self::Escalation => escalation::summarize(records),
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleKind {
    type Err = CatalogError;

    /// Accepts either the slug or the module name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.slug().eq_ignore_ascii_case(s) || m.name() == s)
            .ok_or_else(|| CatalogError::UnknownModule(s.to_owned()))
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
