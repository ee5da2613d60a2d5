use crate::error::ReportError;
use crate::figures::figures;
use crate::table::{Column, ENTROPY_COLUMNS, ISING_COLUMNS};
use chrono::Utc;
use cvm_core::{Sweep, SweepConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSet {
    pub table: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FigureGrouping {
    pub figure: u8,
    pub series: Vec<String>,
}

/// Serializable record of one run: what was configured, which columns and
/// figures were produced, and the data behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub date: String,
    pub domain: String,
    pub config: SweepConfig,
    pub column_sets: Vec<ColumnSet>,
    pub figures: Vec<FigureGrouping>,
    pub data: serde_json::Value,
    pub identifiers: BTreeSet<String>,
}

impl RunManifest {
    /// A run stays comparable with a published one only if every column set
    /// and figure grouping of the earlier manifest is still produced.
    pub fn ensure_compatible_with(&self, previous: &RunManifest) -> Result<(), ReportError> {
        let missing: Vec<String> = previous
            .identifiers
            .difference(&self.identifiers)
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ReportError::Incompatible(missing))
        }
    }

    pub fn add_identifier(&mut self, id: impl Into<String>) {
        self.identifiers.insert(id.into());
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn column_set(table: &str, columns: &[Column]) -> ColumnSet {
    ColumnSet {
        table: table.into(),
        columns: columns.iter().map(|c| c.field.name().to_string()).collect(),
    }
}

pub fn generate_run_manifest(sweep: &Sweep) -> Result<RunManifest, ReportError> {
    let column_sets = vec![
        column_set("entropy", &ENTROPY_COLUMNS),
        column_set("ising", &ISING_COLUMNS),
    ];
    let figure_groupings: Vec<FigureGrouping> = figures()
        .iter()
        .map(|f| FigureGrouping {
            figure: f.id,
            series: f.fields().iter().map(|field| field.name().to_string()).collect(),
        })
        .collect();

    let identifiers: Vec<String> = column_sets
        .iter()
        .map(|set| format!("table:{}:{}", set.table, set.columns.join(",")))
        .chain(figure_groupings.iter().map(|grouping| {
            format!("figure:{}:{}", grouping.figure, grouping.series.join(","))
        }))
        .collect();

    let mut manifest = RunManifest {
        date: Utc::now().format("%Y-%m-%d").to_string(),
        domain: "cvm-2d-equilibrium".into(),
        config: *sweep.config(),
        column_sets,
        figures: figure_groupings,
        data: serde_json::to_value(sweep)?,
        identifiers: BTreeSet::new(),
    };
    for id in identifiers {
        manifest.add_identifier(id);
    }
    Ok(manifest)
}
