use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::schema::{self, ListField, PathField, Scalar, Switch, Target, TextField};
use crate::error::Result;
use crate::types::OutlierMode;

/// Fully bound benchmark configuration; the only thing handed to the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkOptions {
    /// Named job preset, e.g. Dry/Short/Medium/Long.
    pub base_job: String,
    pub runtimes: Vec<String>,
    pub exporters: Vec<String>,
    pub use_memory_diagnoser: bool,
    pub use_disassembly_diagnoser: bool,
    /// Glob patterns selecting benchmarks.
    pub filters: Vec<String>,
    pub run_in_process: bool,
    /// Syntactically checked only; existence is the engine's concern.
    pub artifacts_directory: Option<PathBuf>,
    pub outliers: OutlierMode,
    /// Processor affinity mask; `None` leaves the process affinity alone.
    pub affinity: Option<i32>,
    pub display_all_statistics: bool,
    /// A benchmark must belong to all of these categories.
    pub all_categories: Vec<String>,
    /// A benchmark must belong to at least one of these categories.
    pub any_categories: Vec<String>,
    pub attribute_names: Vec<String>,
    pub join: bool,
    pub cli_path: Option<PathBuf>,
    pub core_run_path: Option<PathBuf>,
    pub keep_benchmark_files: bool,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            base_job: schema::DEFAULT_JOB.to_string(),
            runtimes: Vec::new(),
            exporters: Vec::new(),
            use_memory_diagnoser: false,
            use_disassembly_diagnoser: false,
            filters: Vec::new(),
            run_in_process: false,
            artifacts_directory: None,
            outliers: OutlierMode::OnlyUpper,
            affinity: None,
            display_all_statistics: false,
            all_categories: Vec::new(),
            any_categories: Vec::new(),
            attribute_names: Vec::new(),
            join: false,
            cli_path: None,
            core_run_path: None,
            keep_benchmark_files: false,
        }
    }
}

impl BenchmarkOptions {
    pub fn switch(&self, switch: Switch) -> bool {
        match switch {
            Switch::MemoryDiagnoser => self.use_memory_diagnoser,
            Switch::DisassemblyDiagnoser => self.use_disassembly_diagnoser,
            Switch::InProcess => self.run_in_process,
            Switch::AllStatistics => self.display_all_statistics,
            Switch::Join => self.join,
            Switch::KeepFiles => self.keep_benchmark_files,
        }
    }

    pub fn switch_mut(&mut self, switch: Switch) -> &mut bool {
        match switch {
            Switch::MemoryDiagnoser => &mut self.use_memory_diagnoser,
            Switch::DisassemblyDiagnoser => &mut self.use_disassembly_diagnoser,
            Switch::InProcess => &mut self.run_in_process,
            Switch::AllStatistics => &mut self.display_all_statistics,
            Switch::Join => &mut self.join,
            Switch::KeepFiles => &mut self.keep_benchmark_files,
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Runtimes => &self.runtimes,
            ListField::Exporters => &self.exporters,
            ListField::Filters => &self.filters,
            ListField::AllCategories => &self.all_categories,
            ListField::AnyCategories => &self.any_categories,
            ListField::AttributeNames => &self.attribute_names,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Runtimes => &mut self.runtimes,
            ListField::Exporters => &mut self.exporters,
            ListField::Filters => &mut self.filters,
            ListField::AllCategories => &mut self.all_categories,
            ListField::AnyCategories => &mut self.any_categories,
            ListField::AttributeNames => &mut self.attribute_names,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::BaseJob => &self.base_job,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::BaseJob => &mut self.base_job,
        }
    }

    pub fn path(&self, field: PathField) -> Option<&Path> {
        match field {
            PathField::ArtifactsDirectory => self.artifacts_directory.as_deref(),
            PathField::CliPath => self.cli_path.as_deref(),
            PathField::CoreRunPath => self.core_run_path.as_deref(),
        }
    }

    pub fn path_mut(&mut self, field: PathField) -> &mut Option<PathBuf> {
        match field {
            PathField::ArtifactsDirectory => &mut self.artifacts_directory,
            PathField::CliPath => &mut self.cli_path,
            PathField::CoreRunPath => &mut self.core_run_path,
        }
    }

    /// Values this configuration holds for `target`, or `None` when it holds the default.
    fn values_for(&self, target: Target, defaults: &Self) -> Option<Vec<String>> {
        match target {
            Target::Switch(switch) => self.switch(switch).then(Vec::new),
            Target::List(field) => {
                let values = self.list(field);
                (!values.is_empty()).then(|| values.to_vec())
            }
            Target::Scalar(Scalar::Text(field)) => {
                let value = self.text(field);
                (value != defaults.text(field)).then(|| vec![value.to_string()])
            }
            Target::Scalar(Scalar::Outliers) => (self.outliers != defaults.outliers)
                .then(|| vec![self.outliers.to_string()]),
            Target::Scalar(Scalar::Affinity) => self.affinity.map(|mask| vec![mask.to_string()]),
            Target::Scalar(Scalar::Path(field)) => self
                .path(field)
                .map(|path| vec![path.display().to_string()]),
        }
    }

    /// Renders the configuration back to argument tokens, in schema order,
    /// skipping every field that holds its default.
    pub fn to_args(&self, prefer_short: bool) -> Vec<String> {
        let defaults = Self::default();
        let mut args = Vec::new();
        for spec in &schema::OPTIONS {
            if let Some(values) = self.values_for(spec.target, &defaults) {
                args.push(spec.display_name(prefer_short));
                args.extend(values.into_iter().map(quote_whitespace));
            }
        }
        args
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn quote_whitespace(value: String) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value
    }
}
