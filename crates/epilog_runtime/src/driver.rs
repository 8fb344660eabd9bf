//! The instrumentation driver.
//!
//! One [`Driver`] run owns its tree exclusively: load every source under
//! the input root, run the pass once over the whole batch, then write each
//! unit to the output root mirroring its relative path. Files that fail to
//! parse are skipped with a warning and never abort the batch.

use std::fs;
use std::path::PathBuf;

use epilog_model::{CompilationUnit, Error, Result};
use epilog_pass::{RunStats, run_pass};
use epilog_syntax::{parse_unit, write_unit};
use tracing::{info, warn};

/// Configuration and entry point for one instrumentation run.
#[derive(Clone, Debug)]
pub struct Driver {
    /// Root directory holding the sources to instrument.
    pub input: PathBuf,
    /// Root directory receiving instrumented sources.
    pub output: PathBuf,
    /// When set, skip writing output; the pass and report still run.
    pub dry_run: bool,
}

/// Summary of one driver run.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// Pass counters.
    pub stats: RunStats,
    /// Files parsed into the batch.
    pub parsed: usize,
    /// Files skipped because they failed to parse.
    pub skipped_files: usize,
    /// Units written to the output root.
    pub written: usize,
}

impl Driver {
    /// Creates a driver for the given roots.
    #[must_use]
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            dry_run: false,
        }
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    /// Returns an error on I/O failure while discovering, reading, or
    /// writing sources. Parse failures are per-file skips, never errors.
    pub fn run(&self) -> Result<RunReport> {
        let files = crate::discover::discover_sources(&self.input)?;
        info!(count = files.len(), input = %self.input.display(), "discovered sources");

        let mut report = RunReport::default();
        let mut units = Vec::new();
        for path in files {
            let source = fs::read_to_string(&path).map_err(|e| Error::io(path.clone(), e))?;
            match parse_unit(&source, &path) {
                Ok(unit) => {
                    report.parsed += 1;
                    units.push(unit);
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unparseable file");
                    report.skipped_files += 1;
                }
            }
        }

        report.stats = run_pass(&mut units);

        if !self.dry_run {
            for unit in &units {
                self.write(unit)?;
                report.written += 1;
            }
        }

        Ok(report)
    }

    /// Writes one unit under the output root, mirroring its path relative
    /// to the input root.
    fn write(&self, unit: &CompilationUnit) -> Result<()> {
        let relative = unit.path.strip_prefix(&self.input).unwrap_or(&unit.path);
        let target = self.output.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent.to_path_buf(), e))?;
        }
        fs::write(&target, write_unit(unit)).map_err(|e| Error::io(target.clone(), e))
    }
}

/// Convenience wrapper: parses and instruments a batch of already-loaded
/// sources without touching the filesystem.
///
/// Returns the instrumented units and the pass stats; unparseable sources
/// are dropped, mirroring the driver's skip behavior.
#[must_use]
pub fn instrument_sources(sources: &[(PathBuf, String)]) -> (Vec<CompilationUnit>, RunStats) {
    let mut units: Vec<CompilationUnit> = sources
        .iter()
        .filter_map(|(path, text)| parse_unit(text, path).ok())
        .collect();
    let stats = run_pass(&mut units);
    (units, stats)
}
