//! In-memory launch table and the borrowed views the chart handlers filter.
//!
//! The table is read once from CSV and never mutated afterwards. Every filter
//! returns a new [`TableView`] of references into the table.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::{LaunchDashError, Result};
use crate::filter::{PayloadBounds, PayloadRange};
use crate::record::{LaunchRecord, Outcome};

#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
}

impl LaunchTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = table.len(),
            sites = table.launch_sites().len(),
            min_payload = table.bounds.min,
            max_payload = table.bounds.max,
            "Loaded launch records"
        );
        Ok(table)
    }

    /// Parse CSV with a header row. Required columns are matched by name.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (idx, result) in rdr.deserialize::<LaunchRecord>().enumerate() {
            let record = result?;
            let row = idx + 1;
            if record.outcome().is_none() {
                return Err(LaunchDashError::InvalidOutcome {
                    row,
                    value: record.class,
                });
            }
            if !record.payload_mass_kg.is_finite() {
                return Err(LaunchDashError::InvalidPayload {
                    row,
                    value: record.payload_mass_kg,
                });
            }
            records.push(record);
        }

        Self::from_records(records)
    }

    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        let bounds = compute_bounds(&records).ok_or(LaunchDashError::EmptyDataset)?;
        Ok(Self { records, bounds })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min and max payload, fixed at load time.
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Distinct launch sites in first-occurrence order.
    pub fn launch_sites(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .filter(|site| seen.insert(*site))
            .collect()
    }

    /// View over every row.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            rows: self.records.iter().collect(),
        }
    }
}

fn compute_bounds(records: &[LaunchRecord]) -> Option<PayloadBounds> {
    let first = records.first()?.payload_mass_kg;
    let bounds = records.iter().fold(
        PayloadBounds {
            min: first,
            max: first,
        },
        |acc, r| PayloadBounds {
            min: acc.min.min(r.payload_mass_kg),
            max: acc.max.max(r.payload_mass_kg),
        },
    );
    Some(bounds)
}

/// Filtered subset of a [`LaunchTable`], in table order.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    rows: Vec<&'a LaunchRecord>,
}

impl<'a> TableView<'a> {
    /// Keep rows whose launch site equals `site` exactly.
    pub fn with_site(self, site: &str) -> Self {
        Self {
            rows: self
                .rows
                .into_iter()
                .filter(|r| r.launch_site == site)
                .collect(),
        }
    }

    /// Keep rows whose payload lies in `range`, both ends inclusive.
    pub fn with_payload(self, range: PayloadRange) -> Self {
        Self {
            rows: self
                .rows
                .into_iter()
                .filter(|r| range.contains(r.payload_mass_kg))
                .collect(),
        }
    }

    pub fn rows(&self) -> &[&'a LaunchRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn outcome_counts(&self) -> OutcomeCounts {
        self.rows
            .iter()
            .fold(OutcomeCounts::default(), |mut counts, r| {
                match r.outcome() {
                    Some(Outcome::Success) => counts.success += 1,
                    Some(Outcome::Failure) => counts.failure += 1,
                    None => {}
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.success + self.failure
    }

    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }
}
