//! CSV project loader.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use infra_calendar::parse_date;
use tracing::{debug, trace};

use crate::error::LoaderError;
use crate::project::ProjectRecord;

const NAME: &str = "name";
const START_DATE: &str = "start_date";
const END_DATE: &str = "end_date";
const TEAM_SIZE: &str = "team_size";

/// Loader for project exports.
///
/// The header row must contain `name`, `start_date`, `end_date` and
/// `team_size` (any order, case-insensitive); other columns are ignored.
/// Blank date or team-size cells are kept as "not set" rather than rejected.
pub struct ProjectLoader;

impl ProjectLoader {
    /// Load project records from a CSV file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// The parsed projects in file order, or an error if loading fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectRecord>, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.display().to_string()));
        }

        debug!(path = %path.display(), "loading projects");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load project records from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ProjectRecord>, LoaderError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let columns = Columns::locate(reader.headers()?)?;

        let mut projects = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let project = columns.parse(idx + 1, &record)?;
            trace!(row = idx + 1, name = %project.name, "parsed project");
            projects.push(project);
        }

        debug!(count = projects.len(), "loaded projects");
        Ok(projects)
    }
}

/// Positions of the required columns in the header row.
struct Columns {
    name: usize,
    start_date: usize,
    end_date: usize,
    team_size: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, LoaderError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(column))
                .ok_or(LoaderError::MissingColumn(column))
        };

        Ok(Self {
            name: find(NAME)?,
            start_date: find(START_DATE)?,
            end_date: find(END_DATE)?,
            team_size: find(TEAM_SIZE)?,
        })
    }

    fn parse(&self, row: usize, record: &StringRecord) -> Result<ProjectRecord, LoaderError> {
        let cell = |idx: usize| record.get(idx).unwrap_or_default();

        Ok(ProjectRecord {
            name: cell(self.name).to_string(),
            start_date: parse_optional_date(row, START_DATE, cell(self.start_date))?,
            end_date: parse_optional_date(row, END_DATE, cell(self.end_date))?,
            team_size: parse_team_size(row, cell(self.team_size))?,
        })
    }
}

fn parse_optional_date(
    row: usize,
    column: &'static str,
    value: &str,
) -> Result<Option<NaiveDate>, LoaderError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_date(value)
        .map(Some)
        .map_err(|e| LoaderError::InvalidRow {
            row,
            column,
            message: e.to_string(),
        })
}

fn parse_team_size(row: usize, value: &str) -> Result<u32, LoaderError> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| LoaderError::InvalidRow {
        row,
        column: TEAM_SIZE,
        message: format!("expected a non-negative integer, got '{}'", value),
    })
}
