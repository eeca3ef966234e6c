//! Table definitions and the export pipeline

use std::fmt;

use thiserror::Error;

use crate::config::Configuration;
use crate::escape::escape;
use crate::value::Value;

/// Errors from table construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A table must declare at least one column
    #[error("a table requires at least one column")]
    NoColumns,
}

/// A named projection from a record to a single cell value
///
/// Columns are ordered; their declaration order fixes the left-to-right
/// field order of every exported row, including the header.
pub struct Column<R> {
    header: String,
    projection: Box<dyn Fn(&R) -> Value + Send + Sync>,
}

impl<R> Column<R> {
    /// Create a column from a header label and a projection closure
    pub fn new<F, V>(header: impl Into<String>, projection: F) -> Self
    where
        F: Fn(&R) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self {
            header: header.into(),
            projection: Box::new(move |record| projection(record).into()),
        }
    }

    /// The header label for this column
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Apply the projection to a record
    pub fn value(&self, record: &R) -> Value {
        (self.projection)(record)
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// A CSV table definition: ordered columns plus an encoding configuration
///
/// A table holds no record data. Each [`Table::export`] call receives a
/// fresh record sequence, reads it once, and retains nothing.
#[derive(Debug)]
pub struct Table<R> {
    columns: Vec<Column<R>>,
    configuration: Configuration,
}

impl<R> Table<R> {
    /// Create a table with the default configuration.
    ///
    /// Fails with [`TableError::NoColumns`] on an empty column list, since an
    /// exported document without a header row is never useful.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        Ok(Self {
            columns,
            configuration: Configuration::default(),
        })
    }

    /// Override the encoding configuration
    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    /// The declared columns, in output order
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// The active encoding configuration
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Export a sequence of records as a CSV document.
    ///
    /// The output is the escaped header row followed by one row per record
    /// in iteration order, fields joined with commas and rows joined with
    /// CRLF. There is no trailing row separator. The call is pure: identical
    /// inputs produce byte-identical output.
    pub fn export<'a, I>(&self, records: I) -> String
    where
        R: 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut rows = vec![self.header_row()];
        rows.extend(records.into_iter().map(|record| self.data_row(record)));
        rows.join("\r\n")
    }

    fn header_row(&self) -> String {
        self.columns
            .iter()
            .map(|c| escape(c.header()).into_owned())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn data_row(&self, record: &R) -> String {
        self.columns
            .iter()
            .map(|c| {
                let raw = c.value(record).encode(&self.configuration);
                escape(&raw).into_owned()
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
