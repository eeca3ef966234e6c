//! csvtable - Declarative, type-driven CSV export
//!
//! Describe a table once (ordered columns with projection closures, plus an
//! encoding configuration), then export any sequence of records as a
//! RFC-4180-like document: escaped header row, one row per record, fields
//! comma-separated, rows CRLF-separated.
//!
//! ```
//! use csvtable::{Column, Table};
//!
//! struct Event {
//!     name: String,
//!     count: i64,
//! }
//!
//! let table = Table::new(vec![
//!     Column::new("Name", |e: &Event| e.name.clone()),
//!     Column::new("Count", |e: &Event| e.count),
//! ])
//! .unwrap();
//!
//! let events = vec![Event { name: "first".into(), count: 3 }];
//! assert_eq!(table.export(&events), "Name,Count\r\nfirst,3");
//! ```

pub mod config;
pub mod escape;
pub mod table;
pub mod value;

pub use config::{BoolStrategy, Configuration, DateStrategy};
pub use table::{Column, Table, TableError};
pub use value::Value;
