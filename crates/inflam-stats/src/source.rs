//! Suppliers of inflammation tables.

use inflam_model::Table;

use crate::error::{Result, StatsError};

/// Something that can produce an ordered collection of datasets.
///
/// Implementations decide where tables come from (files, memory, a
/// service). `load` must fail with [`StatsError::NoData`] or an equivalent
/// source error when there is nothing to load, rather than returning an
/// empty collection.
pub trait DataSource {
    fn load(&self) -> Result<Vec<Table>>;
}

/// Tables that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: Vec<Table>,
}

impl InMemorySource {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

impl DataSource for InMemorySource {
    fn load(&self) -> Result<Vec<Table>> {
        if self.tables.is_empty() {
            return Err(StatsError::NoData);
        }
        Ok(self.tables.clone())
    }
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn load(&self) -> Result<Vec<Table>> {
        (**self).load()
    }
}
