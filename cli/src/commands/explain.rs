//! `explain`: render the SELECT produced by a list of sort tokens.

use drizzle_sort::{NoHooks, SelectQuery, Sorter};

use crate::config::Config;
use crate::error::CliError;

pub fn run<S: AsRef<str>>(config: &Config, sorts: &[S]) -> Result<String, CliError> {
    let table = config.table.as_deref().ok_or(CliError::MissingTable)?;
    let sorter = Sorter::new(config.options);

    let mut query = SelectQuery::from(table);
    let directives = sorter.sort_all(sorts, &mut query, &NoHooks)?;
    tracing::debug!(table, directives = directives.len(), "explain");

    Ok(query.to_sql())
}
