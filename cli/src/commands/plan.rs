//! `plan`: show how each sort token is classified and which joins it needs.

use drizzle_sort::{JoinPlan, SortError, Sorter, UnsupportedPattern};

use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run<S: AsRef<str>>(config: &Config, sorts: &[S]) -> Result<String, CliError> {
    let sorter = Sorter::new(config.options);
    let mut lines = Vec::new();

    for raw in sorts {
        let directive = sorter.parse(raw.as_ref())?;
        lines.push(output::heading(&directive.to_string()));

        let plan = match JoinPlan::classify(directive.field()) {
            Ok(plan) => plan,
            Err(SortError::UnsupportedJoinPattern { .. })
                if config.options.unsupported == UnsupportedPattern::Ignore =>
            {
                lines.push(format!(
                    "  {} {}",
                    output::label("shape:"),
                    output::muted("unsupported (ignored)")
                ));
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        lines.push(format!("  {} {}", output::label("shape:"), plan.name()));
        lines.extend(plan.joins().into_iter().map(|join| {
            format!(
                "  {} LEFT JOIN {} ON {} = {}",
                output::label("join:"),
                join.table,
                join.first,
                join.second
            )
        }));
        if let Some(main) = plan.main_table() {
            lines.push(format!("  {} {main}.*", output::label("select:")));
        }
        lines.push(format!(
            "  {} {} {}",
            output::label("order:"),
            plan.order_column(),
            directive.order().as_sql()
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
