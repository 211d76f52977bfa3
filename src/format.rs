use relq_core::{Outcome, Relation};
use std::fmt;

const RULE_WIDTH: usize = 40;

/// Renders the outcomes of a run as the text of the output file: one numbered block
/// per query, each followed by a blank line.
pub struct Report<'a>(pub &'a [Outcome]);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in self.0 {
            writeln!(f, "Query {}: {}", outcome.index(), outcome.query())?;
            writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
            match outcome.result() {
                Ok(relation) => write_relation(relation, f)?,
                Err(error) => writeln!(f, "Error: {}", error)?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_relation(relation: &Relation, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if relation.is_empty() {
        return writeln!(f, "Result = {{}} (empty result)");
    }

    writeln!(f, "Result = {{{}", relation.header().join(", "))?;
    for tuple in relation.tuples().iter() {
        writeln!(f, "  {}", tuple)?;
    }
    writeln!(f, "}}")
}
