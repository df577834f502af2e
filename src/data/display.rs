use super::GraphView;
use crate::front_end::Context;
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

const CELL_WIDTH: usize = 12;

fn display_rule(columns: usize, f: &mut Formatter<'_>) -> Result {
    writeln!(
        f,
        "+{}+",
        (0..columns).map(|_| "-".repeat(CELL_WIDTH + 1)).join("+")
    )
}

fn display_table<R>(fields: &[&str], rows: R, f: &mut Formatter<'_>) -> Result
where
    R: Iterator<Item = Vec<i64>>,
{
    display_rule(fields.len(), f)?;
    writeln!(
        f,
        "|{}|",
        fields
            .iter()
            .map(|field| format!("{:>width$} ", field, width = CELL_WIDTH))
            .join("|")
    )?;
    display_rule(fields.len(), f)?;
    for row in rows {
        writeln!(
            f,
            "|{}|",
            row.iter()
                .map(|x| format!("{:>width$} ", x, width = CELL_WIDTH))
                .join("|")
        )?;
    }
    display_rule(fields.len(), f)
}

impl Display for GraphView {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        display_table(
            Context::Vertex.fields(),
            self.vertices.iter().map(|&(vid, vlabel)| vec![vid, vlabel]),
            f,
        )?;
        display_table(
            Context::Edge.fields(),
            self.edges
                .iter()
                .map(|&(src, dst, elabel, capacity)| vec![src, dst, elabel, capacity]),
            f,
        )
    }
}
