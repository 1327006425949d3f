use snafu::prelude::*;

use crate::sql::expr;

pub mod clause;
pub mod column;
pub mod constraint;
pub mod create_table;
pub mod keyword;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Cannot create table with no columns: {table_name}"))]
    NoColumns { table_name: String },

    #[snafu(display("At least one column required for {constraint} constraint"))]
    EmptyConstraint { constraint: String },

    #[snafu(display("{feature} is not supported"))]
    Unsupported { feature: String },

    #[snafu(display("Unable to render check expression: {source}"))]
    RenderCheckExpression { source: expr::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
