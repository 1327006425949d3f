pub mod ddl;
pub mod expr;
