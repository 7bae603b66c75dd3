//! Infrastructure layer - CSV persistence and transcript logs

pub mod csv_table;
pub mod persistence;
