//! Domain rules that do not touch the database.

pub mod discount;
