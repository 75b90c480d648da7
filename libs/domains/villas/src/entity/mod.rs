//! SeaORM entities for the `villas` and `villa_numbers` tables.

pub mod villa;
pub mod villa_number;
