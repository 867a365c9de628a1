//! Supporting utilities shared by the model catalog and the session objects.

pub mod constraint;
pub mod units;
