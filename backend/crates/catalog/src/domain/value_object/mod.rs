//! Value Objects

pub mod thickness;
