//! Shared, DOM-free model of the ribbon toolkit.

pub mod enums;
pub mod shared;
