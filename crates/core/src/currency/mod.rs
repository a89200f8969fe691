//! Currency descriptors and amount allocation.

pub mod allocation;
pub mod descriptor;

#[cfg(test)]
mod props;

pub use allocation::AllocationEngine;
pub use descriptor::Currency;
