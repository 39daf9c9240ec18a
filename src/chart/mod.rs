//! Chart assembly: spread reorientation and row building.

pub mod assembler;
pub mod spread;

pub use assembler::{AssembledChart, assemble_chart, build_row};
pub use spread::{format_signed, reorient};
