//! Presentation of a finished [`cvm_core::Sweep`]: banner, console tables,
//! SVG figures and a JSON run manifest. Nothing here computes domain
//! values; everything reads the sweep after it is complete.

pub mod banner;
pub mod error;
pub mod figures;
pub mod manifest;
pub mod table;


pub use banner::banner;
pub use error::ReportError;
pub use figures::{figures, render_svg, FigureSpec, SeriesColor, SeriesSpec};
pub use manifest::{generate_run_manifest, ColumnSet, FigureGrouping, RunManifest};
pub use table::{entropy_table, ising_table, Column, ENTROPY_COLUMNS, ISING_COLUMNS};
