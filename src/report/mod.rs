//! Output of projections: display formatting and file export

mod export;
mod format;

pub use export::{export_json, export_monthly_csv, write_json, write_monthly_csv, MONTHLY_HEADER};
pub use format::{format_currency, write_summary};
