pub mod output;

pub use output::{render_block, render_line, write_report, BlockKind};
