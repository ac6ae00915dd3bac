use crate::{Config, Item};
use colored::*;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Binding,
}

impl BlockKind {
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Header => "### HEADER_PATH_BLOCK",
            BlockKind::Binding => "### BINDING_PATH_BLOCK",
        }
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "header" => Ok(BlockKind::Header),
            "binding" => Ok(BlockKind::Binding),
            _ => Err(format!("Unknown block: {}", s)),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Header => write!(f, "header"),
            BlockKind::Binding => write!(f, "binding"),
        }
    }
}

/// One `VAR="${BASE}/file"` assignment
pub fn render_line(item: &Item, kind: BlockKind, config: &Config) -> String {
    let (var, base, file) = match kind {
        BlockKind::Header => (
            &item.header_var_name,
            &config.header_base_var,
            &item.header_file_name,
        ),
        BlockKind::Binding => (
            &item.binding_var_name,
            &config.binding_base_var,
            &item.binding_file_name,
        ),
    };
    format!("{}=\"${{{}}}/{}\"", var, base, file)
}

/// All assignments of one kind, newline-joined, no trailing newline
pub fn render_block(items: &[Item], kind: BlockKind, config: &Config) -> String {
    items
        .iter()
        .map(|item| render_line(item, kind, config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write both labeled blocks, separated by a blank line
pub fn write_report<W: Write>(out: &mut W, items: &[Item], config: &Config) -> io::Result<()> {
    writeln!(out, "{}", BlockKind::Header.label())?;
    writeln!(out, "{}", render_block(items, BlockKind::Header, config))?;
    writeln!(out)?;
    writeln!(out, "{}", BlockKind::Binding.label())?;
    writeln!(out, "{}", render_block(items, BlockKind::Binding, config))?;
    Ok(())
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
