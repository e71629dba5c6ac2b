//! Menu bar helper shared by the player's header line.

use std::io;

use anyhow::Result;
use crossterm::{queue, style};

/// Print a menu item string, bolding any text inside `[...]` brackets and
/// dimming the rest.
pub fn print_menu_item(stdout: &mut io::Stdout, item: &str) -> Result<()> {
    let mut rest = item;
    while let Some(open) = rest.find('[') {
        let (before, bracketed) = rest.split_at(open);
        if !before.is_empty() {
            print_dim(stdout, before)?;
        }
        match bracketed.find(']') {
            Some(close) => {
                queue!(
                    stdout,
                    style::SetAttribute(style::Attribute::Bold),
                    style::Print(&bracketed[..=close]),
                    style::SetAttribute(style::Attribute::Reset),
                )?;
                rest = &bracketed[close + 1..];
            }
            None => {
                queue!(stdout, style::Print(bracketed))?;
                return Ok(());
            }
        }
    }
    if !rest.is_empty() {
        print_dim(stdout, rest)?;
    }
    Ok(())
}

fn print_dim(stdout: &mut io::Stdout, text: &str) -> Result<()> {
    queue!(
        stdout,
        style::SetAttribute(style::Attribute::Dim),
        style::Print(text),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    Ok(())
}
