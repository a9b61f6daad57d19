//! Help-line rendering shared by every option group.

use std::io::{self, Write};

/// Column the help text is padded to, measured from the start of the long
/// alias. Long aliases at or beyond the column still get one space.
pub const HELP_COLUMN_WIDTH: usize = 20;

/// Writes ` -s / --long<pad>help` with the shared column rule.
pub fn write_option_line(
    out: &mut dyn Write,
    short: &str,
    long: &str,
    help: &str,
) -> io::Result<()> {
    let pad = HELP_COLUMN_WIDTH.saturating_sub(long.len()).max(1);
    writeln!(out, " -{} / --{}{}{}", short, long, " ".repeat(pad), help)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(short: &str, long: &str, help: &str) -> String {
        let mut out = Vec::new();
        write_option_line(&mut out, short, long, help).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pads_to_the_shared_column() {
        let line = render("I", "input", "Input data file");
        assert_eq!(line, format!(" -I / --input{}Input data file\n", " ".repeat(15)));
    }

    #[test]
    fn long_aliases_keep_a_single_space() {
        let line = render("x", "a_very_long_alias_name_here", "Help");
        assert_eq!(line, " -x / --a_very_long_alias_name_here Help\n");
    }
}
