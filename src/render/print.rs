//! Numbered, column-aligned listing of upgrades

use std::io::{self, Write};

use crate::diff::{MarkedVersion, diff};
use crate::render::style::{Style, Styler};
use crate::upgrade::UpgradeRecord;

/// "repository/name" with the repository colored and the name in bold
pub fn stylized_name(upgrade: &UpgradeRecord, styler: &dyn Styler) -> String {
    format!(
        "{}/{}",
        styler.style(&upgrade.repository, Style::Repository),
        styler.style(&upgrade.name, Style::Bold)
    )
}

fn render_marked(marked: &MarkedVersion<'_>, styler: &dyn Styler) -> String {
    marked.render(|text, change| styler.style(text, change.into()))
}

fn visible_width(text: &str) -> usize {
    text.chars().count()
}

/// Write the upgrade listing, numbered from `n` down to 1
///
/// Columns: number, `repository/name`, installed version, `->`, available
/// version. Names and installed versions are padded to the longest entry.
pub fn print_upgrades<W: Write>(
    out: &mut W,
    upgrades: &[UpgradeRecord],
    styler: &dyn Styler,
) -> io::Result<()> {
    let total = upgrades.len();
    let longest_name = upgrades
        .iter()
        .map(|upgrade| visible_width(&upgrade.qualified_name()))
        .max()
        .unwrap_or(0);
    let longest_version = upgrades
        .iter()
        .map(|upgrade| visible_width(&upgrade.local_version))
        .max()
        .unwrap_or(0);
    let number_width = total.to_string().len();

    for (k, upgrade) in upgrades.iter().enumerate() {
        let (left, right) = diff(&upgrade.local_version, &upgrade.remote_version);

        let number = format!("{:>number_width$}  ", total - k);
        let name_padding = longest_name - visible_width(&upgrade.qualified_name());
        let version_padding = longest_version - visible_width(&upgrade.local_version);

        writeln!(
            out,
            "{}{}{:name_padding$}  {}{:version_padding$} -> {}",
            styler.style(&number, Style::Index),
            stylized_name(upgrade, styler),
            "",
            render_marked(&left, styler),
            "",
            render_marked(&right, styler),
        )?;
    }

    Ok(())
}

/// Write a single highlighted `old -> new` line
pub fn print_diff<W: Write>(
    out: &mut W,
    old_version: &str,
    new_version: &str,
    styler: &dyn Styler,
) -> io::Result<()> {
    let (left, right) = diff(old_version, new_version);
    writeln!(
        out,
        "{} -> {}",
        render_marked(&left, styler),
        render_marked(&right, styler)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::PlainStyler;

    /// Makes every role visible in plain text
    struct TagStyler;

    impl Styler for TagStyler {
        fn style(&self, text: &str, style: Style) -> String {
            let tag = match style {
                Style::Removed => "r",
                Style::Added => "a",
                Style::Bold => "b",
                Style::Index => "i",
                Style::Repository => "repo",
            };
            format!("<{tag}>{text}</{tag}>")
        }
    }

    fn render(upgrades: &[UpgradeRecord], styler: &dyn Styler) -> String {
        let mut out = Vec::new();
        print_upgrades(&mut out, upgrades, styler).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn print_upgrades_aligns_columns() {
        let upgrades = vec![
            UpgradeRecord::new("linux", "core", "6.1.1-1", "6.1.2-1"),
            UpgradeRecord::new("vim", "extra", "9.0", "9.1"),
        ];

        let output = render(&upgrades, &PlainStyler);

        assert_eq!(
            output,
            "2  core/linux  6.1.1-1 -> 6.1.2-1\n\
             1  extra/vim   9.0     -> 9.1\n"
        );
    }

    #[test]
    fn print_upgrades_right_aligns_numbers() {
        let upgrades: Vec<UpgradeRecord> = (0..10)
            .map(|i| UpgradeRecord::new(format!("p{i}"), "core", "1", "2"))
            .collect();

        let output = render(&upgrades, &PlainStyler);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "10  core/p0  1 -> 2");
        assert_eq!(lines[9], " 1  core/p9  1 -> 2");
    }

    #[test]
    fn print_upgrades_styles_each_role() {
        let upgrades = vec![UpgradeRecord::new("vim", "extra", "9.0.1", "9.1.0")];

        let output = render(&upgrades, &TagStyler);

        assert_eq!(
            output,
            "<i>1  </i><repo>extra</repo>/<b>vim</b>  \
             9.<r>0</r>.<r>1</r> -> 9.<a>1</a>.<a>0</a>\n"
        );
    }

    #[test]
    fn print_upgrades_pads_by_characters_not_bytes() {
        let upgrades = vec![
            UpgradeRecord::new("a", "core", "é", "f"),
            UpgradeRecord::new("b", "core", "ab", "ac"),
        ];

        let output = render(&upgrades, &PlainStyler);

        assert_eq!(
            output,
            "2  core/a  é  -> f\n\
             1  core/b  ab -> ac\n"
        );
    }

    #[test]
    fn print_upgrades_writes_nothing_for_empty_list() {
        assert_eq!(render(&[], &PlainStyler), "");
    }

    #[test]
    fn print_diff_marks_both_sides() {
        let mut out = Vec::new();
        print_diff(&mut out, "1.0beta2", "1.0beta3", &TagStyler).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.0<r>beta2</r> -> 1.0<a>beta3</a>\n"
        );
    }
}
