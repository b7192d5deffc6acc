use std::io::{self, Write};

use crate::config::{BLOCK, MAX_BAR_LENGTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
}

/// Blocks for `value` when `max` fills the full width
pub fn bar_length(value: i64, max: i64) -> usize {
    if max <= 0 || value <= 0 {
        return 0;
    }
    (value as f64 * MAX_BAR_LENGTH as f64 / max as f64).round() as usize
}

pub fn render_chart<W: Write>(out: &mut W, bars: &[Bar]) -> io::Result<()> {
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
    if max <= 0 {
        return writeln!(out, "No data for the given filters");
    }

    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    for bar in bars {
        let blocks: String = std::iter::repeat(BLOCK)
            .take(bar_length(bar.value, max))
            .collect();
        writeln!(
            out,
            "{:<width$} {} {}",
            bar.label,
            blocks,
            bar.value,
            width = label_width
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(label: &str, value: i64) -> Bar {
        Bar {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_largest_bar_is_full_width() {
        assert_eq!(bar_length(40, 40), MAX_BAR_LENGTH);
        assert_eq!(bar_length(10, 40), 50);
        assert_eq!(bar_length(1, 3), 67);
        assert_eq!(bar_length(0, 3), 0);
    }

    #[test]
    fn test_render_lines() {
        let mut out = Vec::new();
        render_chart(&mut out, &[bar("1992", 2), bar("1996", 1)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1992 "));
        assert_eq!(lines[0].chars().filter(|c| *c == BLOCK).count(), 200);
        assert_eq!(lines[1].chars().filter(|c| *c == BLOCK).count(), 100);
        assert!(lines[1].ends_with(" 1"));
    }

    #[test]
    fn test_empty_chart() {
        let mut out = Vec::new();
        render_chart(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No data for the given filters\n");
    }
}
