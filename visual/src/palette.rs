//! Default color cycle.
//!
//! Lines drawn without an explicit color take the next entry of this cycle,
//! starting over for every new [`Axis`](crate::Axis). The colors are defined
//! in the preamble of every rendered figure under the names `C0`..`C9`.

/// Names and hex values of the default cycle.
pub const DEFAULT_COLORS: [(&str, &str); 10] = [
    ("C0", "1F77B4"),
    ("C1", "FF7F0E"),
    ("C2", "2CA02C"),
    ("C3", "D62728"),
    ("C4", "9467BD"),
    ("C5", "8C564B"),
    ("C6", "E377C2"),
    ("C7", "7F7F7F"),
    ("C8", "BCBD22"),
    ("C9", "17BECF"),
];

/// Color names known to xcolor without loading extra packages.
const NAMED_COLORS: [&str; 19] = [
    "red",
    "green",
    "blue",
    "cyan",
    "magenta",
    "yellow",
    "black",
    "gray",
    "white",
    "darkgray",
    "lightgray",
    "brown",
    "lime",
    "olive",
    "orange",
    "pink",
    "purple",
    "teal",
    "violet",
];

pub fn cycle_color(index: usize) -> &'static str {
    DEFAULT_COLORS[index % DEFAULT_COLORS.len()].0
}

/// Whether any of the style options already picks a color.
pub fn has_color(options: &[String]) -> bool {
    options.iter().any(|option| {
        let option = option.trim();
        option.starts_with("color=")
            || option.starts_with("draw=")
            || NAMED_COLORS.contains(&option)
            || DEFAULT_COLORS.iter().any(|(name, _)| *name == option)
            || NAMED_COLORS
                .iter()
                .any(|name| option.starts_with(name) && option[name.len()..].starts_with('!'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(options: &[&str]) -> Vec<String> {
        options.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cycle_wraps_around() {
        assert_eq!(cycle_color(0), "C0");
        assert_eq!(cycle_color(9), "C9");
        assert_eq!(cycle_color(10), "C0");
    }

    #[test]
    fn detects_explicit_colors() {
        assert!(has_color(&owned(&["thick", "black"])));
        assert!(has_color(&owned(&["color=C3"])));
        assert!(has_color(&owned(&["red!50"])));
        assert!(has_color(&owned(&[" C1 "])));
        assert!(!has_color(&owned(&["thick", "dashed"])));
        assert!(!has_color(&[]));
    }
}
