//! Text cleaning rules for athlete and team names

use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^()]*\)").unwrap());

static QUOTED_NICKNAME: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\s*"[^"]*""#).unwrap());

/// Strip `(...)` segments and quoted nicknames, then normalize whitespace.
/// Idempotent: cleaning a cleaned name returns it unchanged.
pub fn clean_athlete_name(raw: &str) -> String {
    let without_parens = PARENTHESIZED.replace_all(raw, "");
    let without_nickname = QUOTED_NICKNAME.replace_all(&without_parens, "");
    without_nickname.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Team name up to the first `-`, dropping split suffixes like `-1`, `-2`
pub fn team_display_name(raw: &str) -> &str {
    match raw.find('-') {
        Some(idx) => raw[..idx].trim_end(),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_parenthesized() {
        assert_eq!(clean_athlete_name("John Smith (JS) "), "John Smith");
        assert_eq!(
            clean_athlete_name("Jean-Franois Blanchy (-Jamme)"),
            "Jean-Franois Blanchy"
        );
    }

    #[test]
    fn test_clean_quoted_nickname() {
        assert_eq!(
            clean_athlete_name("Edgar Lindenau Aabye"),
            "Edgar Lindenau Aabye"
        );
        assert_eq!(
            clean_athlete_name(r#"Mary "Polly" Lou Retton"#),
            "Mary Lou Retton"
        );
        assert_eq!(
            clean_athlete_name(r#"Robert "Bob" Beamon (Jr.)"#),
            "Robert Beamon"
        );
    }

    #[test]
    fn test_clean_is_idempotent() {
        for raw in [
            "John Smith (JS) ",
            r#"Mary "Polly" Lou Retton"#,
            "  Ann   (A.)  Lee ",
            "Plain Name",
        ] {
            let once = clean_athlete_name(raw);
            assert_eq!(clean_athlete_name(&once), once);
        }
        assert_eq!(clean_athlete_name("John Smith"), "John Smith");
    }

    #[test]
    fn test_team_display_name() {
        assert_eq!(team_display_name("United States-1"), "United States");
        assert_eq!(team_display_name("Denmark/Sweden"), "Denmark/Sweden");
        assert_eq!(team_display_name("Germany-2-3"), "Germany");
    }
}
