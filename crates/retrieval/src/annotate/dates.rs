//! Regex-based date expression extraction.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|\
November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";

// Alternatives are tried left to right at each position, so longer forms
// come before the bare year.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let month = format!(r"(?:{MONTHS})\b\.?");
    let day = r"\d{1,2}(?:st|nd|rd|th)?";
    let year = r"\d{4}";
    let pattern = [
        // February 11, 2018 / Feb 11
        format!(r"\b{month}\s+{day}\b(?:,?\s+{year}\b)?"),
        // 11 February 2018 / 11th of February
        format!(r"\b{day}\s+(?:of\s+)?{month}(?:,?\s+{year}\b)?"),
        // February 2018
        format!(r"\b{month},?\s+{year}\b"),
        // 2018-02-11
        r"\b\d{4}-\d{1,2}-\d{1,2}\b".to_string(),
        // 02/11/2018
        r"\b\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})\b".to_string(),
        // 1990s
        r"\b(?:1[0-9]|20)\d0s\b".to_string(),
        // 1990
        r"\b(?:1[0-9]|20)\d{2}\b".to_string(),
    ]
    .join("|");
    Regex::new(&pattern).expect("date pattern is valid")
});

/// Extract date expressions in order of appearance.
pub fn extract(sentence: &str) -> Vec<String> {
    DATE_PATTERN
        .find_iter(sentence)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_day_year() {
        assert_eq!(
            extract("Apple released the iPod on October 23, 2001 in Cupertino."),
            vec!["October 23, 2001"]
        );
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(extract("It opened on 4 July 1976."), vec!["4 July 1976"]);
        assert_eq!(extract("the 11th of February"), vec!["11th of February"]);
    }

    #[test]
    fn test_month_year_and_numeric() {
        assert_eq!(extract("Released in March 2005."), vec!["March 2005"]);
        assert_eq!(extract("Dated 2018-02-11."), vec!["2018-02-11"]);
        assert_eq!(extract("Signed 02/11/2018."), vec!["02/11/2018"]);
    }

    #[test]
    fn test_years_and_decades_in_order() {
        assert_eq!(
            extract("Popular in the 1990s, it was revived in 2004."),
            vec!["1990s", "2004"]
        );
    }

    #[test]
    fn test_month_must_be_whole_word() {
        assert!(extract("About 11 Marchers joined the rally.").is_empty());
        assert!(extract("Mayday 12 was shouted.").is_empty());
        assert_eq!(extract("Filed on 5 Sept. 2019."), vec!["5 Sept. 2019"]);
    }

    #[test]
    fn test_no_dates() {
        assert!(extract("She may come to the party.").is_empty());
        assert!(extract("There were 300 people.").is_empty());
    }
}
