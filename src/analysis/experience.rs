use once_cell::sync::Lazy;
use regex::Regex;

static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s+years").expect("years pattern is valid"));

/// Estimates years of professional experience from resume text.
pub trait ExperienceExtractor: Send + Sync {
    fn experience_years(&self, text: &str) -> u32;
    fn name(&self) -> &str;
}

/// Takes the largest `<n> years` / `<n>+ years` figure in the text.
///
/// Spelled-out numbers ("five years") and ranges ("3-5 years" counts as 5)
/// are not understood.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearsPatternExtractor;

impl ExperienceExtractor for YearsPatternExtractor {
    fn experience_years(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();

        YEARS_PATTERN
            .captures_iter(&lower)
            .filter_map(|caps| caps[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        "years-pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(text: &str) -> u32 {
        YearsPatternExtractor.experience_years(text)
    }

    #[test]
    fn test_takes_maximum() {
        assert_eq!(years("3+ years with SQL, 5 years with Python"), 5);
        assert_eq!(years("12 YEARS in retail, 2 years coding"), 12);
    }

    #[test]
    fn test_requires_whitespace_before_years() {
        assert_eq!(years("10years of Java"), 0);
        assert_eq!(years("7+\n\tyears"), 7);
    }

    #[test]
    fn test_no_match_defaults_to_zero() {
        assert_eq!(years(""), 0);
        assert_eq!(years("five years of experience"), 0);
        assert_eq!(years("2 yrs"), 0);
    }

    #[test]
    fn test_range_counts_upper_bound() {
        assert_eq!(years("3-5 years"), 5);
    }

    #[test]
    fn test_overflowing_number_is_ignored() {
        assert_eq!(years("99999999999 years and 4 years"), 4);
    }
}
