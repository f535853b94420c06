use crate::dates::format_date;
use chrono::NaiveDate;
use std::mem::swap;

/// An analysis period whose endpoints may each be unset while the user is
/// still picking dates.
///
/// When both endpoints are set, `from <= to` always holds: an inverted pair
/// is swapped on construction.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Default)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let mut range = DateRange { from, to };
        if let (Some(start), Some(end)) = (range.from, range.to) {
            if start > end {
                log::debug!("swapping inverted date range {} > {}", start, end);
                swap(&mut range.from, &mut range.to);
            }
        }
        range
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Both endpoints, if both are set.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }

    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// "YYYY-MM-DD ~ YYYY-MM-DD", or `None` until both endpoints are picked.
    pub fn label(&self) -> Option<String> {
        self.bounds()
            .map(|(start, end)| format!("{} ~ {}", format_date(&start), format_date(&end)))
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_is_unset() {
        let range = DateRange::default();
        assert_eq!(range.from(), None);
        assert_eq!(range.to(), None);
        assert!(!range.is_complete());
        assert_eq!(range.label(), None);
    }

    #[test]
    fn test_label_complete_range() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        assert!(range.is_complete());
        assert_eq!(range.label().as_deref(), Some("2024-01-01 ~ 2024-01-31"));
    }

    #[test]
    fn test_partial_range_has_no_label() {
        let range = DateRange::new(Some(date(2024, 2, 1)), None);
        assert_eq!(range.from(), Some(date(2024, 2, 1)));
        assert!(!range.is_complete());
        assert_eq!(range.label(), None);

        let range = DateRange::new(None, Some(date(2024, 2, 1)));
        assert!(!range.is_complete());
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let range = DateRange::new(Some(date(2024, 3, 10)), Some(date(2024, 3, 1)));
        assert_eq!(range.bounds(), Some((date(2024, 3, 1), date(2024, 3, 10))));
    }

    #[test]
    fn test_single_day_range() {
        let day = date(2022, 3, 15);
        let range = DateRange::new(Some(day), Some(day));
        assert_eq!(range.label().as_deref(), Some("2022-03-15 ~ 2022-03-15"));
    }
}
