//! Cumulative planet-discovery curve
//!
//! The catalog only records discoveries; the eight classical solar-system
//! planets predate it, so the curve starts from a count of eight at a
//! sentinel year well before the first catalog entry.

use serde::Serialize;

/// Sentinel first year of the curve, before any catalog discovery
pub const CURVE_START_YEAR: i32 = 1940;

/// Planets already known when catalog coverage begins
pub const PRIOR_KNOWN_PLANETS: u32 = 8;

/// Running count of known planets by year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryCurve {
    years: Vec<i32>,
    counts: Vec<u32>,
}

impl DiscoveryCurve {
    /// Build the curve from catalog discovery years, in any order
    ///
    /// Years are sorted ascending and prefixed with the sentinel start
    /// year. Repeated years are kept: each discovery increments the count.
    pub fn from_years(mut discovery_years: Vec<i32>) -> Self {
        discovery_years.sort_unstable();

        let mut years = Vec::with_capacity(discovery_years.len() + 1);
        years.push(CURVE_START_YEAR);
        years.extend(discovery_years);

        let counts = (0..years.len() as u32)
            .map(|i| PRIOR_KNOWN_PLANETS + i)
            .collect();

        Self { years, counts }
    }

    /// Curve years: the sentinel first, then sorted discovery years
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Known-planet count at each curve year
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of curve points (one more than the discovery count)
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Never true after construction; the sentinel point is always present
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Points in (year, count) data space, for plotting
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.years
            .iter()
            .zip(&self.counts)
            .map(|(&year, &count)| (f64::from(year), f64::from(count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_from_unsorted_years() {
        let curve = DiscoveryCurve::from_years(vec![1996, 1995, 1995]);
        assert_eq!(curve.years(), &[1940, 1995, 1995, 1996]);
        assert_eq!(curve.counts(), &[8, 9, 10, 11]);
    }

    #[test]
    fn test_curve_length_is_discoveries_plus_sentinel() {
        let curve = DiscoveryCurve::from_years(vec![2000; 57]);
        assert_eq!(curve.len(), 58);
    }

    #[test]
    fn test_curve_is_monotonic() {
        let curve = DiscoveryCurve::from_years(vec![2014, 1992, 2016, 2014, 1995]);
        for pair in curve.years().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for pair in curve.counts().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_repeat_years_each_count() {
        let curve = DiscoveryCurve::from_years(vec![2017; 4]);
        assert_eq!(curve.years(), &[1940, 2017, 2017, 2017, 2017]);
        assert_eq!(curve.counts(), &[8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut years = vec![2014, 1992, 2016, 2014, 1995];
        years.sort_unstable();
        let sorted_once = years.clone();
        years.sort_unstable();
        assert_eq!(years, sorted_once);

        assert_eq!(
            DiscoveryCurve::from_years(sorted_once),
            DiscoveryCurve::from_years(years)
        );
    }

    #[test]
    fn test_empty_catalog_keeps_sentinel() {
        let curve = DiscoveryCurve::from_years(Vec::new());
        assert_eq!(curve.years(), &[1940]);
        assert_eq!(curve.counts(), &[8]);
        assert!(!curve.is_empty());
    }

    #[test]
    fn test_points_pair_years_with_counts() {
        let curve = DiscoveryCurve::from_years(vec![1995]);
        let points: Vec<(f64, f64)> = curve.points().collect();
        assert_eq!(points, vec![(1940.0, 8.0), (1995.0, 9.0)]);
    }
}
