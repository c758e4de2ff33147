//! Pure display-scaling helpers for tag clouds.
//!
//! Both helpers are deterministic functions of their numeric inputs and
//! are independent of any particular corpus, so hosts can apply them to
//! cached counts without recomputing the index.

use serde::{Deserialize, Serialize};

/// Exponent applied to the count ratio when scaling sizes. Sub-linear,
/// so size differences among the most popular tags stay moderate.
const SIZE_EXPONENT: f64 = 0.7;

/// Inclusive output range for [`display_size`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    /// Size assigned to a zero-count tag.
    pub min: f64,
    /// Size assigned to the most-used tag.
    pub max: f64,
}

impl SizeRange {
    /// Create a new size range.
    pub fn new(min: f64, max: f64) -> Self {
        SizeRange { min, max }
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        // A comfortable rem range for tag-cloud rendering.
        SizeRange { min: 0.8, max: 1.8 }
    }
}

/// Display size for a tag with `count` uses out of a maximum of
/// `max_count`, scaled into `range`.
///
/// Computed as `min + (max - min) * (count / max_count)^0.7`. When
/// `max_count` is zero (empty or untagged corpus) the minimum size is
/// returned.
pub fn display_size(count: usize, max_count: usize, range: SizeRange) -> f64 {
    if max_count == 0 {
        return range.min;
    }

    let ratio = count as f64 / max_count as f64;
    range.min + (range.max - range.min) * ratio.powf(SIZE_EXPONENT)
}

/// Coarse popularity bucket used for visual weighting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTier {
    /// Ratio >= 0.8.
    Hot,
    /// Ratio >= 0.5.
    Popular,
    /// Ratio >= 0.3.
    Normal,
    /// Everything else.
    Cool,
}

impl DisplayTier {
    /// The lowercase label for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayTier::Hot => "hot",
            DisplayTier::Popular => "popular",
            DisplayTier::Normal => "normal",
            DisplayTier::Cool => "cool",
        }
    }
}

/// Display tier for a tag with `count` uses out of a maximum of
/// `max_count`. A zero `max_count` maps to [`DisplayTier::Cool`].
pub fn display_tier(count: usize, max_count: usize) -> DisplayTier {
    if max_count == 0 {
        return DisplayTier::Cool;
    }

    let ratio = count as f64 / max_count as f64;
    if ratio >= 0.8 {
        DisplayTier::Hot
    } else if ratio >= 0.5 {
        DisplayTier::Popular
    } else if ratio >= 0.3 {
        DisplayTier::Normal
    } else {
        DisplayTier::Cool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_size_bounds() {
        let range = SizeRange::default();

        assert_eq!(display_size(0, 10, range), 0.8);
        assert!((display_size(10, 10, range) - 1.8).abs() < 1e-9);

        // Zero max count falls back to the minimum.
        assert_eq!(display_size(0, 0, range), 0.8);
        assert_eq!(display_size(5, 0, range), 0.8);
    }

    #[test]
    fn test_display_size_is_sublinear() {
        let range = SizeRange::new(0.0, 1.0);

        // ratio^0.7 sits above the linear ramp for ratios in (0, 1).
        let half = display_size(5, 10, range);
        assert!(half > 0.5);
        assert!((half - 0.5f64.powf(0.7)).abs() < 1e-9);
    }

    #[test]
    fn test_display_tier_thresholds() {
        assert_eq!(display_tier(5, 5), DisplayTier::Hot);
        assert_eq!(display_tier(4, 5), DisplayTier::Hot);
        assert_eq!(display_tier(3, 5), DisplayTier::Popular);
        assert_eq!(display_tier(2, 5), DisplayTier::Normal);
        assert_eq!(display_tier(1, 5), DisplayTier::Cool);
        assert_eq!(display_tier(0, 5), DisplayTier::Cool);
        assert_eq!(display_tier(0, 0), DisplayTier::Cool);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(DisplayTier::Hot.as_str(), "hot");
        assert_eq!(DisplayTier::Cool.as_str(), "cool");
    }
}
