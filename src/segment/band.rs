/// Half-open pixel interval `[start, end)` along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start: u32,
    pub end: u32,
}

impl Band {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which path produced a sheet's row bands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowBands {
    /// Projection found exactly the expected number of rows
    Detected(Vec<Band>),
    /// Projection disagreed; the height was split evenly instead
    FallbackUsed(Vec<Band>),
}

impl RowBands {
    pub fn bands(&self) -> &[Band] {
        match self {
            RowBands::Detected(bands) | RowBands::FallbackUsed(bands) => bands,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RowBands::FallbackUsed(_))
    }
}

/// Locate runs in a projection profile.
///
/// An entry belongs to a run while it exceeds `density`. A run closes on the
/// first entry at or below `density` and is kept only if it is longer than
/// `min_len`. A run still open at the end of the profile is dropped.
pub fn find_bands(profile: &[u32], density: u32, min_len: u32) -> Vec<Band> {
    let mut bands = Vec::new();
    let mut start: Option<u32> = None;

    for (pos, &count) in (0u32..).zip(profile) {
        if count > density {
            if start.is_none() {
                start = Some(pos);
            }
        } else if let Some(s) = start.take()
            && pos - s > min_len
        {
            bands.push(Band::new(s, pos));
        }
    }

    bands
}

/// Split `length` pixels into `count` equal bands of `length / count` each
pub fn equal_bands(length: u32, count: u32) -> Vec<Band> {
    let size = length.checked_div(count).unwrap_or(0);
    (0..count)
        .map(|i| Band::new(i * size, (i + 1) * size))
        .collect()
}

/// Keep the last `max` bands, dropping from the left
pub fn select_frames(bands: &[Band], max: usize) -> &[Band] {
    &bands[bands.len().saturating_sub(max)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(runs: &[(usize, u32)]) -> Vec<u32> {
        runs.iter()
            .flat_map(|&(len, value)| std::iter::repeat_n(value, len))
            .collect()
    }

    #[test]
    fn test_find_bands_basic() {
        let p = profile(&[(5, 0), (30, 50), (10, 0), (25, 11), (3, 0)]);
        assert_eq!(
            find_bands(&p, 10, 20),
            vec![Band::new(5, 35), Band::new(45, 70)]
        );
    }

    #[test]
    fn test_density_threshold_is_strict() {
        // Exactly at the threshold never opens a band
        let p = profile(&[(2, 0), (40, 10), (2, 0)]);
        assert!(find_bands(&p, 10, 20).is_empty());
    }

    #[test]
    fn test_min_length_is_strict() {
        let p = profile(&[(1, 0), (20, 99), (1, 0), (21, 99), (1, 0)]);
        assert_eq!(find_bands(&p, 10, 20), vec![Band::new(22, 43)]);
    }

    #[test]
    fn test_band_open_at_end_is_dropped() {
        let p = profile(&[(3, 0), (30, 50), (5, 0), (40, 50)]);
        assert_eq!(find_bands(&p, 10, 20), vec![Band::new(3, 33)]);
    }

    #[test]
    fn test_band_starting_at_zero() {
        let p = profile(&[(25, 50), (1, 0)]);
        assert_eq!(find_bands(&p, 10, 20), vec![Band::new(0, 25)]);
    }

    #[test]
    fn test_empty_profile() {
        assert!(find_bands(&[], 10, 20).is_empty());
    }

    #[test]
    fn test_equal_bands() {
        let bands = equal_bands(803, 8);
        assert_eq!(bands.len(), 8);
        for (i, band) in (0u32..).zip(&bands) {
            assert_eq!(*band, Band::new(i * 100, (i + 1) * 100));
        }
    }

    #[test]
    fn test_equal_bands_shorter_than_count() {
        let bands = equal_bands(5, 8);
        assert_eq!(bands.len(), 8);
        assert!(bands.iter().all(Band::is_empty));
    }

    #[test]
    fn test_select_frames_keeps_last() {
        let bands: Vec<_> = (0..9).map(|i| Band::new(i * 10, i * 10 + 5)).collect();
        let kept = select_frames(&bands, 6);
        assert_eq!(kept, &bands[3..]);
    }

    #[test]
    fn test_select_frames_short_row_untouched() {
        let bands: Vec<_> = (0..4).map(|i| Band::new(i * 10, i * 10 + 5)).collect();
        assert_eq!(select_frames(&bands, 6), &bands[..]);
        assert!(select_frames(&[], 6).is_empty());
    }
}
