//! Aspect-preserving bounding-box arithmetic.
//!
//! The fit runs as two sequential passes: the width constraint first, then the
//! height constraint against the already-scaled result. Each pass truncates the
//! dependent axis toward zero. Collapsing the passes into a single min-ratio
//! scale changes which axis gets truncated and yields different sizes for some
//! inputs, so the order here is load-bearing.

/// Width and height of a grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width pass: if `max_width` is set (non-zero) and exceeded, scale both
    /// axes by `max_width / width`, truncating the height.
    pub fn constrain_width(self, max_width: u32) -> Self {
        if max_width == 0 || self.width <= max_width {
            return self;
        }

        let ratio = max_width as f64 / self.width as f64;
        Self {
            width: max_width,
            height: (self.height as f64 * ratio) as u32,
        }
    }

    /// Height pass: if `max_height` is set (non-zero) and exceeded, scale both
    /// axes by `max_height / height`, truncating the width.
    pub fn constrain_height(self, max_height: u32) -> Self {
        if max_height == 0 || self.height <= max_height {
            return self;
        }

        let ratio = max_height as f64 / self.height as f64;
        Self {
            width: (self.width as f64 * ratio) as u32,
            height: max_height,
        }
    }
}

/// Compute the size a `width` x `height` grid should be resampled to so it
/// fits within `max_width` x `max_height`. A zero maximum leaves that axis
/// unconstrained.
///
/// Returns the input size unchanged when no pass applies.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> Dimensions {
    Dimensions::new(width, height)
        .constrain_width(max_width)
        .constrain_height(max_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_limits() {
        assert_eq!(fit_dimensions(4000, 3000, 0, 0), Dimensions::new(4000, 3000));
    }

    #[test]
    fn test_width_only() {
        assert_eq!(fit_dimensions(4000, 3000, 1920, 0), Dimensions::new(1920, 1440));
    }

    #[test]
    fn test_width_pass_satisfies_height() {
        // 1920x960 already fits under 1000, no height pass
        assert_eq!(
            fit_dimensions(4000, 2000, 1920, 1000),
            Dimensions::new(1920, 960)
        );
    }

    #[test]
    fn test_height_only() {
        assert_eq!(fit_dimensions(3000, 4000, 0, 1000), Dimensions::new(750, 1000));
    }

    #[test]
    fn test_height_pass_after_width_pass() {
        // Width pass: 4000x4000 -> 2000x2000, height pass: -> 1000x1000
        assert_eq!(
            fit_dimensions(4000, 4000, 2000, 1000),
            Dimensions::new(1000, 1000)
        );
    }

    #[test]
    fn test_height_pass_rescales_truncated_width() {
        // Width pass: 1000x999 -> 300x299 (299.7 truncated)
        // Height pass: 300 * 100/299 = 100.33 -> 100
        // A single min-ratio scale lands on the same size here
        assert_eq!(fit_dimensions(1000, 999, 300, 100), Dimensions::new(100, 100));
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 1000 * (640 / 1920) = 333.33 and 2000 * (640 / 1920) = 666.66
        assert_eq!(fit_dimensions(1920, 1000, 640, 0), Dimensions::new(640, 333));
        assert_eq!(fit_dimensions(1920, 2000, 640, 0), Dimensions::new(640, 666));
    }

    #[test]
    fn test_already_within_limits() {
        assert_eq!(
            fit_dimensions(800, 600, 1920, 1080),
            Dimensions::new(800, 600)
        );
    }

    #[test]
    fn test_exactly_at_limits() {
        assert_eq!(
            fit_dimensions(1920, 1080, 1920, 1080),
            Dimensions::new(1920, 1080)
        );
    }

    #[test]
    fn test_passes_are_individually_idempotent() {
        let dims = Dimensions::new(4000, 3000).constrain_width(1920);
        assert_eq!(dims.constrain_width(1920), dims);

        let dims = Dimensions::new(3000, 4000).constrain_height(1000);
        assert_eq!(dims.constrain_height(1000), dims);
    }

    #[test]
    fn test_sequential_passes_differ_from_min_ratio() {
        // Width pass: 641x513 -> 640x512 (512.2 truncated)
        // Height pass: 640 * 480/512 = 600 exactly
        // A single min(640/641, 480/513) scale would give 599x480
        assert_eq!(fit_dimensions(641, 513, 640, 480), Dimensions::new(600, 480));

        // Width pass: 641x604 -> 640x603, height pass: 640 * 480/603 = 509.45 -> 509
        // A single scale would truncate the height to 479
        assert_eq!(fit_dimensions(641, 604, 640, 480), Dimensions::new(509, 480));
    }

    #[test]
    fn test_height_pass_sees_width_pass_output() {
        let two_step = Dimensions::new(641, 513).constrain_width(640);
        assert_eq!(two_step, Dimensions::new(640, 512));
        assert_eq!(two_step.constrain_height(480), fit_dimensions(641, 513, 640, 480));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
