//! Frame selection and layout for the scroll-scrubbed hero sequence.
//!
//! Kept free of browser types so it can be tested natively; the canvas
//! component feeds it measurements and draws whatever it returns.

/// An image sequence served as `/frames/frame_000.jpg` and onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSequence {
    pub total_frames: usize,
}

pub const HERO_SEQUENCE: FrameSequence = FrameSequence { total_frames: 58 };

impl FrameSequence {
    pub fn frame_src(&self, index: usize) -> String {
        format!("/frames/frame_{index:03}.jpg")
    }

    /// Maps scroll progress in `[0, 1]` to a frame index. Out-of-range and
    /// NaN progress are clamped.
    pub fn frame_for_progress(&self, progress: f64) -> usize {
        if self.total_frames == 0 {
            return 0;
        }
        let progress = clamp_unit(progress);
        let index = (progress * self.total_frames as f64).floor() as usize;
        index.min(self.total_frames - 1)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// How far the visitor has scrolled through a tall container.
///
/// `container_top` is the container's top edge relative to the viewport
/// (negative once scrolled past), `container_height` its full height.
pub fn scroll_progress(container_top: f64, container_height: f64, viewport_height: f64) -> f64 {
    let scrollable = container_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp_unit(-container_top / scrollable)
}

/// Destination rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales an image to cover the viewport, like `object-fit: cover`,
/// centring the overflow.
pub fn cover_fit(image_width: f64, image_height: f64, view_width: f64, view_height: f64) -> DrawRect {
    if image_width <= 0.0 || image_height <= 0.0 || view_width <= 0.0 || view_height <= 0.0 {
        return DrawRect {
            x: 0.0,
            y: 0.0,
            width: view_width.max(0.0),
            height: view_height.max(0.0),
        };
    }

    let image_ratio = image_width / image_height;
    let view_ratio = view_width / view_height;

    if image_ratio > view_ratio {
        let width = view_height * image_ratio;
        DrawRect {
            x: (view_width - width) / 2.0,
            y: 0.0,
            width,
            height: view_height,
        }
    } else {
        let height = view_width / image_ratio;
        DrawRect {
            x: 0.0,
            y: (view_height - height) / 2.0,
            width: view_width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths_are_zero_padded() {
        assert_eq!(HERO_SEQUENCE.frame_src(0), "/frames/frame_000.jpg");
        assert_eq!(HERO_SEQUENCE.frame_src(7), "/frames/frame_007.jpg");
        assert_eq!(HERO_SEQUENCE.frame_src(57), "/frames/frame_057.jpg");
    }

    #[test]
    fn progress_maps_to_frames() {
        let seq = HERO_SEQUENCE;
        assert_eq!(seq.frame_for_progress(0.0), 0);
        assert_eq!(seq.frame_for_progress(0.5), 29);
        assert_eq!(seq.frame_for_progress(0.999), 57);
        assert_eq!(seq.frame_for_progress(1.0), 57);
        assert_eq!(seq.frame_for_progress(1.7), 57);
        assert_eq!(seq.frame_for_progress(-0.3), 0);
        assert_eq!(seq.frame_for_progress(f64::NAN), 0);
    }

    #[test]
    fn empty_sequence_stays_at_zero() {
        assert_eq!(FrameSequence { total_frames: 0 }.frame_for_progress(0.8), 0);
    }

    #[test]
    fn scroll_progress_clamps() {
        // 400vh container in an 800px viewport: 2400px of travel
        assert_eq!(scroll_progress(0.0, 3200.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-1200.0, 3200.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-5000.0, 3200.0, 800.0), 1.0);
        assert_eq!(scroll_progress(300.0, 3200.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-100.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn cover_fit_wide_image_crops_sides() {
        let rect = cover_fit(1920.0, 1080.0, 800.0, 800.0);
        assert_eq!(rect.height, 800.0);
        assert!((rect.width - 800.0 * 1920.0 / 1080.0).abs() < 1e-9);
        assert!((rect.x - (800.0 - rect.width) / 2.0).abs() < 1e-9);
        assert!(rect.x < 0.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn cover_fit_tall_image_crops_top_and_bottom() {
        let rect = cover_fit(1000.0, 2000.0, 1600.0, 900.0);
        assert_eq!(rect.width, 1600.0);
        assert_eq!(rect.height, 3200.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, (900.0 - 3200.0) / 2.0);
    }

    #[test]
    fn cover_fit_degenerate_inputs_fill_viewport() {
        let rect = cover_fit(0.0, 0.0, 1280.0, 720.0);
        assert_eq!(
            rect,
            DrawRect {
                x: 0.0,
                y: 0.0,
                width: 1280.0,
                height: 720.0
            }
        );
    }
}
