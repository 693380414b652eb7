//! Scroll progress normalization

use crate::scroll::ScrollOffset;

/// Fraction of the scrollable distance already scrolled, in `[0, 1]`
///
/// `scrollable_height` is the document height minus the viewport height.
/// A page with nothing to scroll reports `1.0` (the whole page is in
/// view). Overscroll past either end is clamped.
pub fn scroll_progress(offset: ScrollOffset, scrollable_height: f64) -> f64 {
    if !scrollable_height.is_finite() {
        return 0.0;
    }
    if scrollable_height <= 0.0 {
        return 1.0;
    }

    let ratio = offset.get() / scrollable_height;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// CSS `transform` value for a progress bar anchored at the left edge
pub fn progress_transform(progress: f64) -> String {
    format!("scaleX({:.4})", progress.clamp(0.0, 1.0))
}

/// CSS `transform` that lags content behind the scroll for a parallax feel
///
/// `rate` is the fraction of the scroll distance the content moves down;
/// `0.0` pins it to the page, `1.0` pins it to the viewport.
pub fn parallax_transform(offset: ScrollOffset, rate: f64) -> String {
    let shift = offset.get() * rate.clamp(0.0, 1.0);
    format!("translateY({:.1}px)", shift)
}
