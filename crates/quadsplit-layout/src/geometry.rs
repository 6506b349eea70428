//! Pointer-to-ratio conversion and its inverse, handle placement.

use quadsplit_common::{Point, Size, SplitAxis};

/// Round `coordinate` to the nearest multiple of `quantum`.
///
/// A zero, negative or non-finite quantum leaves the coordinate unchanged.
pub fn quantize(coordinate: f64, quantum: f64) -> f64 {
    if quantum > 0.0 && quantum.is_finite() {
        (coordinate / quantum).round() * quantum
    } else {
        coordinate
    }
}

/// Convert a pointer coordinate into an unclamped ratio of `dimension`.
///
/// The coordinate is snapped first. Returns 0 for a non-positive dimension
/// instead of dividing by zero.
pub fn pointer_to_ratio(pointer: f64, dimension: f64, quantum: f64) -> f64 {
    if !(dimension > 0.0) {
        return 0.0;
    }
    let ratio = quantize(pointer, quantum) / dimension;
    if ratio.is_nan() {
        0.0
    } else {
        ratio
    }
}

/// Container-local position of the drag handle.
///
/// Along `axis` the handle sits `primary × dimension` from the leading edge
/// when `from_leading` is set, otherwise `(1 − primary) × dimension` (that
/// is, measured from the trailing edge). The cross-axis coordinate is always
/// `secondary × cross dimension`.
pub fn handle_position(
    primary: f64,
    secondary: f64,
    axis: SplitAxis,
    from_leading: bool,
    container: Size,
) -> Point {
    let main = container.along(axis);
    let cross = container.along(axis.complement());
    let main_pos = if from_leading {
        primary * main
    } else {
        (1.0 - primary) * main
    };
    let cross_pos = secondary * cross;
    match axis {
        SplitAxis::Horizontal => Point::new(main_pos, cross_pos),
        SplitAxis::Vertical => Point::new(cross_pos, main_pos),
    }
}
