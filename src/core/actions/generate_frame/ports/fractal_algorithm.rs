use crate::core::data::point::Point;

/// Per-pixel computation fanned out by the frame generators.
///
/// Implementations must be pure: the result may depend only on `pixel` and
/// state fixed at construction, so rows can be computed in any order.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
