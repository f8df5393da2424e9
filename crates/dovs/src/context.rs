use dovs_macro_tools::{Builder, Fields};

use crate::math::FloatNum;

/// numeric settings shared by every query
///
/// ```
/// use dovs::context::{GeometryContext, GeometryContextBuilder};
///
/// let context: GeometryContext = GeometryContextBuilder::new().tolerance(1e-6).into();
/// assert_eq!(context.tolerance(), 1e-6);
/// ```
#[derive(Debug, Clone, Fields, Builder)]
#[r]
pub struct GeometryContext {
    // absolute tolerance for tangency, on-segment, vertical line and chord checks
    #[default = 1e-9]
    tolerance: FloatNum,
}
