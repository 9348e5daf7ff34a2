mod baseline;
mod bounds;
mod point;

#[doc(inline)]
pub use baseline::Baseline;
#[doc(inline)]
pub use bounds::Bounds;
#[doc(inline)]
pub use point::Point;
