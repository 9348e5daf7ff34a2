use serde::{Deserialize, Serialize};

///Configuration of the [`HullBuilder`](crate::quickhull::HullBuilder)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HullConfig {
    ///Minimum number of candidate points in a recursion step before its two branches are evaluated in parallel.
    ///If undefined, the hull is always built sequentially.
    ///Has no effect without the `parallel` feature.
    pub parallel_threshold: Option<usize>,
}

impl HullConfig {
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: None,
        }
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: Some(4096),
        }
    }
}
