use crate::value::Vector;

/// Bounds applied to untrusted nested input before it is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl Limits {
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

/// Settings for the [`crate::node::Polyline`] node.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineConfig {
    pub limits: Limits,
    /// Points used when the input socket holds fewer than two leaves.
    pub default_points: Vec<Vector>,
}

impl Default for PolylineConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            default_points: vec![Vector::new(0.0, 0.0, 0.0), Vector::new(10.0, 10.0, 0.0)],
        }
    }
}
