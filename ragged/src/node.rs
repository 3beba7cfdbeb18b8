//! Node evaluation on top of the nested container operations.
//!
//! A node receives one nested value per input socket and returns one per output socket. The
//! [`Polyline`] node turns every innermost group of points into a wire via a [`ShapeKernel`].

mod kernel;

pub use kernel::{KernelError, LineSegment, SegmentKernel, ShapeKernel, Wire};

use log::debug;

use crate::config::PolylineConfig;
use crate::error::EvalError;
use crate::nested::{check_depth, try_map_last_level, Nested};
use crate::value::{Value, ValueKind, Vector};

/// Builds a polyline through each group of points on its single input socket.
pub struct Polyline<K> {
    kernel: K,
    config: PolylineConfig,
}

impl<K: ShapeKernel> Polyline<K> {
    pub const TITLE: &'static str = "Polyline";

    pub fn new(kernel: K) -> Self {
        Self::with_config(kernel, PolylineConfig::default())
    }

    pub fn with_config(kernel: K, config: PolylineConfig) -> Self {
        Self { kernel, config }
    }

    /// Evaluates the node for one set of socket inputs.
    ///
    /// Input socket 0 holds points at any nesting. When it is missing or holds fewer than two
    /// leaves the configured default points are used instead. The single output socket holds
    /// the input's nesting above its point groups, with one shape per group.
    pub fn eval_operation(
        &mut self,
        inputs: &[Nested<Value>],
    ) -> Result<Vec<Nested<K::Shape>>, EvalError<K::Error>> {
        let fallback;
        let points = match inputs.first() {
            Some(points) if points.leaves().nth(1).is_some() => points,
            _ => {
                debug!(
                    "{}: input has fewer than 2 points, using {} default points",
                    Self::TITLE,
                    self.config.default_points.len()
                );
                fallback = default_input(&self.config.default_points);
                &fallback
            }
        };

        let depth = check_depth(points, &self.config.limits)?;
        debug!("{}: evaluating input of depth {}", Self::TITLE, depth);

        let kernel = &mut self.kernel;
        let shapes = try_map_last_level(points, ValueKind::Vector, |group| {
            let group: Vec<Vector> = group.iter().filter_map(|v| v.as_vector()).copied().collect();
            kernel.make_polyline(&group)
        })
        .map_err(EvalError::Kernel)?;

        Ok(vec![Nested::Seq(vec![shapes])])
    }
}

fn default_input(points: &[Vector]) -> Nested<Value> {
    points
        .iter()
        .map(|p| Nested::Leaf(Value::Vector(*p)))
        .collect()
}
