use thiserror::Error;

use crate::value::Vector;

/// The geometry-construction collaborator a node hands point groups to.
pub trait ShapeKernel {
    type Shape;
    type Error;

    /// Builds an open polyline through `points`, in order.
    fn make_polyline(&mut self, points: &[Vector]) -> Result<Self::Shape, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vector,
    pub end: Vector,
}

impl LineSegment {
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// A chain of connected line segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub edges: Vec<LineSegment>,
}

impl Wire {
    pub fn length(&self) -> f64 {
        self.edges.iter().map(LineSegment::length).sum()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vector> {
        self.edges
            .first()
            .map(|e| &e.start)
            .into_iter()
            .chain(self.edges.iter().map(|e| &e.end))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("a polyline needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("points {index} and {} coincide at {at}", .index + 1)]
    DegenerateSegment { index: usize, at: Vector },
}

/// Reference kernel joining consecutive points with straight segments.
///
/// Consecutive points closer than `tolerance` cannot form an edge and are rejected.
#[derive(Debug, Clone, Copy)]
pub struct SegmentKernel {
    pub tolerance: f64,
}

impl Default for SegmentKernel {
    fn default() -> Self {
        Self { tolerance: 1e-7 }
    }
}

impl ShapeKernel for SegmentKernel {
    type Shape = Wire;
    type Error = KernelError;

    fn make_polyline(&mut self, points: &[Vector]) -> Result<Wire, KernelError> {
        if points.len() < 2 {
            return Err(KernelError::TooFewPoints(points.len()));
        }

        let edges = points
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                let segment = LineSegment {
                    start: pair[0],
                    end: pair[1],
                };
                if segment.length() < self.tolerance {
                    Err(KernelError::DegenerateSegment {
                        index,
                        at: pair[0],
                    })
                } else {
                    Ok(segment)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Wire { edges })
    }
}
