mod config;
mod error;
mod frame;
pub mod nested;
pub mod node;
mod recursive;
mod value;

pub use config::{Limits, PolylineConfig};
pub use error::{EvalError, NestedError};
pub use frame::{expand_and_collapse, try_expand_and_collapse, MappableFrame, PartiallyApplied};
pub use nested::{
    check_depth, flatten, map_last_level, map_leaves_where, map_objects, simplify, traverse,
    traverse_kind, try_map_last_level, try_map_objects, AsSequence, Group, LeafKind, Leaves, Nested,
    NestedFrame, Traverse,
};
pub use recursive::{Collapsible, Expandable};
pub use value::{Value, ValueKind, Vector};
