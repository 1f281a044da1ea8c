//! Move legality
//!
//! Pieces move like chess rooks without capturing on the destination: any
//! distance along a row or column, through empty cells only, onto an empty
//! cell.
//!
//! ## Module Organization
//!
//! - `validation` - Orthogonality and the composite legality predicate
//! - `sliding` - Path clearance and destination generation along rays

mod sliding;
mod validation;

pub use sliding::{is_path_clear, legal_destinations};
pub use validation::{is_legal_move, is_orthogonal_move};
