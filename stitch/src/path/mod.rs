//! Path handling for site builds.
//!
//! # Arranging
//!
//! [`arrange`] turns an entry template path into its output name:
//!
//! ```
//! use stitch::path::arrange;
//!
//! assert_eq!(arrange("./src/blog/post.ejs").unwrap(), "./blog/post");
//! ```
//!
//! # Normalization
//!
//! [`normalize`] cleans up configured directories and include candidates
//! lexically (tilde expansion, `.`/`..` resolution) without requiring the
//! paths to exist.
//!
//! # Relationships
//!
//! [`PathRelationship`] compares two normalized paths, which is how the
//! output directory is kept from swallowing the source root.

pub mod arrange;
pub mod normalize;
pub mod relationship;

pub use arrange::{arrange, arrange_with_root, DEFAULT_ROOT_SEGMENT};
pub use relationship::PathRelationship;
