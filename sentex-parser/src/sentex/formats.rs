//! Output formats for parse trees
//!
//!     - treeviz: one line per node, connector glyphs, leaves as the last line of a branch
//!     - tag: XML-like nesting
//!     - json / yaml: serde serialization of the tree
//!
//!     All of them are registered in [FormatRegistry::with_defaults].

pub mod data;
pub mod registry;
pub mod tag;
pub mod treeviz;

pub use data::{JsonFormatter, YamlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{serialize_tree, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
