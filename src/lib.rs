//! # modmap
//!
//! Static analysis of Python module coupling and call structure.
//!
//! modmap walks a source tree, parses each file into a syntax tree and
//! extracts two relationships per module: the ordered set of imported
//! modules and a mapping from each locally defined function to the
//! ordered calls it makes. Per-file records aggregate into a sorted,
//! queryable project model rendered as text or JSON.
//!
//! Only syntactic names are recorded: there is no symbol resolution,
//! no cross-file call-graph linking and no type analysis.

pub mod core;
pub mod formatters;
pub mod parsers;
pub mod stats;
