//! Rewrite inline markdown links as footnote anchors.
//!
//! `[text](url)` becomes `text [^anchor1]`, and every distinct URL gets one trailing
//! `[^anchor1]: url` definition, in the order it was first seen.
//!
//! ```
//! let out = linknotes::transform("see [the docs](https://docs.rs) and [again](https://docs.rs)");
//! assert_eq!(
//!     out,
//!     "see the docs [^anchor1] and again [^anchor1]\n\n[^anchor1]: https://docs.rs"
//! );
//! ```

pub mod scan;
pub mod transform;
pub mod types;

#[cfg(feature = "pulldown")]
pub mod adapters;

pub use scan::{Links, find_link, links};
pub use transform::*;
pub use types::*;
