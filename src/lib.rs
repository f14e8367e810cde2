//! Ordered key/value map backed by a [left-leaning red-black tree][llrb].
//!
//! The map keeps its entries sorted under an injected [`Comparator`]
//! (defaulting to the key type's `Ord`), which makes the order-derived
//! lookups — minimum, maximum, ceiling, floor, strict successor and
//! strict predecessor — and the ordered removals logarithmic.
//!
//! ```
//! use llrb_treemap::TreeMap;
//!
//! let mut map: TreeMap<String, u64> = TreeMap::new();
//! map.put("bravo".to_string(), 2).unwrap();
//! map.put("alpha".to_string(), 1).unwrap();
//!
//! assert_eq!(map.get(&"alpha".to_string()), Ok(1));
//! assert_eq!(map.ceiling(&"aztec".to_string()).unwrap().0, "bravo");
//!
//! let (key, value) = map.poll_first().unwrap();
//! assert_eq!((key.as_str(), value), ("alpha", 1));
//! ```
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

mod depth;
mod error;
mod order;
mod treemap;

pub use crate::depth::Depth;
pub use crate::error::TreeMapError;
pub use crate::order::{Comparator, Descending, NaturalOrder};
pub use crate::treemap::{Stats, TreeMap};
