use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub use rustc_hash::{FxHashMap, FxHashSet};


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Iteration follows insertion order, so the first relaxation of each cell is kept in order
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
