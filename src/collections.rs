use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub(crate) use rustc_hash::FxHashSet;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order is kept, so indices stay stable for the lifetime of a search
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
