use alloc::collections::BTreeMap;
use core::fmt::{self, Debug};
use core::ops::{Bound, Index, Range};

#[cfg(feature = "serde1")]
use alloc::vec::Vec;
#[cfg(feature = "serde1")]
use core::marker::PhantomData;
#[cfg(feature = "serde1")]
use serde::{
    de::{self, Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, SerializeTuple, Serializer},
};

/// A piecewise-constant function from keys to values, stored as
/// the set of keys where the value changes.
///
/// A breakpoint at key `k` with value `v` means that every key in
/// `k..next` maps to `v`, where `next` is the key of the following
/// breakpoint (or there is no upper limit if `k` is the last one).
/// Keys below the first breakpoint map to the base value.
///
/// The breakpoints are always kept minimal: no breakpoint repeats
/// the value in force immediately before it.
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
    base: V,
    // Keys are where the function changes value. Invariant:
    // every stored value differs from the value in force just before it.
    btm: BTreeMap<K, V>,
}

impl<K, V> Default for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone + Default,
{
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    /// Makes a new `IntervalMap` that maps every key to `base`.
    pub fn new(base: V) -> Self {
        IntervalMap {
            base,
            btm: BTreeMap::new(),
        }
    }

    /// Returns the value that holds below the first breakpoint.
    pub fn base_value(&self) -> &V {
        &self.base
    }

    /// Returns the number of breakpoints stored in the map,
    /// i.e. the number of keys at which the value changes.
    pub fn len(&self) -> usize {
        self.btm.len()
    }

    /// Returns `true` if the map is the constant function
    /// mapping every key to the base value.
    pub fn is_empty(&self) -> bool {
        self.btm.is_empty()
    }

    /// Returns a reference to the value for the given key.
    ///
    /// This is the value of the last breakpoint at or before `key`,
    /// or the base value if there is no such breakpoint.
    pub fn get(&self, key: &K) -> &V {
        self.btm
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map_or(&self.base, |(_key, value)| value)
    }

    // The value in force immediately before `key`, ignoring
    // any breakpoint exactly at `key`.
    fn get_before(&self, key: &K) -> &V {
        self.btm
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map_or(&self.base, |(_key, value)| value)
    }

    /// Assigns `value` to every key in the half-open `range`,
    /// leaving keys outside it unchanged.
    ///
    /// If `range` is empty (i.e. `!(range.start < range.end)`)
    /// then this does nothing.
    pub fn assign(&mut self, range: Range<K>, value: V) {
        if range.is_empty() {
            return;
        }
        let Range { start, end } = range;

        // Both edges must be read before anything inside
        // the range is removed.
        let value_at_end = self.get(&end).clone();
        let value_before_start = self.get_before(&start).clone();

        // Drop every breakpoint covered by the range.
        //
        // REVISIT: `split_off` + `append` would avoid the repeated
        // searches, but `append` is linear in the size of the map.
        while let Some(covered_key) = self
            .btm
            .range((Bound::Included(&start), Bound::Excluded(&end)))
            .next()
            .map(|(covered_key, _value)| covered_key.clone())
        {
            self.btm.remove(&covered_key);
        }

        if value_at_end != value {
            // Keys from `end` onwards keep the value they had.
            self.btm.insert(end, value_at_end);
        } else {
            // The new value runs straight on past `end`, so a
            // breakpoint there would only restate it.
            self.btm.remove(&end);
        }

        if value_before_start != value {
            self.btm.insert(start, value);
        }
    }
}

impl<K, V> Index<&K> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

// We can't just derive this automatically, because the field name
// `btm` is an implementation detail. Show the breakpoints the same way
// the underlying BTreeMap does.
impl<K: Debug, V: Debug> Debug for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalMap")
            .field("base", &self.base)
            .field("breakpoints", &self.btm)
            .finish()
    }
}

impl<K, V> Extend<(Range<K>, V)> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    fn extend<T: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |(range, value)| {
            self.assign(range, value);
        })
    }
}

#[cfg(feature = "serde1")]
impl<K, V> Serialize for IntervalMap<K, V>
where
    K: Ord + Clone + Serialize,
    V: Eq + Clone + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.base)?;
        tuple.serialize_element(&SerializeBreakpoints(&self.btm))?;
        tuple.end()
    }
}

// Breakpoints go out as a sequence of `[key, value]` pairs
// rather than as a map, so that keys need not be strings.
#[cfg(feature = "serde1")]
struct SerializeBreakpoints<'a, K, V>(&'a BTreeMap<K, V>);

#[cfg(feature = "serde1")]
impl<'a, K, V> Serialize for SerializeBreakpoints<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Deserialize<'de> for IntervalMap<K, V>
where
    K: Ord + Clone + Deserialize<'de>,
    V: Eq + Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, IntervalMapVisitor::new())
    }
}

#[cfg(feature = "serde1")]
struct IntervalMapVisitor<K, V> {
    marker: PhantomData<fn() -> IntervalMap<K, V>>,
}

#[cfg(feature = "serde1")]
impl<K, V> IntervalMapVisitor<K, V> {
    fn new() -> Self {
        IntervalMapVisitor {
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Visitor<'de> for IntervalMapVisitor<K, V>
where
    K: Ord + Clone + Deserialize<'de>,
    V: Eq + Clone + Deserialize<'de>,
{
    type Value = IntervalMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("IntervalMap")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let base: V = access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let breakpoints: Vec<(K, V)> = access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        let mut interval_map = IntervalMap::new(base);
        let mut previous_key: Option<K> = None;
        for (key, value) in breakpoints {
            if previous_key.as_ref().map_or(false, |previous| *previous >= key) {
                return Err(de::Error::custom(
                    "breakpoint keys must be strictly increasing",
                ));
            }
            // Anything that merely restates the current value is dropped,
            // so hand-written input still comes out canonical.
            if *interval_map.get(&key) != value {
                interval_map.btm.insert(key.clone(), value);
            }
            previous_key = Some(key);
        }
        Ok(interval_map)
    }
}

#[cfg(feature = "quickcheck")]
impl<K, V> quickcheck::Arbitrary for IntervalMap<K, V>
where
    K: quickcheck::Arbitrary + Ord + Clone,
    V: quickcheck::Arbitrary + Eq + Clone,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Build through `assign` so that generated maps are canonical.
        let mut interval_map = IntervalMap::new(V::arbitrary(g));
        let assignments: alloc::vec::Vec<(K, K, V)> = quickcheck::Arbitrary::arbitrary(g);
        for (start, end, value) in assignments {
            interval_map.assign(start..end, value);
        }
        interval_map
    }
}
