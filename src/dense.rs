use alloc::vec::Vec;
use core::ops::Range;

use super::IntervalMap;

// A simple but memory-hungry version of `IntervalMap`
// for testing: it stores the value of every key outright.
//
// Only understands `u8` keys, so that every key in the
// domain can be stored. This is just for testing, so it's fine.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DenseU8IntervalMap<V> {
    // One value per key, indexed by the key itself.
    values: Vec<V>,
}

impl<V> DenseU8IntervalMap<V>
where
    V: Eq + Clone,
{
    pub fn new(base: V) -> DenseU8IntervalMap<V> {
        DenseU8IntervalMap {
            values: (0..=u8::MAX).map(|_| base.clone()).collect(),
        }
    }

    pub fn get(&self, key: u8) -> &V {
        &self.values[usize::from(key)]
    }

    pub fn assign(&mut self, range: Range<u8>, value: V) {
        for key in range {
            self.values[usize::from(key)] = value.clone();
        }
    }

    // Number of keys whose value differs from the key
    // immediately below (or from the base, for key 0).
    //
    // A canonical `IntervalMap<u8, _>` stores exactly
    // this many breakpoints.
    pub fn changes(&self, base: &V) -> usize {
        let mut previous = base;
        let mut changes = 0;
        for value in &self.values {
            if value != previous {
                changes += 1;
            }
            previous = value;
        }
        changes
    }
}

impl<V> From<&IntervalMap<u8, V>> for DenseU8IntervalMap<V>
where
    V: Eq + Clone,
{
    fn from(interval_map: &IntervalMap<u8, V>) -> Self {
        DenseU8IntervalMap {
            values: (0..=u8::MAX)
                .map(|key| interval_map.get(&key).clone())
                .collect(),
        }
    }
}
