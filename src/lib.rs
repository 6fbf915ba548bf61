/*!
[`IntervalMap`] represents a piecewise-constant function over an ordered
key domain. Rather than storing a value per key, or a value per stored range,
it stores only the _breakpoints_: the keys at which the function's value
changes, together with the value that holds from that key onwards.

Every key below the first breakpoint maps to the _base value_ supplied at
construction, so a fresh map is the constant function.


# Canonical form

Assigning a value over a half-open range `start..end` always leaves the map
in its unique minimal representation:

- no breakpoint carries the same value as the breakpoint before it, and
- the first breakpoint never carries the base value.

This means two maps representing the same function are always equal
(`==`), and the number of breakpoints is exactly the number of points
where the function changes.


# Example

```rust
use canonical_interval_map::IntervalMap;

let mut map = IntervalMap::new('A');

map.assign(2..4, 'Z');
map.assign(6..8, 'Z');
assert_eq!(map.len(), 4);
assert_eq!(map[&5], 'A');

// Filling the gap collapses both intervals into one.
map.assign(4..6, 'Z');
assert_eq!(map.len(), 2);
assert_eq!(map[&5], 'Z');

// Empty ranges are ignored.
map.assign(3..3, 'X');
assert_eq!(map[&3], 'Z');
```


## Crate features

By default this crate has no dependencies on other crates.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`IntervalMap`].

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
canonical-interval-map = { version = "0.1", features = ["serde1"] }
```

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature.


## Building without the Rust standard library

This crate links the `core` and `alloc` crates, but not `std`,
so it works anywhere a global allocator is available.


[`IntervalMap`]: crate::IntervalMap

*/

#![no_std]
extern crate alloc;

// Property-testing macros expand to `format!` and friends.
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod map;

#[cfg(test)]
mod dense;

pub use map::IntervalMap;
