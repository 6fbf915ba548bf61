#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use canonical_interval_map::IntervalMap;
use std::ops::Range;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Assign(Range<u8>, u8),
    Restore(Range<u8>),
}

impl Op {
    fn apply(self, map: &mut IntervalMap<u8, u8>) {
        // Empty and backwards ranges are fine; they must do nothing.
        match self {
            Op::Assign(r, v) => map.assign(r, v),
            Op::Restore(r) => {
                let base = *map.base_value();
                map.assign(r, base)
            }
        }
    }
}

fuzz_target!(|input: (u8, Vec<Op>)| {
    let (base, ops) = input;
    let mut map = IntervalMap::new(base);

    for op in ops {
        op.apply(&mut map);
    }

    // Every stored breakpoint must mark a change in value,
    // so there are exactly as many breakpoints as changes.
    let mut previous = base;
    let mut changes = 0;
    for key in 0..=u8::MAX {
        let value = map[&key];
        if value != previous {
            changes += 1;
        }
        previous = value;
    }
    assert_eq!(map.len(), changes);
});
