#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use canonical_interval_map::IntervalMap;
use std::ops::Range;

#[derive(Clone, Debug, Arbitrary)]
struct Assignment {
    range: Range<u8>,
    value: u8,
}

fuzz_target!(|input: (u8, Vec<Assignment>)| {
    let (base, assignments) = input;

    let mut map = IntervalMap::new(base);
    // One value per key; the obviously-correct version.
    let mut dense = [base; 256];

    for Assignment { range, value } in assignments {
        let before = map.clone();
        map.assign(range.clone(), value);

        if range.is_empty() {
            assert_eq!(map, before);
        }
        for key in range {
            dense[usize::from(key)] = value;
        }

        for key in 0..=u8::MAX {
            assert_eq!(map[&key], dense[usize::from(key)]);
        }
    }
});
