use canonical_interval_map::IntervalMap;
use chrono::offset::TimeZone;
use chrono::{Duration, Utc};

fn main() {
    let people = ["Alice", "Bob", "Carol"];
    // Nobody is on call outside the roster.
    let mut roster = IntervalMap::new("nobody");

    // Set up initial roster.
    let start_of_roster = Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap();
    let mut week_start = start_of_roster;
    for _ in 0..3 {
        for person in &people {
            let next_week = week_start + Duration::weeks(1);
            roster.assign(week_start..next_week, *person);
            week_start = next_week;
        }
    }
    println!("{} handovers", roster.len());

    // Bob is covering Alice's second shift (the fourth shift overall),
    // so he now has two weeks in a row and one handover disappears.
    let fourth_shift_start = start_of_roster + Duration::weeks(3);
    let fourth_shift_end = fourth_shift_start + Duration::weeks(1);
    roster.assign(fourth_shift_start..fourth_shift_end, "Bob");
    println!("{} handovers", roster.len());

    // Check who is on call at noon each Wednesday.
    let mut day = start_of_roster - Duration::weeks(1) + Duration::days(2) + Duration::hours(12);
    while day < week_start + Duration::weeks(1) {
        println!("{}: {}", day, roster[&day]);
        day = day + Duration::weeks(1);
    }
}
