use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use horizon_core::model::period::quarter_index;
use horizon_core::Period;
use std::cmp::Ordering;

#[test]
fn day_alignment_strips_the_time_of_day() {
    let afternoon = at(2024, 12, 10, 15, 30);

    assert_eq!(Period::Day.align_start(afternoon), at(2024, 12, 10, 0, 0));
    assert_eq!(Period::Day.next_start(afternoon), at(2024, 12, 11, 0, 0));
}

#[test]
fn week_starts_on_monday() {
    let tuesday = at(2024, 12, 10, 15, 30);
    let sunday = at(2024, 12, 15, 23, 59);

    assert_eq!(Period::Week.align_start(tuesday), at(2024, 12, 9, 0, 0));
    assert_eq!(Period::Week.align_start(sunday), at(2024, 12, 9, 0, 0));
    assert_eq!(Period::Week.next_start(tuesday), at(2024, 12, 16, 0, 0));
}

#[test]
fn quarter_alignment_snaps_to_the_opening_month() {
    assert_eq!(
        Period::Quarter.align_start(at(2024, 2, 14, 9, 0)),
        at(2024, 1, 1, 0, 0)
    );
    assert_eq!(
        Period::Quarter.align_start(at(2024, 12, 10, 15, 30)),
        at(2024, 10, 1, 0, 0)
    );
    assert_eq!(
        Period::Quarter.next_start(at(2024, 2, 14, 9, 0)),
        at(2024, 4, 1, 0, 0)
    );
    assert_eq!(
        Period::Quarter.next_start(at(2024, 12, 10, 15, 30)),
        at(2025, 1, 1, 0, 0)
    );
}

#[test]
fn year_alignment_and_successor() {
    let instant = at(2024, 12, 10, 15, 30);

    assert_eq!(Period::Year.align_start(instant), at(2024, 1, 1, 0, 0));
    assert_eq!(Period::Year.next_start(instant), at(2025, 1, 1, 0, 0));
}

#[test]
fn compare_treats_instants_in_the_same_period_as_equal() {
    let morning = at(2024, 12, 10, 8, 0);
    let evening = at(2024, 12, 10, 22, 0);

    assert_eq!(Period::Day.compare(morning, evening), Ordering::Equal);
    assert_eq!(
        Period::Day.compare(morning, at(2024, 12, 11, 8, 0)),
        Ordering::Less
    );

    assert_eq!(
        Period::Week.compare(at(2024, 12, 9, 0, 0), at(2024, 12, 15, 23, 0)),
        Ordering::Equal
    );
    assert_eq!(
        Period::Week.compare(at(2024, 12, 16, 0, 0), at(2024, 12, 15, 23, 0)),
        Ordering::Greater
    );

    assert_eq!(
        Period::Quarter.compare(at(2024, 10, 1, 0, 0), at(2024, 12, 31, 12, 0)),
        Ordering::Equal
    );
    assert_eq!(
        Period::Quarter.compare(at(2024, 12, 31, 12, 0), at(2025, 1, 1, 0, 0)),
        Ordering::Less
    );

    assert_eq!(
        Period::Year.compare(at(2024, 1, 1, 0, 0), at(2024, 12, 31, 23, 59)),
        Ordering::Equal
    );
}

#[test]
fn iso_week_groups_late_december_with_january() {
    let late_december = at(2024, 12, 30, 10, 0);
    let early_january = at(2025, 1, 2, 10, 0);

    assert_eq!(
        Period::Week.compare(late_december, early_january),
        Ordering::Equal
    );
    assert_eq!(
        Period::Week.align_start(early_january),
        at(2024, 12, 30, 0, 0)
    );
    assert_eq!(
        Period::Week.format_start(at(2024, 12, 30, 0, 0)),
        "2024-12-30 W1"
    );
}

#[test]
fn titles_follow_the_period_granularity() {
    assert_eq!(Period::Year.format_start(at(2024, 1, 1, 0, 0)), "2024");
    assert_eq!(
        Period::Quarter.format_start(at(2024, 10, 1, 0, 0)),
        "2024 Q4"
    );
    assert_eq!(
        Period::Week.format_start(at(2024, 12, 9, 0, 0)),
        "2024-12-09 W50"
    );
    assert_eq!(
        Period::Day.format_start(at(2024, 12, 10, 0, 0)),
        "2024-12-10 Tuesday"
    );
}

#[test]
fn align_start_never_moves_forward_and_is_idempotent() {
    let mut instant = at(2024, 11, 20, 13, 7);
    for _ in 0..60 {
        for period in Period::ALL {
            let aligned = period.align_start(instant);
            assert!(aligned <= instant);
            assert_eq!(period.align_start(aligned), aligned);
            assert!(period.next_start(instant) > aligned);
            if period == Period::Week {
                assert_eq!(aligned.weekday(), Weekday::Mon);
            }
        }
        instant += Duration::days(1);
    }
}

#[test]
fn wire_tags_roundtrip_and_reject_unknown_values() {
    for period in Period::ALL {
        assert_eq!(Period::from_tag(period.as_tag()), Some(period));
    }
    assert_eq!(Period::from_tag(4), None);
    assert_eq!(Period::from_tag(-1), None);
}

#[test]
fn quarter_index_maps_months_to_quarters() {
    let expected = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
    for (month, quarter) in (1..=12).zip(expected) {
        assert_eq!(quarter_index(at(2024, month, 1, 0, 0)), quarter);
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
