//! Properties that hold for every valid numlist string, checked through the public API only.

use std::num::NonZero;
use std::thread;

use itertools::Itertools;
use numlist::{Error, ErrorMode, Expander, Item, Output, OutputFormat, ParsedRange};

const VALID_INPUTS: &[&str] = &[
    "1-3,5,7-9",
    "1-3,3-5",
    "5-1",
    "1-10:3",
    "10..1:4, 2to6:2 , 100~98",
    "0,0,0-0:7",
    "42",
];

fn sorted_items(input: &str) -> Vec<Item> {
    numlist::parse(input).unwrap()
}

#[test]
fn reordering_parts_does_not_change_result() {
    for input in VALID_INPUTS {
        let expected = sorted_items(input);
        let parts = input.split(',').collect_vec();

        for permutation in parts.iter().permutations(parts.len()) {
            let reordered = permutation.into_iter().join(",");
            assert_eq!(sorted_items(&reordered), expected, "{reordered}");
        }
    }
}

#[test]
fn duplicating_a_part_does_not_change_result() {
    for input in VALID_INPUTS {
        let expected = sorted_items(input);

        for part in input.split(',') {
            let duplicated = format!("{input},{part}");
            assert_eq!(sorted_items(&duplicated), expected, "{duplicated}");
        }
    }
}

#[test]
fn formatting_is_idempotent() {
    for input in VALID_INPUTS {
        for format in ["list", "csv"] {
            assert_eq!(
                numlist::expand(Some(input), format).unwrap(),
                numlist::expand(Some(input), format).unwrap()
            );
        }
    }
}

#[test]
fn csv_round_trips_through_single_number_parts() {
    for input in VALID_INPUTS {
        let Some(Output::Csv(csv)) = numlist::expand(Some(input), "csv").unwrap() else {
            panic!("csv format must produce csv output");
        };

        let reparsed = csv
            .split(numlist::PART_SEPARATOR)
            .map(|part| {
                let range = numlist::parse_part(part).unwrap();
                assert_eq!(range.start, range.end, "{part} must be a single number");
                range.start
            })
            .collect_vec();

        assert_eq!(reparsed, sorted_items(input));
    }
}

#[test]
fn emit_round_trips() {
    for input in VALID_INPUTS {
        let items = sorted_items(input);
        assert_eq!(sorted_items(&numlist::emit(&items)), items);
    }
}

#[test]
fn set_output_matches_list_output() {
    for input in VALID_INPUTS {
        let set = numlist::expand(Some(input), "set").unwrap().unwrap();
        let set = set.as_set().unwrap();

        assert_eq!(set.iter().copied().sorted().collect_vec(), sorted_items(input));
    }
}

#[test]
fn documented_examples() {
    assert_eq!(
        numlist::expand(Some("1-3,5,7-9"), "list").unwrap(),
        Some(Output::List(vec![1, 2, 3, 5, 7, 8, 9]))
    );
    assert_eq!(
        numlist::expand(Some("1-3,3-5"), "csv").unwrap(),
        Some(Output::Csv("1,2,3,4,5".to_string()))
    );
    assert_eq!(sorted_items("5-1"), [1, 2, 3, 4, 5]);
    assert_eq!(sorted_items("1-10:3"), [1, 4, 7, 10]);
    assert_eq!(sorted_items("1-5:2:3"), [1, 3, 5]);
}

#[test]
fn lenient_and_strict_disagree_on_invalid_parts() {
    let input = Some("1-a,2,4-b,5");

    let strict = Expander::builder().mode(ErrorMode::Strict).build();
    let error = strict.expand(input).unwrap_err();
    assert_eq!(error.part(), Some("1-a"));
    assert!(error.to_string().contains("1-a"));

    let lenient = Expander::builder().mode(ErrorMode::Lenient).build();
    let expansion = lenient.expand(input).unwrap().unwrap();
    assert_eq!(expansion.output.as_list(), Some([2, 5].as_slice()));
    assert_eq!(
        expansion.rejected,
        [
            Error::InvalidRangeBounds {
                part: "1-a".to_string()
            },
            Error::InvalidRangeBounds {
                part: "4-b".to_string()
            },
        ]
    );
}

#[test]
fn lenient_still_rejects_unsupported_format() {
    // The format is chosen by parsing its name, so this never reaches the expander.
    assert!(matches!(
        "yaml".parse::<OutputFormat>(),
        Err(Error::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        numlist::expand(Some("1,x"), "yaml"),
        Err(Error::UnsupportedFormat { .. })
    ));
}

#[test]
fn absent_input_is_absent_for_every_format() {
    for format in ["list", "set", "csv"] {
        assert_eq!(numlist::expand(None, format).unwrap(), None);
    }
}

#[test]
fn empty_input_is_empty_result() {
    for input in ["", "   ", ",", " , ,, "] {
        assert_eq!(
            numlist::expand(Some(input), "list").unwrap(),
            Some(Output::List(vec![]))
        );
        assert_eq!(
            numlist::expand(Some(input), "csv").unwrap(),
            Some(Output::Csv(String::new()))
        );
        assert!(
            numlist::expand(Some(input), "set")
                .unwrap()
                .unwrap()
                .as_set()
                .unwrap()
                .is_empty()
        );
    }
}

#[test]
fn expanders_are_reentrant_across_threads() {
    let expander = Expander::builder()
        .lenient()
        .output_format(OutputFormat::Csv)
        .build();

    thread::scope(|s| {
        let handles = (0..4_u64)
            .map(|offset| {
                s.spawn(move || {
                    let input = format!("{offset}-{}, x", offset + 2);
                    expander.expand(Some(input.as_str())).unwrap().unwrap()
                })
            })
            .collect_vec();

        for (offset, handle) in handles.into_iter().enumerate() {
            let expansion = handle.join().unwrap();
            let expected = (offset..=offset + 2).join(",");

            assert_eq!(expansion.output.as_csv(), Some(expected.as_str()));
            assert_eq!(expansion.rejected.len(), 1);
        }
    });
}

#[test]
fn parsed_ranges_can_be_built_and_expanded_outside_the_parser() {
    let step = NonZero::new(2).unwrap();
    let range = ParsedRange::new(9, 1, step);

    assert_eq!(numlist::parse_part("9-1:2").unwrap(), range);
    assert_eq!(range.items().collect_vec(), [9, 7, 5, 3, 1]);
}
