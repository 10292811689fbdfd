#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pinguard_core::{is_acceptable, validate, RuleConfiguration, Threshold};

#[derive(Arbitrary, Debug)]
struct Input {
    pin: String,
    flags: [bool; 4],
    repeated: Option<u8>,
    pairs: Option<u8>,
    min_length: u8,
    extra_length: u8,
}

fn threshold(raw: Option<u8>) -> Threshold {
    match raw {
        None => Threshold::Disabled,
        Some(0) => Threshold::Enabled,
        Some(n) => Threshold::EnabledWithThreshold(u32::from(n)),
    }
}

fuzz_target!(|input: Input| {
    let min_length = usize::from(input.min_length);
    let rules = RuleConfiguration {
        no_cross_pattern: input.flags[0],
        no_even_or_odd_series_of_numbers: input.flags[1],
        no_repeated_numbers: threshold(input.repeated),
        no_repetition_of_two_same_numbers: threshold(input.pairs),
        no_series_of_numbers: input.flags[2],
        only_numbers: input.flags[3],
        min_length,
        max_length: min_length + usize::from(input.extra_length),
    };

    // Must never panic, and must report every enabled rule
    let outcomes = validate(&input.pin, &rules);
    assert_eq!(outcomes.len(), rules.enabled_rule_count());
    assert!(outcomes.last().is_some_and(|o| o.kind.is_length_bound()));

    // Pure: a second run is identical
    let again = validate(&input.pin, &rules);
    assert_eq!(outcomes, again);
    assert_eq!(is_acceptable(&outcomes), is_acceptable(&again));
});
