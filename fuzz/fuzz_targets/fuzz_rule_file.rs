#![no_main]

use libfuzzer_sys::fuzz_target;
use pinguard_core::{validate, RuleConfiguration};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing either format must not panic
    let parsed = [
        RuleConfiguration::from_toml_str(text),
        RuleConfiguration::from_json_str(text),
    ];

    for rules in parsed.into_iter().flatten() {
        // Whatever parses must survive a TOML round-trip
        if let Ok(toml) = rules.to_toml_string() {
            let reparsed = RuleConfiguration::from_toml_str(&toml).expect("round-trip");
            assert_eq!(reparsed, rules);
        }

        if rules.check().is_ok() {
            let outcomes = validate("0000", &rules);
            assert_eq!(outcomes.len(), rules.enabled_rule_count());
        }
    }
});
