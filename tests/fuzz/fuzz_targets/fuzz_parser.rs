#![no_main]
use libfuzzer_sys::fuzz_target;
use rpsl_parser::{parse_many, KeyGrammar, RpslParser};

fuzz_target!(|data: &[u8]| {
    if let Ok(objects) = parse_many(data) {
        for obj in &objects {
            assert!(!obj.is_empty());
            for attr in obj {
                assert!(!attr.name().is_empty());
                assert!(!attr.value().contains('\n'));
            }
        }
    }

    let parser = RpslParser::from_reader(data).with_key_grammar(KeyGrammar::Wildcard);
    let _ = parser.parse_many();
});
