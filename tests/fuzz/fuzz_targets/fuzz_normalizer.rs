#![no_main]
use libfuzzer_sys::fuzz_target;
use rpsl_parser::parser::normalizer::normalize_value;

fuzz_target!(|data: &[u8]| {
    let once = normalize_value(data);
    assert!(!once.contains(&b'\n'));
    assert!(!once.contains(&b'#'));
    assert_eq!(normalize_value(&once), once);
});
