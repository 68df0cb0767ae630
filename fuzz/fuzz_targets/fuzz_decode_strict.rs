#![no_main]
use libfuzzer_sys::fuzz_target;
use vmdl::{Options, decode, decode_with_options};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Whatever strict mode accepts, lenient mode must decode identically.
        if let Ok(strict) = decode_with_options(s, &Options::strict()) {
            assert_eq!(strict, decode(s));
        }
    }
});
