#![no_main]
use libfuzzer_sys::fuzz_target;
use vmdl::{decode, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let first_decode = decode(input);
        let encoded = encode(&first_decode);
        let second_encode = encode(&decode(&encoded));
        // Keys or values that do not survive the line format may change once,
        // after which the text must be stable.
        let third_encode = encode(&decode(&second_encode));
        if second_encode != third_encode {
            panic!(
                "VMDL re-encoding not stable!\nInput: {:?}\nSecond: {:?}\nThird: {:?}",
                input, second_encode, third_encode
            );
        }
    }
});
