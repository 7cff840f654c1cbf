#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let container = Bytes::copy_from_slice(data);
    let _ = veil::extract_first(&container);
    let _ = veil::extract_hidden(&container);
});
