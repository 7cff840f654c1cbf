#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let report = veil::analyze(data);
    for region in report.regions() {
        assert!(region.end <= data.len());
    }
});
