#![no_main]

use csv2tsv::{convert, Direction, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // bit 0 of data[0]: reverse direction
    let direction = Direction::from_reverse(data[0] & 0x01 != 0);
    let mut out = Vec::new();
    match convert(&data[1..], &mut out, direction) {
        Ok(stats) => {
            let lines = out.iter().filter(|&&b| b == b'\n').count() as u64;
            assert!(lines >= stats.records, "fewer line breaks than records");
        }
        Err(Error::Parse { .. }) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
    }
});
