#![no_main]

use libfuzzer_sys::fuzz_target;
use publication_nodes::codec::{decode_list, encode_list};

fuzz_target!(|data: &[u8]| {
    let Ok(cell) = std::str::from_utf8(data) else { return };

    // Whatever decodes must survive a re-encode unchanged
    if let Ok(items) = decode_list(cell) {
        let again = decode_list(&encode_list(&items)).expect("re-encoded list decodes");
        assert_eq!(items, again);
    }
});
