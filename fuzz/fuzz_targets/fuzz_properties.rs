#![no_main]

use libfuzzer_sys::fuzz_target;
use modinstall::config::Properties;

fuzz_target!(|data: &[u8]| {
    // Any byte sequence is a valid ISO-8859-1 properties file.
    let props = Properties::from_bytes(data);
    let _ = props.get("modsDir");

    let lines = data.split(|&b| b == b'\n').count();
    assert!(props.len() <= lines);
});
