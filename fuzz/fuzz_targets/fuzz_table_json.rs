#![no_main]
use libfuzzer_sys::fuzz_target;
use simscore::matching::AbbreviationTable;

/// Fuzz abbreviation table parsing and expansion.
///
/// Arbitrary JSON must either parse into a table or return an error, never
/// panic, and any parsed table must expand labels without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(table) = AbbreviationTable::from_json(s) {
            let _ = table.expand("rune scimitar", true);
            let _ = table.expand(s, false);
        }
    }
});
