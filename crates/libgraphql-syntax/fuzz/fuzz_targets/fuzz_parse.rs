#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_syntax::Source;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Source::new(s);
    match libgraphql_syntax::parse(&source) {
        Ok(document) => {
            for definition in &document.definitions {
                assert!(definition.location().slice(s).is_some());
            }
        },
        Err(error) => {
            let _ = error.format_detailed(Some(s));
        },
    }
});
