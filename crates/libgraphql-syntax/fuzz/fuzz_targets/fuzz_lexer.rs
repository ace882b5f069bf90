#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_syntax::Source;
use libgraphql_syntax::lexer::GraphQLLexer;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Source::new(s);
    let lexer = GraphQLLexer::new(&source);
    for token in lexer.tokens().flatten() {
        assert!(token.location.end <= s.len());
    }
});
