pub const KITCHEN_SINK: &str =
    include_str!("../../src/tests/fixtures/kitchen_sink.graphql");

pub mod generated;
