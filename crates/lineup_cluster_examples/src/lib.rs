#![forbid(unsafe_code)]

mod support;

pub use support::{describe_items, init_tracing, random_lineups, MAP_NAMES};
