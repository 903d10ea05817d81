use std::sync::Once;

static INIT: Once = Once::new();

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

pub fn init_tracer() {
    INIT.call_once(|| {
        let fmt = tracing_subscriber::fmt::layer().with_test_writer();
        tracing_subscriber::registry()
            .with(LevelFilter::DEBUG)
            .with(fmt)
            .try_init()
            .unwrap();
    });
}
