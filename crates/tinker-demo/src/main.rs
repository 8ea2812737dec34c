//! Bouncing-ball demo: the smallest useful scene on top of `tinker-engine`.
//!
//! Opens a 960x720 window, ticks at 60 UPS, and bounces one red circle off
//! the edges. Escape or closing the window quits.

use anyhow::Result;

use tinker_engine::device::GpuInit;
use tinker_engine::logging::{LoggingConfig, init_logging};
use tinker_engine::window::{Runtime, RuntimeConfig};

mod ball;
mod scene;

use scene::BounceDemo;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "tinker bounce".to_string(),
        ..Default::default()
    };

    log::info!("starting bounce demo");
    Runtime::run(config, GpuInit::default(), BounceDemo::default())
}
