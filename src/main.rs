#![deny(rust_2018_compatibility)]

use gl_objects::{
    config::DemoConfig,
    demos::{self, DemoArgs},
};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = DemoArgs::parse(std::env::args().skip(1)).and_then(|args| {
        let config = match &args.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };
        demos::run(args.demo, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
