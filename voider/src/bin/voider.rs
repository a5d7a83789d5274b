// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use voider::{CLIArg, CommonResult, LOG_FILE_PATH, RenderConfig, Runner,
             try_initialize_logging_global};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG, LOG_FILE_PATH)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let render_config = RenderConfig::try_from(cli_arg)?;
    let result = Runner::new(&render_config).run(&render_config);

    if let Err(error) = &result {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not run voider", error = ?error);
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    result
}
