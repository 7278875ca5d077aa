// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_cmdr::{CLIArg, handle_mdj_command, ui_str};
use r3bl_jump::{CommonResult, TracingConfig, WriterConfig, ok,
                setup_default_miette_global_report_handler,
                tracing_config_options::DEFAULT_LOG_FILE_NAME,
                try_initialize_logging_global};

#[tokio::main]
async fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ui_str::ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(TracingConfig {
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            level_filter: cli_arg.global_options.log_level,
        })
        .ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = handle_mdj_command(&cli_arg).await?;
    tracing::debug!(message = "mdj result", result = %result);

    let exit_code = result.exit_code();
    if exit_code != 0 {
        eprintln!("{result}");
        std::process::exit(exit_code);
    }

    if !result.to_string().is_empty() {
        println!("{result}");
    }

    ok!()
}
