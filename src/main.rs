use anyhow::{Context, Result, bail};
use form_ui::{Config, KeyboardFormApp};
use log::info;
use platform::WindowOptions;
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn print_help() {
    println!(
        r#"vkeyboard {} - form with a draggable on-screen keyboard

USAGE:
    vkeyboard [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    -c, --config <PATH>     Read settings from PATH instead of the default location

ENVIRONMENT:
    RUST_LOG                Log filter (default: warn)"#,
        env!("CARGO_PKG_VERSION")
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("vkeyboard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config_path: Option<PathBuf> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => bail!("unknown argument: {other} (see --help)"),
        }
    }

    let config = match config_path {
        Some(path) => Config::load_or_default(&path),
        None => Config::load(),
    };

    info!("vkeyboard starting...");

    let options = WindowOptions {
        title: config.window.title.clone(),
        width: config.window.width,
        height: config.window.height,
    };
    let app = KeyboardFormApp::from_config(&config);

    platform::run(app, options).context("window loop failed")?;
    Ok(())
}
