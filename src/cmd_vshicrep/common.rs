use clap::*;
use vshicrep::libs::compose::{has_placeholder, Composer, PostProcess, TOOL};

pub const DEFAULT_HICREP: &str = "--h 1 --binSize 500000 --dBPMax 1000000";
pub const DEFAULT_OUT: &str = "scc/{3}_{4}.txt";

pub fn arg_hicrep() -> Arg {
    Arg::new("hicrep")
        .long("hicrep")
        .num_args(1)
        .allow_hyphen_values(true)
        .default_value(DEFAULT_HICREP)
        .help("hicrep parameters")
}

pub fn arg_hicrep_out() -> Arg {
    Arg::new("hicrep_out")
        .long("hicrep-out")
        .num_args(1)
        .default_value(DEFAULT_OUT)
        .help("Path of the SCC score files. {1}/{2} are row/col paths, {3}/{4} row/col captions")
}

pub fn arg_no_read() -> Arg {
    Arg::new("no_read")
        .long("no-read")
        .action(ArgAction::SetTrue)
        .help("Don't echo the SCC score file after hicrep finishes")
}

pub fn arg_tool() -> Arg {
    Arg::new("tool")
        .long("tool")
        .num_args(1)
        .default_value(TOOL)
        .help("The comparison program")
}

pub fn arg_program() -> Arg {
    Arg::new("program")
        .long("program")
        .num_args(1)
        .help("Program providing the scc-mean/scc-scores stages [default: this executable]")
}

pub fn arg_process(name: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(long)
        .num_args(1)
        .allow_hyphen_values(true)
        .default_value("scc-mean")
        .help(help)
}

/// Composer configured from `--tool` and `--program`
pub fn composer(args: &ArgMatches) -> anyhow::Result<Composer> {
    let tool = args.get_one::<String>("tool").unwrap();
    let program = match args.get_one::<String>("program") {
        Some(p) => p.to_string(),
        None => std::env::current_exe()?.display().to_string(),
    };
    Ok(Composer::new(tool, &program))
}

/// Reads a process token (`scc-mean`, `scc-scores`, a shell command or "")
pub fn post_process(args: &ArgMatches, name: &str) -> PostProcess {
    args.get_one::<String>(name)
        .map(|s| PostProcess::from_token(s))
        .unwrap_or_default()
}

/// Creates the directory part of the score-file template.
///
/// A directory that depends on a placeholder can only exist per pair, so it
/// is left for hicrep.
pub fn create_out_dir(template: &str) -> anyhow::Result<()> {
    let dir = match std::path::Path::new(template).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(()),
    };

    let dir_str = dir.to_string_lossy();
    if has_placeholder(&dir_str) {
        log::warn!(
            "Output directory {} depends on placeholders; not creating it",
            dir_str
        );
        return Ok(());
    }

    std::fs::create_dir_all(dir)?;
    log::info!("Output directory {} ready", dir_str);
    Ok(())
}

/// Bails out early when an external program is missing
pub fn require(program: &str) -> anyhow::Result<()> {
    if which::which(program).is_err() {
        anyhow::bail!("{} not found in PATH. Please install {} first.", program, program);
    }
    Ok(())
}
