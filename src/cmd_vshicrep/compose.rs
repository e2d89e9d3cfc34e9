use crate::cmd_vshicrep::common;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("compose")
        .about("Show the command one matrix region would run")
        .after_help(
            r###"
Prints the command template that `vshicrep compare` hands to the dispatcher
for one region of the matrix. Placeholders are left untouched:

* {1} - row .mcool path
* {2} - column .mcool path
* {3} - row caption
* {4} - column caption

--process:
* scc-mean   - pipe the scores into `vshicrep scc-mean`
* scc-scores - pipe the scores into `vshicrep scc-scores`
* ""         - no post-processing
* any other  - a shell command, piped into as is

A disabled region (--disabled) composes to nothing.

Examples:
1. Defaults:
   vshicrep compose

2. Keep the raw scores:
   vshicrep compose --process scc-scores --no-read

3. Another resolution:
   vshicrep compose --hicrep "--h 1 --binSize 100000 --dBPMax 5000000"

"###,
        )
        .arg(common::arg_hicrep())
        .arg(common::arg_hicrep_out())
        .arg(common::arg_no_read())
        .arg(common::arg_process(
            "process",
            "process",
            "Post-processing of the SCC scores",
        ))
        .arg(common::arg_tool())
        .arg(common::arg_program())
        .arg(
            Arg::new("disabled")
                .long("disabled")
                .action(ArgAction::SetTrue)
                .help("Compose a disabled region"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let composer = common::composer(args)?;
    let parameters = if args.get_flag("disabled") {
        None
    } else {
        args.get_one::<String>("hicrep").map(String::as_str)
    };
    let out_template = args.get_one::<String>("hicrep_out").unwrap();
    let read = !args.get_flag("no_read");
    let process = common::post_process(args, "process");

    let mut writer = vshicrep::writer(args.get_one::<String>("outfile").unwrap())?;

    //----------------------------
    // Output
    //----------------------------
    let command = composer.compose(parameters, out_template, read, &process);
    if !command.is_empty() {
        writer.write_fmt(format_args!("{}\n", command))?;
    }
    writer.flush()?;

    Ok(())
}
