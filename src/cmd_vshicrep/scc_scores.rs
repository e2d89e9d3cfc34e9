use clap::*;
use std::io::Write;
use vshicrep::libs::scc;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("scc-scores")
        .about("List the SCC scores in hicrep output")
        .after_help(
            r###"
Writes the SCC scores as a list, `[0.98, 0.97]`, in the order they appear.
Non-numeric lines are skipped. No trailing newline.

Example:
    vshicrep scc-scores scc/a_b.txt

"###,
        )
        .arg(
            Arg::new("infile")
                .num_args(1)
                .index(1)
                .default_value("stdin")
                .help("Raw hicrep output. [stdin] for standard input"),
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
    let text = vshicrep::read_all(args.get_one::<String>("infile").unwrap())?;
    let scores = scc::extract(&text);

    let mut writer = vshicrep::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_all(scc::format_scores(&scores).as_bytes())?;
    writer.flush()?;

    Ok(())
}
