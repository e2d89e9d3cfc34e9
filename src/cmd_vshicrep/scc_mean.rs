use clap::*;
use std::io::Write;
use vshicrep::libs::scc;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("scc-mean")
        .about("Mean of the SCC scores in hicrep output")
        .after_help(
            r###"
Every line that reads as a number is an SCC score; headers, warnings and
blank lines are skipped. The mean is written without a trailing newline, so
the output can be used as a cell value as is.

Input without any score is an error.

Examples:
1. As a pipeline stage:
   hicrep a.mcool b.mcool /dev/stdout --h 1 --binSize 500000 --dBPMax 1000000 |
       vshicrep scc-mean

2. From a saved score file:
   vshicrep scc-mean scc/a_b.txt

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
    let infile = args.get_one::<String>("infile").unwrap();
    let text = vshicrep::read_all(infile)?;

    let scores = scc::extract(&text);
    let mean = scc::summarize(&scores)?;
    log::info!("{} SCC scores in {}", scores.len(), infile);

    let mut writer = vshicrep::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_all(scc::format_score(mean).as_bytes())?;
    writer.flush()?;

    Ok(())
}
