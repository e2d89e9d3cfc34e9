extern crate clap;
use clap::*;

mod cmd_vshicrep;

fn main() -> anyhow::Result<()> {
    let app = Command::new("vshicrep")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`vshicrep` - Sample vs. sample hicrep SCC scores")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr (same as RUST_LOG=info)"),
        )
        .subcommand(cmd_vshicrep::compare::make_subcommand())
        .subcommand(cmd_vshicrep::compose::make_subcommand())
        .subcommand(cmd_vshicrep::scc_mean::make_subcommand())
        .subcommand(cmd_vshicrep::scc_scores::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Matrices:
    * compare    - Run hicrep over every pair of .mcool files on stdin
    * compose    - Show the command one matrix region would run

* Pipeline stages:
    * scc-mean   - Mean of the SCC scores in hicrep output
    * scc-scores - List the SCC scores in hicrep output

External programs:
    hicrep, versus-cli, pathlib-cli, pandas-cli, dataframe-vis-nb

"###,
        );

    let matches = app.get_matches();

    let verbose = matches.get_flag("verbose")
        || matches
            .subcommand()
            .is_some_and(|(_, sub_matches)| sub_matches.get_flag("verbose"));
    let level = if verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Check which subcommand the user ran...
    match matches.subcommand() {
        Some(("compare", sub_matches)) => cmd_vshicrep::compare::execute(sub_matches),
        Some(("compose", sub_matches)) => cmd_vshicrep::compose::execute(sub_matches),
        Some(("scc-mean", sub_matches)) => cmd_vshicrep::scc_mean::execute(sub_matches),
        Some(("scc-scores", sub_matches)) => cmd_vshicrep::scc_scores::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
