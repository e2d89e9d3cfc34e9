use crate::cmd_vshicrep::common;
use clap::*;
use std::io::Write;
use vshicrep::libs::external::{self, PANDAS_CLI, VIS_NB};
use vshicrep::libs::versus::{ComparisonPlan, Dispatcher, Region, VersusCli, VERSUS_CLI};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("compare")
        .about("Run hicrep over every pair of .mcool files on stdin")
        .after_help(
            r###"
Reads .mcool paths, one per line, from stdin and computes hicrep SCC scores
for every row/column pair through `versus-cli`. The result is a YAMLized
pandas DataFrame holding, for every cell, the command that ran, the raw
SCC score output and its summary statistic (the mean by default).

Regions of the matrix:
* --hicrep      - every cell, unless overridden below
* --hicrep-md   - main diagonal
* --hicrep-slt  - strictly lower triangle

Each region has its own post-processing (--hicrep-process, --md-process,
--slt-process): scc-mean, scc-scores, "" for none, or a shell command.

Captions come from --row/--col, commands turning {1}/{2} into names.

Result consumers:
* no subcommand     - the DataFrame YAML goes to stdout
* to markdown       - `pandas-cli --layer result to markdown`
* to notebook <NB>  - save the result layer and add a clustermap to a notebook

Examples:
1. Means for all .mcool files in the current directory:
   ls *.mcool | vshicrep compare > hicrep_data.yaml

2. Bin size of 100kb, chr1-3 only:
   ls *.mcool | vshicrep compare \
       --hicrep "--h 1 --binSize 100000 --dBPMax 5000000 --chrNames chr1 chr2 chr3"

3. 500kb above the diagonal, 100kb below:
   ls *.mcool | vshicrep compare \
       --hicrep "--h 1 --binSize 500000 --dBPMax 5000000" \
       --hicrep-slt "--h 1 --binSize 100000 --dBPMax 5000000"

4. Markdown table in the terminal:
   ls *.mcool | vshicrep compare to markdown

5. Clustermap in a Jupyter notebook:
   ls *.mcool | vshicrep compare to notebook notebook.ipynb

hicrep.py: https://github.com/dejunlin/hicrep

"###,
        )
        .arg(common::arg_hicrep())
        .arg(
            Arg::new("hicrep_md")
                .long("hicrep-md")
                .num_args(1)
                .allow_hyphen_values(true)
                .help("Alternative hicrep parameters for the main diagonal"),
        )
        .arg(
            Arg::new("hicrep_slt")
                .long("hicrep-slt")
                .num_args(1)
                .allow_hyphen_values(true)
                .help("Alternative hicrep parameters for the strictly lower triangle"),
        )
        .arg(
            Arg::new("row")
                .long("row")
                .num_args(1)
                .default_value("pathlib-cli prefix {1}")
                .help("Command turning the row path {1} into the row caption"),
        )
        .arg(
            Arg::new("col")
                .long("col")
                .num_args(1)
                .default_value("pathlib-cli prefix {2}")
                .help("Command turning the column path {2} into the column caption"),
        )
        .arg(common::arg_hicrep_out())
        .arg(common::arg_no_read())
        .arg(common::arg_process(
            "hicrep_process",
            "hicrep-process",
            "Post-processing of the SCC scores; its output fills the cell",
        ))
        .arg(common::arg_process(
            "md_process",
            "md-process",
            "Post-processing on the main diagonal",
        ))
        .arg(common::arg_process(
            "slt_process",
            "slt-process",
            "Post-processing on the strictly lower triangle",
        ))
        .arg(
            Arg::new("no_mkdir")
                .long("no-mkdir")
                .action(ArgAction::SetTrue)
                .help("Don't create the directory of the SCC score files"),
        )
        .arg(
            Arg::new("dryrun")
                .long("dryrun")
                .action(ArgAction::SetTrue)
                .help("List the commands in the DataFrame, run nothing"),
        )
        .arg(common::arg_tool())
        .arg(common::arg_program())
        .arg(
            Arg::new("versus")
                .long("versus")
                .num_args(1)
                .default_value(VERSUS_CLI)
                .help("The pairwise dispatcher"),
        )
        .subcommand(
            Command::new("to")
                .about("Hand the result to a consumer")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("markdown")
                        .about("Markdown table of the summary statistics")
                        .arg(arg_pandas_cli()),
                )
                .subcommand(
                    Command::new("notebook")
                        .about("Add a clustermap of the summary statistics to a notebook")
                        .arg(
                            Arg::new("notebook")
                                .required(true)
                                .index(1)
                                .help("Jupyter notebook (.ipynb)"),
                        )
                        .arg(arg_pandas_cli())
                        .arg(
                            Arg::new("append_after")
                                .long("append-after")
                                .num_args(1)
                                .default_value("0")
                                .help("Index of the cell the new cells follow"),
                        )
                        .arg(
                            Arg::new("result_file")
                                .long("result-file")
                                .num_args(1)
                                .default_value("vs-hicrep-results.yaml")
                                .help("Where to save the result layer"),
                        )
                        .arg(
                            Arg::new("vis_nb")
                                .long("vis-nb")
                                .num_args(1)
                                .default_value(VIS_NB)
                                .help("The notebook injector"),
                        ),
                ),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let composer = common::composer(args)?;
    let out_template = args.get_one::<String>("hicrep_out").unwrap();
    let read = !args.get_flag("no_read");

    let mut plan = ComparisonPlan {
        row: args.get_one::<String>("row").unwrap().to_string(),
        col: args.get_one::<String>("col").unwrap().to_string(),
        dryrun: args.get_flag("dryrun"),
        ..Default::default()
    };
    for (region, params, process) in [
        (Region::Upper, "hicrep", "hicrep_process"),
        (Region::Diagonal, "hicrep_md", "md_process"),
        (Region::Lower, "hicrep_slt", "slt_process"),
    ] {
        let command = composer.compose(
            args.get_one::<String>(params).map(String::as_str),
            out_template,
            read,
            &common::post_process(args, process),
        );
        log::info!("{:?}: {}", region, command);
        plan.set_command(region, command);
    }

    let versus = VersusCli::new(args.get_one::<String>("versus").unwrap());
    common::require(versus.program())?;
    if let Some(("to", to_matches)) = args.subcommand() {
        if let Some((_, consumer)) = to_matches.subcommand() {
            common::require(consumer.get_one::<String>("pandas_cli").unwrap())?;
            if let Ok(Some(vis_nb)) = consumer.try_get_one::<String>("vis_nb") {
                common::require(vis_nb)?;
            }
        }
    }

    //----------------------------
    // Operating
    //----------------------------
    if !args.get_flag("no_mkdir") {
        common::create_out_dir(out_template)?;
    }

    let items = vshicrep::read_all("stdin")?;
    let result = versus.dispatch(&plan, &items)?;

    //----------------------------
    // Output
    //----------------------------
    match args.subcommand() {
        Some(("to", to_matches)) => match to_matches.subcommand() {
            Some(("markdown", md_matches)) => {
                let pandas_cli = md_matches.get_one::<String>("pandas_cli").unwrap();
                external::to_markdown(pandas_cli, &result)?;
            }
            Some(("notebook", nb_matches)) => {
                let pandas_cli = nb_matches.get_one::<String>("pandas_cli").unwrap();
                let vis_nb = nb_matches.get_one::<String>("vis_nb").unwrap();
                external::to_notebook(
                    pandas_cli,
                    vis_nb,
                    &result,
                    nb_matches.get_one::<String>("notebook").unwrap(),
                    nb_matches.get_one::<String>("append_after").unwrap(),
                    nb_matches.get_one::<String>("result_file").unwrap(),
                )?;
            }
            _ => unreachable!(),
        },
        _ => {
            let mut writer = vshicrep::writer("stdout")?;
            writer.write_all(result.as_bytes())?;
            if !result.ends_with('\n') {
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

fn arg_pandas_cli() -> Arg {
    Arg::new("pandas_cli")
        .long("pandas-cli")
        .num_args(1)
        .default_value(PANDAS_CLI)
        .help("The DataFrame tool")
}
