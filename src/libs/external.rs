//! Running the external collaborators: `pandas-cli`, `dataframe-vis-nb`
//! and whatever the dispatcher is.

use crate::libs::error::{Error, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Default data-frame tool
pub const PANDAS_CLI: &str = "pandas-cli";

/// Default notebook injector
pub const VIS_NB: &str = "dataframe-vis-nb";

/// Where the stdout of a child goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Collected and returned
    Capture,
    /// Shared with our own stdout
    Inherit,
}

/// Runs `program args..` to completion, feeding `input` on its stdin.
///
/// Returns the captured stdout, or an empty string for [`Output::Inherit`].
pub fn run_with_input(
    program: &str,
    args: &[String],
    input: &str,
    output: Output,
) -> Result<String> {
    log::debug!("{} {:?}", program, args);

    let spawn_err = |source: std::io::Error| Error::Spawn {
        program: program.to_string(),
        source,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(match output {
            Output::Capture => Stdio::piped(),
            Output::Inherit => Stdio::inherit(),
        })
        .spawn()
        .map_err(spawn_err)?;

    // stdin is fed from its own thread so a child writing before it has read
    // everything can't block us
    let stdin = child.stdin.take();
    let (written, out) = std::thread::scope(|s| {
        let feeder = s.spawn(move || -> std::io::Result<()> {
            if let Some(mut stdin) = stdin {
                stdin.write_all(input.as_bytes())?;
            }
            Ok(())
        });
        let out = child.wait_with_output();
        (feeder.join(), out)
    });

    let out = out.map_err(spawn_err)?;
    if !out.status.success() {
        return Err(Error::Failed {
            program: program.to_string(),
            status: out.status,
        });
    }

    if let Ok(written) = written {
        check_fed(written)?;
    }

    String::from_utf8(out.stdout).map_err(|source| Error::Utf8 {
        program: program.to_string(),
        source,
    })
}

// the child may exit without reading everything
fn check_fed(written: std::io::Result<()>) -> Result<()> {
    match written {
        Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(Error::Io(e)),
        _ => Ok(()),
    }
}

/// `pandas-cli --layer result to markdown`
pub fn markdown_args() -> Vec<String> {
    ["--layer", "result", "to", "markdown"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// `pandas-cli --layer result to dict`
pub fn dict_args() -> Vec<String> {
    ["--layer", "result", "to", "dict"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// `dataframe-vis-nb <notebook> <append_after> clustermap <result_file>`
pub fn clustermap_args(notebook: &str, append_after: &str, result_file: &str) -> Vec<String> {
    vec![
        notebook.to_string(),
        append_after.to_string(),
        "clustermap".to_string(),
        result_file.to_string(),
    ]
}

/// Renders the result layer of a comparison as markdown on stdout
pub fn to_markdown(pandas_cli: &str, result: &str) -> Result<()> {
    run_with_input(pandas_cli, &markdown_args(), result, Output::Inherit)?;
    Ok(())
}

/// Saves the result layer to `result_file` and injects a clustermap cell into
/// `notebook` after cell `append_after`.
pub fn to_notebook(
    pandas_cli: &str,
    vis_nb: &str,
    result: &str,
    notebook: &str,
    append_after: &str,
    result_file: &str,
) -> Result<()> {
    let layer = run_with_input(pandas_cli, &dict_args(), result, Output::Capture)?;
    std::fs::write(result_file, &layer)?;
    log::info!("Result layer saved to {}", result_file);

    run_with_input(
        vis_nb,
        &clustermap_args(notebook, append_after, result_file),
        &layer,
        Output::Inherit,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_layout() {
        assert_eq!(markdown_args().join(" "), "--layer result to markdown");
        assert_eq!(dict_args().join(" "), "--layer result to dict");
        assert_eq!(
            clustermap_args("nb.ipynb", "0", "res.yaml").join(" "),
            "nb.ipynb 0 clustermap res.yaml"
        );
    }

    #[cfg(unix)]
    #[test]
    fn capture_stdout() {
        let out = run_with_input("cat", &[], "0.5\n0.7\n", Output::Capture).unwrap();
        assert_eq!(out, "0.5\n0.7\n");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit() {
        let err = run_with_input("false", &[], "", Output::Capture).unwrap_err();
        assert!(matches!(err, Error::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_output() {
        let err = run_with_input("printf", &["\\377".to_string()], "", Output::Capture)
            .unwrap_err();
        assert!(matches!(err, Error::Utf8 { .. }));
        assert!(err.to_string().contains("printf"));
    }

    #[test]
    fn feeding_errors() {
        use std::io::ErrorKind;

        assert!(check_fed(Ok(())).is_ok());
        assert!(check_fed(Err(ErrorKind::BrokenPipe.into())).is_ok());

        let err = check_fed(Err(ErrorKind::PermissionDenied.into())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.to_string().contains("failed to run"));
    }

    #[cfg(unix)]
    #[test]
    fn child_ignoring_stdin() {
        let input = "0.5\n".repeat(1 << 16);
        let out = run_with_input("true", &[], &input, Output::Capture).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn missing_program() {
        let err = run_with_input(
            "vshicrep-no-such-program",
            &[],
            "",
            Output::Capture,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
        assert!(err.to_string().contains("vshicrep-no-such-program"));
    }
}
