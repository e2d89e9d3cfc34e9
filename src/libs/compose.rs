//! Composing the shell command that one cell of the comparison matrix runs.
//!
//! A composed command still carries the positional placeholders
//! `{1}` (row path), `{2}` (column path), `{3}` (row caption) and
//! `{4}` (column caption). They are resolved per pair by the dispatcher.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_PLACEHOLDER: Regex = Regex::new(r"\{[1-4]\}").unwrap();
}

/// Default comparison tool
pub const TOOL: &str = "hicrep";

/// Default program providing the `scc-mean` and `scc-scores` stages
pub const PROGRAM: &str = "vshicrep";

/// What to pipe the SCC scores into after the comparison tool ran
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostProcess {
    /// Leave the raw output alone
    #[default]
    None,
    /// `scc-mean`: reduce the scores to their mean
    Mean,
    /// `scc-scores`: list the scores
    List,
    /// Any other shell command, piped into verbatim
    Custom(String),
}

impl PostProcess {
    /// Resolves a user-supplied token.
    ///
    /// ```
    /// use vshicrep::libs::compose::PostProcess;
    ///
    /// assert_eq!(PostProcess::from_token(""), PostProcess::None);
    /// assert_eq!(PostProcess::from_token("scc-mean"), PostProcess::Mean);
    /// assert_eq!(PostProcess::from_token("scc-scores"), PostProcess::List);
    /// assert_eq!(
    ///     PostProcess::from_token("sort -n"),
    ///     PostProcess::Custom("sort -n".to_string())
    /// );
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "" => PostProcess::None,
            "scc-mean" => PostProcess::Mean,
            "scc-scores" => PostProcess::List,
            cmd => PostProcess::Custom(cmd.to_string()),
        }
    }

    // `program` is a path and gets quoted, a custom command is shell text
    fn stage(&self, program: &str) -> Option<String> {
        let quoted = || shell_escape::unix::escape(program.into());
        match self {
            PostProcess::None => None,
            PostProcess::Mean => Some(format!("{} scc-mean", quoted())),
            PostProcess::List => Some(format!("{} scc-scores", quoted())),
            PostProcess::Custom(cmd) if cmd.is_empty() => None,
            PostProcess::Custom(cmd) => Some(cmd.clone()),
        }
    }
}

/// Builds command templates for one comparison tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    tool: String,
    program: String,
}

impl Default for Composer {
    fn default() -> Self {
        Composer::new(TOOL, PROGRAM)
    }
}

impl Composer {
    /// `tool` is the comparison tool; `program` implements the internal
    /// post-processing stages.
    pub fn new(tool: &str, program: &str) -> Self {
        Composer {
            tool: tool.to_string(),
            program: program.to_string(),
        }
    }

    /// Composes the command of one region.
    ///
    /// `parameters == None` disables the region and yields an empty string.
    ///
    /// ```
    /// use vshicrep::libs::compose::{Composer, PostProcess};
    ///
    /// let composer = Composer::default();
    /// let cmd = composer.compose(
    ///     Some("--h 1 --binSize 500000"),
    ///     "scc/{3}_{4}.txt",
    ///     true,
    ///     &PostProcess::Mean,
    /// );
    /// assert_eq!(
    ///     cmd,
    ///     "hicrep {1} {2} scc/{3}_{4}.txt --h 1 --binSize 500000 2> /dev/null \
    ///      ; cat scc/{3}_{4}.txt | vshicrep scc-mean"
    /// );
    ///
    /// assert_eq!(composer.compose(None, "scc/{3}_{4}.txt", true, &PostProcess::Mean), "");
    /// ```
    pub fn compose(
        &self,
        parameters: Option<&str>,
        output_template: &str,
        capture_output: bool,
        post_process: &PostProcess,
    ) -> String {
        let parameters = match parameters {
            Some(p) => p.trim(),
            None => return String::new(),
        };

        let mut parts = vec![format!("{} {{1}} {{2}} {}", self.tool, output_template)];
        if !parameters.is_empty() {
            parts.push(parameters.to_string());
        }
        parts.push("2> /dev/null".to_string());
        if capture_output {
            parts.push(format!("; cat {}", output_template));
        }
        if let Some(stage) = post_process.stage(&self.program) {
            parts.push(format!("| {}", stage));
        }

        parts.iter().join(" ")
    }
}

/// Whether `s` contains any of the `{1}`..`{4}` placeholders
///
/// ```
/// use vshicrep::libs::compose::has_placeholder;
///
/// assert!(has_placeholder("scc/{3}_{4}.txt"));
/// assert!(!has_placeholder("scc"));
/// assert!(!has_placeholder("{5}"));
/// ```
pub fn has_placeholder(s: &str) -> bool {
    RE_PLACEHOLDER.is_match(s)
}
