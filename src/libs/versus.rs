//! The pairwise dispatcher seam.
//!
//! A [`ComparisonPlan`] holds everything the dispatcher needs to fill one
//! comparison matrix; a [`Dispatcher`] turns it into a YAML data frame.

use crate::libs::error::Result;
use crate::libs::external::{run_with_input, Output};

/// Default dispatcher program
pub const VERSUS_CLI: &str = "versus-cli";

/// Zones of the comparison matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Main diagonal, row item == column item
    Diagonal,
    /// Upper triangle; also the fallback for every other cell
    Upper,
    /// Strictly lower triangle
    Lower,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonPlan {
    /// Command turning the row path `{1}` into a caption
    pub row: String,
    /// Command turning the column path `{2}` into a caption
    pub col: String,
    pub upper: String,
    pub diagonal: String,
    pub lower: String,
    /// Only list the commands, run nothing
    pub dryrun: bool,
}

impl ComparisonPlan {
    pub fn command(&self, region: Region) -> &str {
        match region {
            Region::Diagonal => &self.diagonal,
            Region::Upper => &self.upper,
            Region::Lower => &self.lower,
        }
    }

    pub fn set_command(&mut self, region: Region, command: String) {
        match region {
            Region::Diagonal => self.diagonal = command,
            Region::Upper => self.upper = command,
            Region::Lower => self.lower = command,
        }
    }
}

/// Fills a comparison matrix from a newline-separated list of items
pub trait Dispatcher {
    fn dispatch(&self, plan: &ComparisonPlan, items: &str) -> Result<String>;
}

/// Dispatching through `versus-cli`
#[derive(Debug, Clone)]
pub struct VersusCli {
    program: String,
}

impl Default for VersusCli {
    fn default() -> Self {
        VersusCli::new(VERSUS_CLI)
    }
}

impl VersusCli {
    pub fn new(program: &str) -> Self {
        VersusCli {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Command-line arguments for `plan`; disabled regions are left out.
    ///
    /// ```
    /// use vshicrep::libs::versus::{ComparisonPlan, VersusCli};
    ///
    /// let plan = ComparisonPlan {
    ///     row: "pathlib-cli prefix {1}".to_string(),
    ///     col: "pathlib-cli prefix {2}".to_string(),
    ///     upper: "hicrep {1} {2} out.txt".to_string(),
    ///     ..Default::default()
    /// };
    /// let args = VersusCli::default().args(&plan);
    /// assert_eq!(args.len(), 6);
    /// assert_eq!(args[3..], ["--caption-index", "2", "3"]);
    /// ```
    pub fn args(&self, plan: &ComparisonPlan) -> Vec<String> {
        let mut args = vec![
            plan.row.clone(),
            plan.col.clone(),
            plan.upper.clone(),
            "--caption-index".to_string(),
            "2".to_string(),
            "3".to_string(),
        ];

        for (region, flag) in [
            (Region::Diagonal, "--md-command"),
            (Region::Lower, "--slt-command"),
        ] {
            let command = plan.command(region);
            if !command.is_empty() {
                args.push(flag.to_string());
                args.push(command.to_string());
            }
        }

        if plan.dryrun {
            args.push("--dryrun".to_string());
            args.push("--echo-args".to_string());
        }

        args
    }
}

impl Dispatcher for VersusCli {
    fn dispatch(&self, plan: &ComparisonPlan, items: &str) -> Result<String> {
        log::info!(
            "Dispatching {} items through {}",
            items.lines().filter(|l| !l.trim().is_empty()).count(),
            self.program
        );
        run_with_input(&self.program, &self.args(plan), items, Output::Capture)
    }
}
