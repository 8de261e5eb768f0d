use crate::core::CommitMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Apply balance-transfer operations against a key-value ledger
#[derive(Parser, Debug)]
#[command(name = "ledger-engine")]
#[command(
    about = "Apply balance-transfer operations against a key-value ledger",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file of operations")]
    pub input_file: PathBuf,

    /// How a transfer's two balance writes are committed
    #[arg(
        long = "commit",
        value_name = "MODE",
        default_value = "sequential",
        help = "Commit mode: 'sequential' issues two independent writes, 'atomic' issues one batch write"
    )]
    pub commit: CommitModeArg,
}

/// Available commit modes for transfer writes
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CommitModeArg {
    Sequential,
    Atomic,
}

impl CliArgs {
    /// Map the CLI commit mode onto the engine's CommitMode
    pub fn to_commit_mode(&self) -> CommitMode {
        match self.commit {
            CommitModeArg::Sequential => CommitMode::Sequential,
            CommitModeArg::Atomic => CommitMode::Atomic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_mode(&["program", "ops.csv"], CommitMode::Sequential)]
    #[case::explicit_sequential(&["program", "--commit", "sequential", "ops.csv"], CommitMode::Sequential)]
    #[case::explicit_atomic(&["program", "--commit", "atomic", "ops.csv"], CommitMode::Atomic)]
    fn test_commit_mode_parsing(#[case] args: &[&str], #[case] expected: CommitMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_commit_mode(), expected);
    }

    #[test]
    fn test_input_file_parsing() {
        let parsed = CliArgs::try_parse_from(["program", "ops.csv"]).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("ops.csv"));
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_commit_mode(&["program", "--commit", "eventually", "ops.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
