mod error;
mod parser;
mod position;
mod recon;
mod transactions;

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ReconError;

/**
 * Offline batch reconciliation: replay a day's transactions onto the
 * opening position and report per-symbol breaks against the reported
 * closing position. Runs with no arguments against recon.in/recon.out
 * in the working directory.
 */
#[derive(Parser, Debug)]
struct Args {
    /// Day file with D0-POS, D1-TRN and D1-POS sections
    #[clap(default_value = "recon.in")]
    input: PathBuf,

    /// Where the break report is written, overwriting any previous run
    #[clap(default_value = "recon.out")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

/**
 * Load, parse, reconcile, write. Any failure aborts before the output
 * file is touched, so a failed run never leaves a partial report.
 */
fn run(args: &Args) -> Result<(), ReconError> {
    let input = fs::read_to_string(&args.input).map_err(|source| ReconError::Io {
        path: args.input.clone(),
        source,
    })?;

    let day = parser::parse(&input)?;
    let computed = recon::replay(&day.opening, &day.transactions)?;
    let breaks = recon::diff(&day.closing, &computed);

    fs::write(&args.output, breaks.to_string()).map_err(|source| ReconError::Io {
        path: args.output.clone(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_day_file(content: &str) -> Result<String, ReconError> {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            input: dir.path().join("recon.in"),
            output: dir.path().join("recon.out"),
        };
        fs::write(&args.input, content).unwrap();
        run(&args)?;
        Ok(fs::read_to_string(&args.output).unwrap())
    }

    #[test]
    fn fully_reconciled_day_writes_an_empty_report() {
        let output = run_day_file(
            "D0-POS\r\nAAPL 10\r\nCash 1000\r\n\
             D1-TRN\r\nAAPL BUY 5 500\r\n\
             D1-POS\r\nAAPL 15\r\nCash 500\r\n",
        )
        .unwrap();

        assert_eq!(output, "");
    }

    #[test]
    fn breaks_come_out_one_per_line_in_closing_order_first() {
        let output = run_day_file(
            "D0-POS\r\nCash 100\r\nGOOG 2\r\n\
             D1-TRN\r\nMSFT DEPOSIT 0 50\r\n\
             D1-POS\r\nCash 200\r\n",
        )
        .unwrap();

        // Cash from the closing section first, then the GOOG the replay
        // still carries but the closing position does not report.
        assert_eq!(output, "Cash 50\nGOOG -2\n");
    }

    #[test]
    fn unsupported_action_fails_without_writing_output() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            input: dir.path().join("recon.in"),
            output: dir.path().join("recon.out"),
        };
        fs::write(
            &args.input,
            "D0-POS\r\nCash 100\r\nD1-TRN\r\nAAPL SPLIT 2 0\r\nD1-POS\r\nCash 100\r\n",
        )
        .unwrap();

        let err = run(&args).unwrap_err();

        assert!(matches!(err, ReconError::UnsupportedAction(token) if token == "SPLIT"));
        assert!(!args.output.exists());
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            input: dir.path().join("does-not-exist.in"),
            output: dir.path().join("recon.out"),
        };

        assert!(matches!(run(&args).unwrap_err(), ReconError::Io { .. }));
    }

    #[test]
    fn output_file_is_overwritten_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            input: dir.path().join("recon.in"),
            output: dir.path().join("recon.out"),
        };
        fs::write(&args.output, "stale MSFT 99\n").unwrap();
        fs::write(
            &args.input,
            "D0-POS\r\nCash 100\r\nD1-TRN\r\nD1-POS\r\nCash 150\r\n",
        )
        .unwrap();

        run(&args).unwrap();

        assert_eq!(fs::read_to_string(&args.output).unwrap(), "Cash 50\n");
    }
}
