//! Writes the extension icons: `icons/icon16.png`, `icons/icon48.png` and
//! `icons/icon128.png` by default.

mod logging;

use std::error::Error as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use site_timer_icons::{Error, Generator, GeneratorConfig, INSTALL_HINT, Result};

#[derive(Debug, Parser)]
#[command(version, about = "Generate the Site Timer & Blocker icon PNGs")]
struct Cli {
    /// Existing directory to write the icons into.
    #[arg(long, value_name = "DIR", default_value = site_timer_icons::DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Icon edge length in pixels; repeat to render several sizes.
    #[arg(long = "size", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    sizes: Vec<u32>,

    /// Print the manifest "icons" entry after generating.
    #[arg(long)]
    manifest: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default().with_output_dir(&self.out_dir);
        if self.sizes.is_empty() {
            config
        } else {
            config.with_sizes(self.sizes.iter().copied())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(fail(&err, &mut io::stderr().lock())),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let generator = Generator::new(cli.config());

    println!("Generating icon files...");
    generator.run_with(|icon| println!("Created {}", icon.path.display()))?;
    println!("\nAll icons generated successfully!");

    if cli.manifest {
        println!("\n{}", generator.manifest().to_json_pretty()?);
    }
    Ok(())
}

/// Exit status for any fatal error.
const FAILURE_STATUS: u8 = 1;

/// Reports `err` to `out` and returns the process exit status.
fn fail(err: &Error, out: &mut impl Write) -> u8 {
    // Nothing left to tell the user if the diagnostic stream is gone.
    let _ = report(err, out);
    FAILURE_STATUS
}

fn report(err: &Error, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Error: {err}")?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {cause}")?;
        source = cause.source();
    }

    if err.is_missing_capability() {
        writeln!(out, "\n{INSTALL_HINT}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail_to_string(err: &Error) -> (u8, String) {
        let mut out = Vec::new();
        let code = fail(err, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn missing_capability_prints_hint_and_exits_one() {
        let err = Error::MissingCapability {
            reason: "pixmap allocation failed".into(),
        };
        let (code, text) = fail_to_string(&err);

        assert_eq!(code, 1);
        assert!(text.starts_with("Error: raster canvas backend is unavailable"), "{text}");
        assert!(text.contains("pixmap allocation failed"), "{text}");
        assert!(text.contains(INSTALL_HINT), "{text}");
    }

    #[test]
    fn write_error_prints_cause_without_hint() {
        let err = Error::Write {
            path: PathBuf::from("icons/icon16.png"),
            source: io::Error::from(io::ErrorKind::NotFound).into(),
        };
        let (code, text) = fail_to_string(&err);

        assert_eq!(code, 1);
        assert!(text.contains("failed to write icons/icon16.png"), "{text}");
        assert!(text.contains("caused by:"), "{text}");
        assert!(!text.contains(INSTALL_HINT), "{text}");
    }

    #[test]
    fn cli_defaults_to_extension_icons() {
        let cli = Cli::parse_from(["site-timer-icons"]);
        assert_eq!(cli.config(), GeneratorConfig::default());

        let cli = Cli::parse_from(["site-timer-icons", "--size", "32", "--out-dir", "out"]);
        assert_eq!(cli.config().sizes, vec![32]);
        assert_eq!(cli.config().output_dir(), std::path::Path::new("out"));
    }
}
