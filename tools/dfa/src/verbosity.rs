use clap::Args;
use log::LevelFilter;

#[derive(Args, Debug)]
pub struct VerbosityFlag {
    #[arg(short, long, global = true, help = "Only print the results")]
    quiet: bool,

    #[arg(short, long, global = true, help = "Also print progress information")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Also print rejected registrations")]
    debug: bool,

    #[arg(short, long, global = true, help = "Print every step of the automaton")]
    trace: bool,
}

impl VerbosityFlag {
    /// Returns the log level filter for the given flags, the most quiet flag wins.
    pub fn log_level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.trace {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}
