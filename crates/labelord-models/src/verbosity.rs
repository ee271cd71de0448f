/// Output verbosity of a synchronization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Summary only.
    Quiet,
    /// Errors and summary.
    #[default]
    Normal,
    /// Every operation and summary.
    Verbose,
}

impl Verbosity {
    /// Resolve verbosity from command line flags.
    ///
    /// Asking for both is the same as asking for none.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, false) => Self::Verbose,
            (false, true) => Self::Quiet,
            _ => Self::Normal,
        }
    }
}
