use clap::Parser;

#[derive(Parser, Clone, Debug, Default)]
pub(crate) struct Verbosity {
    /// Use verbose output [default: false]
    #[clap(long, global = true)]
    pub(crate) verbose: bool,

    /// Use trace output [default: false]
    #[clap(long, global = true)]
    pub(crate) trace: bool,

    /// Use quiet output - only show errors [default: false]
    #[clap(
        long,
        global = true,
        conflicts_with = "verbose",
        conflicts_with = "trace"
    )]
    pub(crate) quiet: bool,
}
