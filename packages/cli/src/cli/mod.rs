pub(crate) mod partition;
pub(crate) mod verbosity;

pub(crate) use verbosity::*;

use clap::Parser;

/// Show how the children of an HTML mockup split into `data-slot` groups.
#[derive(Parser, Debug)]
#[clap(name = "dx-slots", version)]
pub(crate) struct Cli {
    #[clap(flatten)]
    pub(crate) partition: partition::Partition,

    #[clap(flatten)]
    pub(crate) verbosity: Verbosity,
}
