use std::time::Duration;

use clap::Args;

use crate::{DEFAULT_GENKEYS, DEFAULT_TIMEOUT_SECS};

#[derive(Args, Clone, Debug)]
pub struct GeneratorArgs {
    /// Location of genkeys program
    #[arg(long, env = "YGG_GENKEYS", default_value = DEFAULT_GENKEYS)]
    pub genkeys: String,

    /// Time to generate keys in seconds
    #[arg(long, env = "YGG_GENKEYS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl GeneratorArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
