// ygg-keys, keypair provisioning for Yggdrasil mesh nodes.
// Copyright (C) 2024 The ygg-keygen Authors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod cli;
mod config_file;
mod environment;
mod error;
mod generator;
mod keypair;
mod logging;

pub use cli::GeneratorArgs;
pub use config_file::{merge_into_config, merge_keys, PRIVATE_KEY_FIELD, PUBLIC_KEY_FIELD};
pub use environment::{keys_from_environment, PRIVATE_KEY_ENV, PUBLIC_KEY_ENV};
pub use error::{Error, GenerateError, ScrapeError};
pub use generator::{
    generate_keys, scrape_keys, try_generate_keys, DEFAULT_GENKEYS, DEFAULT_TIMEOUT_SECS,
    PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL,
};
pub use keypair::Keypair;
pub use logging::{LogConfig, DEFAULT_LOGGER_NAME};
