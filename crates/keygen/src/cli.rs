use std::path::{Path, PathBuf};

use clap::{builder::OsStringValueParser, builder::TypedValueParser, Parser};

use ygg_keys::GeneratorArgs;

#[derive(Parser)]
#[command(version, about = "Generate yggdrasil high address")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Save generated keys to existing yggdrasil configuration file
    #[arg(
        long,
        env = "YGGDRASIL_CONF",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub yggdrasil_conf: Option<PathBuf>,

    /// Print extra logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Use environment values YGGDRASIL_PUBLIC_KEY and YGGDRASIL_PRIVATE_KEY if set
    #[arg(long)]
    pub environment: bool,
}

impl Cli {
    /// Config file to update. An empty path disables writing.
    pub fn config_path(&self) -> Option<&Path> {
        self.yggdrasil_conf
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ygg-keygen"]).unwrap();
        assert_eq!(cli.generator.genkeys, "genkeys");
        assert_eq!(cli.generator.timeout(), Duration::from_secs(60));
        assert!(!cli.verbose);
        assert!(!cli.environment);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "ygg-keygen",
            "--genkeys",
            "/usr/bin/genkeys -sig",
            "--timeout",
            "5",
            "--yggdrasil-conf",
            "/etc/yggdrasil.conf",
            "-v",
            "--environment",
        ])
        .unwrap();
        assert_eq!(cli.generator.genkeys, "/usr/bin/genkeys -sig");
        assert_eq!(cli.generator.timeout(), Duration::from_secs(5));
        assert_eq!(cli.config_path(), Some(Path::new("/etc/yggdrasil.conf")));
        assert!(cli.verbose);
        assert!(cli.environment);
    }

    #[test]
    fn test_empty_config_path_disables_writing() {
        let cli = Cli::try_parse_from(["ygg-keygen", "--yggdrasil-conf", ""]).unwrap();
        assert_eq!(cli.config_path(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_config_path() {
        use std::{ffi::OsString, os::unix::ffi::OsStringExt};

        let path = OsString::from_vec(b"/etc/ygg\xffdrasil.conf".to_vec());
        let cli = Cli::try_parse_from([
            OsString::from("ygg-keygen"),
            OsString::from("--yggdrasil-conf"),
            path.clone(),
        ])
        .unwrap();
        assert_eq!(cli.config_path(), Some(Path::new(&path)));
    }

    #[test]
    fn test_malformed_timeout_rejected() {
        assert!(Cli::try_parse_from(["ygg-keygen", "--timeout", "soon"]).is_err());
        assert!(Cli::try_parse_from(["ygg-keygen", "--timeout", "-1"]).is_err());
    }
}
