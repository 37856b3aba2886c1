use crate::Keypair;

pub const PUBLIC_KEY_ENV: &str = "YGGDRASIL_PUBLIC_KEY";
pub const PRIVATE_KEY_ENV: &str = "YGGDRASIL_PRIVATE_KEY";

/// Keypair from `YGGDRASIL_PRIVATE_KEY` and `YGGDRASIL_PUBLIC_KEY`.
/// Returns `None` unless both variables are set to non-empty values.
pub fn keys_from_environment() -> Option<Keypair> {
    let public = non_empty_var(PUBLIC_KEY_ENV)?;
    let private = non_empty_var(PRIVATE_KEY_ENV)?;
    Some(Keypair::new(private, public))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn set_vars(public: Option<&str>, private: Option<&str>) {
        for (name, value) in [(PUBLIC_KEY_ENV, public), (PRIVATE_KEY_ENV, private)] {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    #[test]
    #[serial]
    fn test_both_vars_set() {
        set_vars(Some("pub-value"), Some("priv-value"));
        assert_eq!(
            keys_from_environment(),
            Some(Keypair::new("priv-value", "pub-value"))
        );
        set_vars(None, None);
    }

    #[test]
    #[serial]
    fn test_missing_var() {
        set_vars(Some("pub-value"), None);
        assert_eq!(keys_from_environment(), None);
        set_vars(None, Some("priv-value"));
        assert_eq!(keys_from_environment(), None);
        set_vars(None, None);
        assert_eq!(keys_from_environment(), None);
    }

    #[test]
    #[serial]
    fn test_empty_var_is_absent() {
        set_vars(Some(""), Some("priv-value"));
        assert_eq!(keys_from_environment(), None);
        set_vars(None, None);
    }
}
