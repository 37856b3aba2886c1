use std::path::Path;

use crate::{Error, Keypair};

pub const PUBLIC_KEY_FIELD: &str = "PublicKey:";
pub const PRIVATE_KEY_FIELD: &str = "PrivateKey:";

const FIELD_INDENT: &str = "  ";

/// Rewrite the Yggdrasil config at `path` in place with the given keys.
/// The previous content is not backed up.
pub async fn merge_into_config(keys: &Keypair, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
    let merged = merge_keys(&content, keys);
    tokio::fs::write(path, merged)
        .await
        .map_err(|source| Error::WriteConfig {
            path: path.to_owned(),
            source,
        })
}

/// Replace the lines containing `PublicKey:` and `PrivateKey:` with canonical
/// two-space indented fields. Fields not found are appended, public key first.
/// Any further line containing an already written marker is dropped, all other
/// lines are kept as they are.
///
/// A replaced line keeps its own line ending. Appended fields use the line ending
/// of the first line of the file.
pub fn merge_keys(content: &str, keys: &Keypair) -> String {
    let mut merged = String::with_capacity(content.len());
    let mut public_written = false;
    let mut private_written = false;

    for line in content.split_inclusive('\n') {
        if line.contains(PUBLIC_KEY_FIELD) {
            if !public_written {
                push_field(&mut merged, PUBLIC_KEY_FIELD, keys.public(), line_ending(line));
                public_written = true;
            }
        } else if line.contains(PRIVATE_KEY_FIELD) {
            if !private_written {
                push_field(&mut merged, PRIVATE_KEY_FIELD, keys.private(), line_ending(line));
                private_written = true;
            }
        } else {
            merged.push_str(line);
        }
    }

    if public_written && private_written {
        return merged;
    }
    let newline = content
        .split_inclusive('\n')
        .next()
        .map_or("\n", line_ending);
    if !merged.is_empty() && !merged.ends_with('\n') {
        merged.push_str(newline);
    }
    if !public_written {
        push_field(&mut merged, PUBLIC_KEY_FIELD, keys.public(), newline);
    }
    if !private_written {
        push_field(&mut merged, PRIVATE_KEY_FIELD, keys.private(), newline);
    }
    merged
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn push_field(out: &mut String, field: &str, value: &str, newline: &str) {
    out.push_str(FIELD_INDENT);
    out.push_str(field);
    out.push(' ');
    out.push_str(value);
    out.push_str(newline);
}
