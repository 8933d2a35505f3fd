use anyhow::{Context, Result};
use path_clean::PathClean;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::utils::HostFs;

const ISO_EXTENSION: &str = "iso";
const GENERATED_SUFFIX: &str = "_vagrant.iso";
const TOKEN_LEN: usize = 6;
const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Work out where the image goes and make sure its parent directory exists.
///
/// - `Some(path)` with an `.iso` extension is the output file itself.
/// - `Some(path)` without one is a directory; a random file name is added.
/// - `None` takes a fresh path from the temp-file allocator.
pub fn resolve_destination(fs: &dyn HostFs, file_destination: Option<&Path>) -> Result<PathBuf> {
    let destination = match file_destination {
        None => fs.temp_file_path()?,
        Some(path) if has_iso_extension(path) => absolutize(path)?,
        Some(dir) => absolutize(dir)?.join(generated_file_name()),
    };

    if let Some(parent) = destination.parent() {
        fs.create_dir_all(parent)?;
    }

    debug!("Resolved ISO destination: {}", destination.display());
    Ok(destination)
}

/// `<6 random alphanumerics>_vagrant.iso`
pub fn generated_file_name() -> String {
    // The low 56 bits of a v4 UUID carry no version or variant bits
    let mut bits = uuid::Uuid::new_v4().as_u128() & ((1u128 << 56) - 1);
    let base = TOKEN_ALPHABET.len() as u128;

    let token: String = (0..TOKEN_LEN)
        .map(|_| {
            let symbol = TOKEN_ALPHABET[(bits % base) as usize] as char;
            bits /= base;
            symbol
        })
        .collect();

    format!("{}{}", token, GENERATED_SUFFIX)
}

fn has_iso_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(ISO_EXTENSION)
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.has_root() {
        return Ok(path.clean());
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(path).clean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::MockHostFs;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case("/woo/out.iso", true)]
    #[case("/woo/out_dir", false)]
    #[case("/woo/out.ISO", false)]
    #[case("/woo/out.img", false)]
    #[case("/woo/dir.iso/", true)]
    fn test_iso_extension_detection(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(has_iso_extension(Path::new(path)), expected);
    }

    #[test]
    fn test_explicit_iso_file_is_used_as_is() {
        let mut fs = MockHostFs::new();
        fs.expect_temp_file_path().never();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("/woo"))
            .times(1)
            .returning(|_| Ok(()));

        let dest = resolve_destination(&fs, Some(Path::new("/woo/out.iso"))).unwrap();
        assert_eq!(dest, PathBuf::from("/woo/out.iso"));
    }

    #[test]
    fn test_directory_gets_generated_name() {
        let mut fs = MockHostFs::new();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("/woo/out_dir"))
            .times(1)
            .returning(|_| Ok(()));

        let dest = resolve_destination(&fs, Some(Path::new("/woo/out_dir"))).unwrap();
        let pattern = Regex::new(r"^/woo/out_dir/[[:alnum:]]{6}_vagrant\.iso$").unwrap();
        assert!(pattern.is_match(&dest.to_string_lossy()), "{}", dest.display());
    }

    #[test]
    fn test_missing_destination_uses_temp_path() {
        let mut fs = MockHostFs::new();
        fs.expect_temp_file_path()
            .times(1)
            .returning(|| Ok(PathBuf::from("/tmp/vagrant123.iso")));
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("/tmp"))
            .returning(|_| Ok(()));

        let dest = resolve_destination(&fs, None).unwrap();
        assert_eq!(dest, PathBuf::from("/tmp/vagrant123.iso"));
    }

    #[test]
    fn test_relative_destination_is_made_absolute() {
        let mut fs = MockHostFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));

        let dest = resolve_destination(&fs, Some(Path::new("build/./seed.iso"))).unwrap();
        let expected = std::env::current_dir().unwrap().join("build/seed.iso");
        assert_eq!(dest, expected);
    }

    #[test]
    fn test_directory_creation_failure_propagates() {
        let mut fs = MockHostFs::new();
        fs.expect_create_dir_all()
            .returning(|_| Err(anyhow::anyhow!("read-only filesystem")));

        let err = resolve_destination(&fs, Some(Path::new("/woo/out.iso"))).unwrap_err();
        assert_eq!(err.to_string(), "read-only filesystem");
    }

    #[test]
    fn test_generated_names_differ() {
        let first = generated_file_name();
        let second = generated_file_name();
        assert_ne!(first, second);
        assert_eq!(first.len(), TOKEN_LEN + GENERATED_SUFFIX.len());
    }

    #[test]
    fn test_generated_tokens_use_full_alphanumeric_set() {
        let tokens: Vec<String> = (0..200)
            .map(|_| generated_file_name()[..TOKEN_LEN].to_string())
            .collect();

        assert!(tokens
            .iter()
            .all(|token| token.chars().all(|c| c.is_ascii_alphanumeric())));
        // 1200 draws never all land in the 16 hex symbols
        assert!(tokens
            .iter()
            .flat_map(|token| token.chars())
            .any(|c| !c.is_ascii_hexdigit()));
    }
}
