use anyhow::{bail, Result};
use fairplay_core::verify_hex;

pub fn verify(mv: &str, key: &str, tag: &str) -> Result<()> {
    if verify_hex(mv, key, tag)? {
        println!("OK: commitment {} opens to {}", tag.trim(), mv);
        Ok(())
    } else {
        bail!("commitment {} does not open to {} under this key", tag.trim(), mv)
    }
}
