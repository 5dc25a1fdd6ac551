use super::Signer;
use crate::error::Result;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Simulated signer: waits, then copies the archive unchanged.
/// No certificate is involved; the output is byte-identical to the input.
pub struct CopySigner {
    pub delay: Duration,
}

impl Signer for CopySigner {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn sign(&self, unsigned: &Path, signed: &Path) -> Result<u64> {
        tracing::info!(signer = self.name(), "signing archive");
        thread::sleep(self.delay);
        // fs::copy truncates an existing target
        Ok(fs::copy(unsigned, signed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_output() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("in.apk");
        let dst = tmp.path().join("out.apk");
        fs::write(&src, b"PK-short").unwrap();
        fs::write(&dst, b"a much longer stale file that should vanish").unwrap();

        let signer = CopySigner {
            delay: Duration::ZERO,
        };
        assert_eq!(signer.sign(&src, &dst).unwrap(), 8);
        assert_eq!(fs::read(&dst).unwrap(), b"PK-short");
    }

    #[test]
    fn missing_input_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let signer = CopySigner {
            delay: Duration::ZERO,
        };
        assert!(
            signer
                .sign(&tmp.path().join("nope.apk"), &tmp.path().join("o.apk"))
                .is_err()
        );
    }
}
