//! TLS material loading

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use rustls_pki_types::{CertificateDer, PrivateKeyDer};

option_set! {
    /// Options accepted by `TlsContext::new`
    pub enum TlsOption {
        /// PEM certificate chain path
        Cert(String) => "cert",
        /// PEM private key path
        Key(String) => "key",
        /// PEM root certificate path
        Ca(String) => "ca",
        InsecureSkipVerify(bool) => "insecure_skip_verify",
    }
}

/// Errors that can occur while loading TLS material
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("TLS {0} path is not set")]
    MissingMaterial(&'static str),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No certificate found in {path}")]
    NoCertificate { path: PathBuf },

    #[error("No private key found in {path}")]
    NoPrivateKey { path: PathBuf },
}

pub type TlsResult<T> = Result<T, TlsError>;

/// Parsed certificate chain, private key and optional roots
///
/// Only local validation is done: every file must exist and hold at least
/// one PEM block of the expected kind. Later options override earlier ones.
pub struct TlsContext {
    cert_chain: Vec<CertificateDer<'static>>,
    private_key: PrivateKeyDer<'static>,
    roots: Vec<CertificateDer<'static>>,
    insecure_skip_verify: bool,
}

impl TlsContext {
    pub fn new(opts: impl IntoIterator<Item = TlsOption>) -> TlsResult<Self> {
        let mut cert = String::new();
        let mut key = String::new();
        let mut ca = String::new();
        let mut insecure_skip_verify = false;

        for opt in opts {
            match opt {
                TlsOption::Cert(path) => cert = path,
                TlsOption::Key(path) => key = path,
                TlsOption::Ca(path) => ca = path,
                TlsOption::InsecureSkipVerify(flag) => insecure_skip_verify = flag,
            }
        }

        if cert.is_empty() {
            return Err(TlsError::MissingMaterial("cert"));
        }
        if key.is_empty() {
            return Err(TlsError::MissingMaterial("key"));
        }

        let cert_chain = load_certs(Path::new(&cert))?;
        let private_key = load_private_key(Path::new(&key))?;
        let roots = if ca.is_empty() {
            Vec::new()
        } else {
            load_certs(Path::new(&ca))?
        };

        Ok(Self {
            cert_chain,
            private_key,
            roots,
            insecure_skip_verify,
        })
    }

    pub fn cert_chain(&self) -> &[CertificateDer<'static>] {
        &self.cert_chain
    }

    pub fn private_key(&self) -> &PrivateKeyDer<'static> {
        &self.private_key
    }

    /// Root certificates; empty when no CA was configured
    pub fn roots(&self) -> &[CertificateDer<'static>] {
        &self.roots
    }

    pub fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }
}

impl Clone for TlsContext {
    fn clone(&self) -> Self {
        Self {
            cert_chain: self.cert_chain.clone(),
            private_key: self.private_key.clone_key(),
            roots: self.roots.clone(),
            insecure_skip_verify: self.insecure_skip_verify,
        }
    }
}

impl PartialEq for TlsContext {
    fn eq(&self, other: &Self) -> bool {
        self.cert_chain == other.cert_chain
            && self.private_key.secret_der() == other.private_key.secret_der()
            && self.roots == other.roots
            && self.insecure_skip_verify == other.insecure_skip_verify
    }
}

impl std::fmt::Debug for TlsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsContext")
            .field("cert_chain", &self.cert_chain.len())
            .field("private_key", &"<redacted>")
            .field("roots", &self.roots.len())
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .finish()
    }
}

fn open(path: &Path) -> TlsResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TlsError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn load_certs(path: &Path) -> TlsResult<Vec<CertificateDer<'static>>> {
    let mut reader = open(path)?;
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TlsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    if certs.is_empty() {
        return Err(TlsError::NoCertificate {
            path: path.to_path_buf(),
        });
    }
    Ok(certs)
}

fn load_private_key(path: &Path) -> TlsResult<PrivateKeyDer<'static>> {
    let mut reader = open(path)?;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|source| TlsError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| TlsError::NoPrivateKey {
            path: path.to_path_buf(),
        })
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn path_opt(f: fn(String) -> TlsOption, path: &Path) -> TlsOption {
        f(path.display().to_string())
    }

    #[test]
    fn test_load_material() {
        let dir = tempdir().unwrap();
        let (cert, key, ca) = write_material(dir.path());

        let ctx = TlsContext::new(vec![
            path_opt(TlsOption::Cert, &cert),
            path_opt(TlsOption::Key, &key),
            path_opt(TlsOption::Ca, &ca),
            TlsOption::InsecureSkipVerify(true),
        ])
        .unwrap();

        assert_eq!(ctx.cert_chain().len(), 1);
        assert_eq!(ctx.cert_chain()[0].to_vec(), vec![1u8, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ctx.roots().len(), 1);
        assert!(ctx.insecure_skip_verify());
        assert_eq!(ctx.clone(), ctx);
        assert!(format!("{:?}", ctx).contains("<redacted>"));
    }

    #[test]
    fn test_ca_is_optional() {
        let dir = tempdir().unwrap();
        let (cert, key, _) = write_material(dir.path());

        let ctx = TlsContext::new(vec![path_opt(TlsOption::Cert, &cert), path_opt(TlsOption::Key, &key)]).unwrap();
        assert!(ctx.roots().is_empty());
        assert!(!ctx.insecure_skip_verify());
    }

    #[test]
    fn test_missing_material() {
        let err = TlsContext::new(Vec::new()).unwrap_err();
        assert!(matches!(err, TlsError::MissingMaterial("cert")));

        let err = TlsContext::new(vec![TlsOption::Cert("cert.pem".into())]).unwrap_err();
        assert!(matches!(err, TlsError::MissingMaterial("key")));
    }

    #[test]
    fn test_unreadable_file() {
        let dir = tempdir().unwrap();
        let (_, key, _) = write_material(dir.path());

        let err = TlsContext::new(vec![
            path_opt(TlsOption::Cert, &dir.path().join("absent.pem")),
            path_opt(TlsOption::Key, &key),
        ])
        .unwrap_err();
        match err {
            TlsError::Io { path, .. } => assert!(path.ends_with("absent.pem")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_pem_kind() {
        let dir = tempdir().unwrap();
        let (cert, key, _) = write_material(dir.path());
        let garbage = dir.path().join("garbage.pem");
        fs::write(&garbage, "not a pem file\n").unwrap();

        // a key file has no certificate block
        let err = TlsContext::new(vec![path_opt(TlsOption::Cert, &key), path_opt(TlsOption::Key, &key)]).unwrap_err();
        assert!(matches!(err, TlsError::NoCertificate { .. }));

        let err = TlsContext::new(vec![path_opt(TlsOption::Cert, &cert), path_opt(TlsOption::Key, &garbage)]).unwrap_err();
        assert!(matches!(err, TlsError::NoPrivateKey { .. }));

        let err = TlsContext::new(vec![
            path_opt(TlsOption::Cert, &cert),
            path_opt(TlsOption::Key, &key),
            path_opt(TlsOption::Ca, &garbage),
        ])
        .unwrap_err();
        assert!(matches!(err, TlsError::NoCertificate { .. }));
    }

    #[test]
    fn test_option_kinds() {
        assert_eq!(TlsOption::Cert(String::new()).kind(), "cert");
        assert_eq!(TlsOption::InsecureSkipVerify(false).kind(), "insecure_skip_verify");
    }
}
