//! TLS node

use serde::{Deserialize, Serialize};

use super::traits::Bind;
use crate::clients::tls::{TlsContext, TlsOption, TlsResult};
use crate::resolve::{bind_str, strip_file_scheme, VarSource};

/// TLS material for a client or server
///
/// Paths may be plain, `file://` prefixed or placeholders. Binding only
/// resolves placeholders; the scheme is stripped when options are built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TLS {
    pub enabled: bool,
    pub cert: String,
    pub key: String,
    pub ca: String,
    pub insecure_skip_verify: bool,
}

impl Bind for TLS {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        for path in [&mut self.cert, &mut self.key, &mut self.ca] {
            bind_str(path, vars);
        }
        self
    }
}

impl TLS {
    /// Options for `TlsContext::new`
    pub fn opts(&self) -> Vec<TlsOption> {
        vec![
            TlsOption::Cert(strip_file_scheme(&self.cert).to_string()),
            TlsOption::Key(strip_file_scheme(&self.key).to_string()),
            TlsOption::Ca(strip_file_scheme(&self.ca).to_string()),
            TlsOption::InsecureSkipVerify(self.insecure_skip_verify),
        ]
    }

    /// Load the configured material
    pub fn build(&self) -> TlsResult<TlsContext> {
        TlsContext::new(self.opts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::tls::fixtures::write_material;
    use crate::clients::tls::TlsError;
    use crate::resolve::MemoryVars;
    use tempfile::tempdir;

    #[test]
    fn test_bind_resolves_placeholders() {
        let vars = MemoryVars::new()
            .with("TLS_CERT", "file:///etc/tls/cert.pem")
            .with("TLS_KEY", "/etc/tls/key.pem");
        let mut tls = TLS {
            enabled: true,
            cert: "_TLS_CERT_".to_string(),
            key: "_TLS_KEY_".to_string(),
            ca: "file:///etc/tls/ca.pem".to_string(),
            insecure_skip_verify: false,
        };
        tls.bind_with(&vars);

        assert_eq!(tls.cert, "file:///etc/tls/cert.pem");
        assert_eq!(tls.key, "/etc/tls/key.pem");
        assert_eq!(tls.ca, "file:///etc/tls/ca.pem");

        let once = tls.clone();
        tls.bind_with(&vars);
        assert_eq!(tls, once);

        let paths: Vec<_> = tls.opts().into_iter().take(3).collect();
        assert_eq!(
            paths,
            vec![
                TlsOption::Cert("/etc/tls/cert.pem".to_string()),
                TlsOption::Key("/etc/tls/key.pem".to_string()),
                TlsOption::Ca("/etc/tls/ca.pem".to_string()),
            ]
        );
    }

    #[test]
    fn test_bind_is_idempotent_with_file_scheme() {
        let vars = MemoryVars::new().with("CERT", "/etc/tls/cert.pem");
        let mut tls = TLS {
            cert: "file://_CERT_".to_string(),
            key: "file://file:///x.pem".to_string(),
            ..Default::default()
        };
        tls.bind_with(&vars);
        let once = tls.clone();
        tls.bind_with(&vars);

        assert_eq!(tls, once);
        assert_eq!(tls.cert, "file://_CERT_");
        assert_eq!(tls.key, "file://file:///x.pem");
    }

    #[test]
    fn test_opts_order() {
        let tls = TLS {
            cert: "c".into(),
            key: "k".into(),
            ..Default::default()
        };
        let kinds: Vec<_> = tls.opts().iter().map(TlsOption::kind).collect();
        assert_eq!(kinds, vec!["cert", "key", "ca", "insecure_skip_verify"]);
    }

    #[test]
    fn test_build() {
        let dir = tempdir().unwrap();
        let (cert, key, ca) = write_material(dir.path());
        let mut tls = TLS {
            enabled: true,
            cert: format!("file://{}", cert.display()),
            key: key.display().to_string(),
            ca: ca.display().to_string(),
            insecure_skip_verify: false,
        };
        let ctx = tls.bind_with(&MemoryVars::new()).build().unwrap();
        assert_eq!(ctx.roots().len(), 1);

        tls.cert.clear();
        assert!(matches!(tls.build(), Err(TlsError::MissingMaterial("cert"))));
    }
}
