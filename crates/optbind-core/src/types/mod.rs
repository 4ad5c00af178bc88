//! Closed string vocabularies carried by configuration fields
//!
//! Every vocabulary is a `#[repr(u8)]` enum whose zero member is `Unknown`.
//! Parsing is case-insensitive and never fails; stringifying never panics and
//! renders `Unknown` (including any out-of-range `u8`) as `"unknown"`.

/// Declare a closed vocabulary enum with its canonical strings
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $repr:literal => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(u8)]
        $vis enum $name {
            /// Unrecognized or empty input
            #[default]
            Unknown = 0,
            $( $(#[$vmeta])* $variant = $repr, )+
        }

        impl $name {
            /// Every recognized member, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Case-insensitive parse; unrecognized input yields `Unknown`
            pub fn parse(s: &str) -> Self {
                $(
                    if s.eq_ignore_ascii_case($text) {
                        return $name::$variant;
                    }
                )+
                $name::Unknown
            }

            /// Canonical lower-case form
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::Unknown => "unknown",
                    $( $name::$variant => $text, )+
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown)
            }

            /// Replace `Unknown` with `fallback`
            pub fn or(self, fallback: Self) -> Self {
                if self.is_known() { self } else { fallback }
            }

            /// Normalize a field: parse it, fall back when unrecognized and
            /// write the canonical form back
            pub fn canonicalize(field: &mut String, fallback: Self) -> Self {
                let parsed = Self::parse(field);
                let value = parsed.or(fallback);
                if !parsed.is_known() {
                    $crate::debug_log!(
                        "{}: {:?} is not recognized, using {}",
                        stringify!($name),
                        field,
                        value
                    );
                }
                if field.as_str() != value.as_str() {
                    field.clear();
                    field.push_str(value.as_str());
                }
                value
            }
        }

        impl From<u8> for $name {
            fn from(v: u8) -> Self {
                match v {
                    $( $repr => $name::$variant, )+
                    _ => $name::Unknown,
                }
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }
    };
}

mod compress;
mod consistency;
mod network;
mod server_mode;
mod storage;

pub use compress::CompressAlgorithm;
pub use consistency::{Consistency, SerialConsistency};
pub use network::NetworkType;
pub use server_mode::ServerMode;
pub use storage::BlobStorageType;
