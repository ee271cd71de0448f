use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use super::errors::{CryptoError, Result};

/// HMAC digest used to sign a webhook payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// `X-Hub-Signature`.
    Sha1,
    /// `X-Hub-Signature-256`.
    Sha256,
}

impl SignatureAlgorithm {
    /// Header value prefix, separator included.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1=",
            Self::Sha256 => "sha256=",
        }
    }
}

/// Signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature<'a> {
    algorithm: SignatureAlgorithm,
    digest: &'a str,
}

impl<'a> Signature<'a> {
    /// Build a signature from a bare hex digest.
    pub fn new(algorithm: SignatureAlgorithm, digest: &'a str) -> Self {
        Self { algorithm, digest }
    }

    /// Parse a signature header value, like `sha1=0123...`.
    pub fn parse(header_value: &'a str) -> Result<Self> {
        [SignatureAlgorithm::Sha256, SignatureAlgorithm::Sha1]
            .into_iter()
            .find_map(|algorithm| {
                header_value
                    .strip_prefix(algorithm.prefix())
                    .map(|digest| Self::new(algorithm, digest))
            })
            .ok_or_else(|| CryptoError::UnsupportedSignaturePrefix {
                sig: header_value.to_string(),
            })
    }

    /// Get the signature algorithm.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// Check if a signature is valid.
    ///
    /// The digest comparison runs in constant time.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool> {
        let decoded_signature =
            hex::decode(self.digest).map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.digest.to_string(),
            })?;

        match self.algorithm {
            SignatureAlgorithm::Sha1 => {
                let mut hmac = Hmac::<Sha1>::new_from_slice(secret.as_bytes())
                    .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
                hmac.update(body);
                Ok(hmac.verify_slice(&decoded_signature).is_ok())
            }
            SignatureAlgorithm::Sha256 => {
                let mut hmac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
                    .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
                hmac.update(body);
                Ok(hmac.verify_slice(&decoded_signature).is_ok())
            }
        }
    }

    /// Compute a full header value (prefix included) for a body.
    pub fn sign(algorithm: SignatureAlgorithm, body: &[u8], secret: &str) -> Result<String> {
        let digest = match algorithm {
            SignatureAlgorithm::Sha1 => {
                let mut hmac = Hmac::<Sha1>::new_from_slice(secret.as_bytes())
                    .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
                hmac.update(body);
                hex::encode(hmac.finalize().into_bytes())
            }
            SignatureAlgorithm::Sha256 => {
                let mut hmac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
                    .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
                hmac.update(body);
                hex::encode(hmac.finalize().into_bytes())
            }
        };

        Ok(format!("{}{}", algorithm.prefix(), digest))
    }
}
