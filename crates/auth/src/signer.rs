//! HMAC-SHA256 request signing for the Binance futures API.

use crate::credentials::ApiCredentials;
use crate::params::RequestParams;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Request signer for authenticated Binance API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size")
    }

    /// Sign a message and return the hex-encoded signature.
    ///
    /// This computes HMAC-SHA256 of the message using the secret key
    /// and returns the result as a lowercase hex string.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = self.mac();
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign the canonical query string of `params`.
    ///
    /// `params` must not already contain `signature`; the caller appends the
    /// returned value as the last parameter.
    pub fn sign_params(&self, params: &RequestParams) -> String {
        debug_assert!(!params.contains("signature"));
        self.sign(&params.to_query_string())
    }

    /// Check a hex signature against `message` in constant time.
    pub fn verify(&self, message: &str, signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };

        let mut mac = self.mac();
        mac.update(message.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}
