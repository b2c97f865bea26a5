use std::sync::Arc;

use tokio::sync::Mutex;

use moveo_catalog::Ledger;
use moveo_core::CredentialVerifier;
use moveo_genai::TextGenerator;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

/// Shared handler state. The ledger sits behind a single mutex so every
/// ledger operation runs to completion before the next one starts.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Mutex<Ledger>>,
    pub generator: Arc<dyn TextGenerator>,
    pub identity: Arc<dyn CredentialVerifier>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(
        ledger: Ledger,
        generator: Arc<dyn TextGenerator>,
        identity: Arc<dyn CredentialVerifier>,
        auth: AuthConfig,
    ) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            generator,
            identity,
            auth,
        }
    }
}
