use crate::IdentityFlow;

use lb_auth::{CredentialHasher, JwtValidator, TokenIssuer};
use lb_db::UserStore;

use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityFlow,
    pub tokens: Arc<TokenIssuer>,
    pub validator: Arc<JwtValidator>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: TokenIssuer,
        validator: JwtValidator,
    ) -> Self {
        Self {
            identity: IdentityFlow::new(store, hasher),
            tokens: Arc::new(tokens),
            validator: Arc::new(validator),
        }
    }
}
