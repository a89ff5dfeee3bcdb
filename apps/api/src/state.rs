use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum
/// extractors. Intentionally thin: the analysis core is stateless, so the
/// only long-lived collaborator is the text extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction backend. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
