use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::market::MarketInsights;
use crate::matching::scorer::{MatchScorer, WeightedMatchScorer};
use crate::resume::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind the `Arc`s is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    pub resume_parser: Arc<ResumeParser>,
    pub market: Arc<MarketInsights>,
}

impl AppState {
    /// Builds every derived component from an already loaded catalog.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let scorer = Arc::new(WeightedMatchScorer::new(catalog.sectors.clone()));
        let resume_parser = Arc::new(ResumeParser::new(&catalog.skills));
        let market = Arc::new(MarketInsights::build(&catalog.internships));

        AppState {
            config,
            catalog: Arc::new(catalog),
            scorer,
            resume_parser,
            market,
        }
    }
}
