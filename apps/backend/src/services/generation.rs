//! Flashcard generation with a remote model and heuristic fallbacks.
//!
//! The remote path runs in ordered tiers, each filling what the previous
//! one left short:
//! 1. Remote cards per chunk, with a heuristic fallback for chunks that
//!    produced nothing.
//! 2. Heuristic cards over the whole content for any remaining shortfall.
//!
//! If the model never becomes available the whole request is handed to the
//! heuristic builder.

use std::sync::Arc;
use std::time::Duration;

use flashcard_core::chunker::{self, DEFAULT_CHUNK_SIZE};
use flashcard_core::{
    parse_card, prompts_for_chunk, Flashcard, GenerationRequest, HeuristicCardBuilder, Subject,
};
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::services::remote::{Availability, TextGenerator};

/// Timing and sizing for the remote path.
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub chunk_size: usize,
    pub probe_attempts: u32,
    pub probe_interval: Duration,
    /// Upper bound on time spent waiting for the model to load.
    pub max_probe_wait: Duration,
    pub request_timeout: Duration,
    /// Pause between generation calls.
    pub call_delay: Duration,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            probe_attempts: 6,
            probe_interval: Duration::from_secs(10),
            max_probe_wait: Duration::from_secs(60),
            request_timeout: Duration::from_secs(30),
            call_delay: Duration::from_secs(1),
        }
    }
}

/// How a set of cards was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Remote path ran, possibly topped up heuristically.
    Remote,
    /// Heuristic generation was requested.
    Offline,
    /// Remote model was unavailable; the request went to the heuristic builder.
    OfflineFallback,
}

/// Cards produced for one request, plus warnings for the caller.
#[derive(Debug, Clone)]
pub struct Generation {
    pub cards: Vec<Flashcard>,
    pub strategy: Strategy,
    pub warnings: Vec<String>,
}

impl Generation {
    /// Run the heuristic builder only.
    pub fn offline(heuristic: &HeuristicCardBuilder, request: &GenerationRequest) -> Self {
        Self {
            cards: heuristic.build(&request.content, request.subject, request.count),
            strategy: Strategy::Offline,
            warnings: Vec::new(),
        }
    }
}

/// Cards accumulated toward a target count.
struct Deck {
    cards: Vec<Flashcard>,
    target: usize,
}

impl Deck {
    fn new(target: usize) -> Self {
        Self {
            cards: Vec::with_capacity(target),
            target,
        }
    }

    fn remaining(&self) -> usize {
        self.target.saturating_sub(self.cards.len())
    }

    fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    fn extend(&mut self, cards: Vec<Flashcard>) {
        self.cards.extend(cards);
    }

    fn into_cards(mut self) -> Vec<Flashcard> {
        self.cards.truncate(self.target);
        self.cards
    }
}

#[derive(Debug, Clone, Copy)]
enum Tier {
    RemoteChunks,
    ContentHeuristic,
}

const TIERS: [Tier; 2] = [Tier::RemoteChunks, Tier::ContentHeuristic];

/// Generates cards with a remote model, degrading to heuristics on failure.
pub struct RemoteCardBuilder {
    generator: Arc<dyn TextGenerator>,
    heuristic: Arc<HeuristicCardBuilder>,
    settings: RemoteSettings,
}

impl RemoteCardBuilder {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        heuristic: Arc<HeuristicCardBuilder>,
        settings: RemoteSettings,
    ) -> Self {
        Self {
            generator,
            heuristic,
            settings,
        }
    }

    /// Build at most `request.count` cards. Never fails; remote errors
    /// become warnings and heuristic cards.
    pub async fn build(&self, request: &GenerationRequest) -> Generation {
        if !self.wait_until_ready().await {
            warn!("Remote model unavailable, generating offline");
            let mut generation = Generation::offline(&self.heuristic, request);
            generation.strategy = Strategy::OfflineFallback;
            generation
                .warnings
                .push("Remote model unavailable; cards were generated offline".to_string());
            return generation;
        }

        let mut deck = Deck::new(request.count);
        let mut warnings = Vec::new();

        for tier in TIERS {
            if deck.is_full() {
                break;
            }
            match tier {
                Tier::RemoteChunks => self.generate_chunks(request, &mut deck, &mut warnings).await,
                Tier::ContentHeuristic => {
                    let needed = deck.remaining();
                    debug!(needed, "Filling shortfall from whole content");
                    deck.extend(self.heuristic.build(&request.content, request.subject, needed));
                }
            }
        }

        Generation {
            cards: deck.into_cards(),
            strategy: Strategy::Remote,
            warnings,
        }
    }

    /// Poll the model until it is ready, bounded by attempts and total wait.
    async fn wait_until_ready(&self) -> bool {
        let started = Instant::now();
        let attempts = self.settings.probe_attempts;

        for attempt in 1..=attempts {
            match self.generator.probe().await {
                Ok(Availability::Ready) => return true,
                Ok(Availability::Loading) => {
                    info!(attempt, "Model is loading, please wait");
                    if attempt == attempts
                        || started.elapsed() + self.settings.probe_interval
                            > self.settings.max_probe_wait
                    {
                        break;
                    }
                    sleep(self.settings.probe_interval).await;
                }
                Err(e) => {
                    warn!(error = %e, "Model probe failed");
                    return false;
                }
            }
        }

        false
    }

    async fn generate_chunks(
        &self,
        request: &GenerationRequest,
        deck: &mut Deck,
        warnings: &mut Vec<String>,
    ) {
        let chunks = chunker::split(&request.content, self.settings.chunk_size);
        let per_chunk = (request.count / chunks.len()).max(1);

        for (idx, chunk) in chunks.iter().enumerate() {
            if deck.is_full() {
                break;
            }
            info!(chunk = idx + 1, total = chunks.len(), "Generating flashcards from chunk");

            let mut cards = self
                .generate_chunk(chunk, request.subject, per_chunk, deck.remaining(), warnings)
                .await;

            if cards.is_empty() {
                debug!(chunk = idx + 1, "No remote cards for chunk, using heuristics");
                cards = self.heuristic.build(chunk, request.subject, per_chunk);
            }

            deck.extend(cards);
        }
    }

    async fn generate_chunk(
        &self,
        chunk: &str,
        subject: Subject,
        per_chunk: usize,
        remaining: usize,
        warnings: &mut Vec<String>,
    ) -> Vec<Flashcard> {
        let mut cards = Vec::new();

        for prompt in prompts_for_chunk(chunk, subject, per_chunk) {
            if cards.len() >= remaining {
                break;
            }

            match self.generator.generate(&prompt).await {
                Ok(text) => {
                    if let Some(card) = parse_card(&text, chunk) {
                        cards.push(card);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Error generating card");
                    warnings.push(format!("Error generating card: {}", e));
                }
            }

            sleep(self.settings.call_delay).await;
        }

        cards
    }
}
