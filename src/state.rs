use std::sync::Arc;

use crate::config::Config;
use crate::stateless_llm::{OpenAICompatibleLLM, StatelessLLMInterface};
use crate::translate::prompts::PersonaTable;
use crate::translate::{PipelineOptions, TranslationPipeline};

/// Immutable per-process state; every request gets a cheap clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<TranslationPipeline>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(OpenAICompatibleLLM::new(
            config.model_id.clone(),
            config.api_base_url.clone(),
            config.openrouter_api_key.clone(),
        ));
        Self::with_llm(config, llm)
    }

    /// Build state around any completion backend.
    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        let options = PipelineOptions {
            detect_max_tokens: config.detect_max_tokens,
            generate_max_tokens: config.generate_max_tokens,
            detection_required: config.detection_required,
        };
        let pipeline = TranslationPipeline::new(llm, PersonaTable::default(), options);

        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
