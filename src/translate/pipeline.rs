use std::sync::Arc;

use tracing::{info, warn};

use super::interface::{TranslateRequest, TranslateRequestBody, TranslateResponse, Tone};
use super::prompts::{detection_prompt, PersonaTable};
use crate::error::RelayError;
use crate::stateless_llm::{ChatMessage, CompletionError, StatelessLLMInterface};

/// Token limits and detection policy for one pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub detect_max_tokens: u32,
    pub generate_max_tokens: u32,
    pub detection_required: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            detect_max_tokens: 10,
            generate_max_tokens: 100,
            detection_required: false,
        }
    }
}

/// validate → detect → generate → respond
pub struct TranslationPipeline {
    llm: Arc<dyn StatelessLLMInterface>,
    personas: PersonaTable,
    options: PipelineOptions,
}

impl TranslationPipeline {
    pub fn new(
        llm: Arc<dyn StatelessLLMInterface>,
        personas: PersonaTable,
        options: PipelineOptions,
    ) -> Self {
        Self {
            llm,
            personas,
            options,
        }
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Ask the model which language `text` is in. The trimmed answer is returned as-is.
    pub async fn detect_language(&self, text: &str) -> Result<String, CompletionError> {
        self.llm
            .chat_completion(
                vec![ChatMessage::user(detection_prompt(text))],
                self.options.detect_max_tokens,
            )
            .await
    }

    pub async fn generate(
        &self,
        text: &str,
        tone: Tone,
        target_lang: &str,
    ) -> Result<String, RelayError> {
        let instruction = self.personas.instruction_for(tone, text, target_lang);
        self.llm
            .chat_completion(
                vec![ChatMessage::system(instruction)],
                self.options.generate_max_tokens,
            )
            .await
            .map_err(|e| match e {
                CompletionError::Empty { body } => RelayError::EmptyResponse { body },
                other => RelayError::Upstream(other),
            })
    }

    /// Validate a raw body and run it through the pipeline.
    pub async fn handle(&self, body: TranslateRequestBody) -> Result<TranslateResponse, RelayError> {
        let request = TranslateRequest::try_from(body)?;
        self.translate(&request).await
    }

    pub async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, RelayError> {
        let source_lang = match self.detect_language(&request.message).await {
            Ok(label) => {
                info!("Detected Source Language: {}", label);
                Some(label)
            }
            Err(e) if self.options.detection_required => return Err(RelayError::Upstream(e)),
            Err(e) => {
                warn!("Language detection failed, continuing without it: {}", e);
                None
            }
        };

        let translation = self
            .generate(&request.message, request.tone, &request.target_lang)
            .await?;

        Ok(TranslateResponse {
            translation,
            source_lang,
        })
    }
}
