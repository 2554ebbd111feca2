mod client;
mod prompt;
mod types;

pub use client::{InferenceClient, OllamaClient};
#[cfg(test)]
pub use client::MockInferenceClient;
pub use prompt::{build_prompt, strip_code_fences};
pub use types::{
    Availability, ConnectionState, GenerationRequest, GenerationResult, ModelDescriptor,
    SamplingOptions,
};
