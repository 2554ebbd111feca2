use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use texgen::llm::{
    Availability, GenerationRequest, GenerationResult, InferenceClient, ModelDescriptor,
};

/// Mock inference client for testing
#[derive(Debug)]
pub struct MockInferenceClient {
    pub availability: Arc<Mutex<Availability>>,
    pub results: Arc<Mutex<Vec<GenerationResult>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            availability: Arc::new(Mutex::new(Availability::disconnected(
                "mock: no availability configured",
            ))),
            results: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn connected(models: &[&str]) -> Self {
        let models = models.iter().map(|m| ModelDescriptor::new(*m)).collect();
        Self::new().with_availability(Availability::connected(models, "mock: connected"))
    }

    pub fn with_availability(self, availability: Availability) -> Self {
        *self.availability.lock().unwrap() = availability;
        self
    }

    pub fn with_results(self, results: Vec<GenerationResult>) -> Self {
        *self.results.lock().unwrap() = results;
        self
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn check_availability(&self) -> Availability {
        self.availability.lock().unwrap().clone()
    }

    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.requests.lock().unwrap().push(request.clone());

        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return GenerationResult::failure("mock: no more results available");
        }
        results.remove(0)
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
