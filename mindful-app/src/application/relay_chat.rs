use crate::domain::ChatRequest;
use crate::infrastructure::groq::GroqClient;
use mindful_errors::AppError;

pub struct RelayChat {
    client: GroqClient,
}

impl RelayChat {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    /// Checks that a credential is loaded and usable. Does not contact Groq.
    pub fn initialize(&self) -> Result<(), AppError> {
        self.client.authorization_header()?;
        tracing::info!("LLM service initialized successfully");
        Ok(())
    }

    pub async fn execute(&self, request: &ChatRequest) -> Result<String, AppError> {
        let message = request.validated_message()?;
        tracing::debug!("Received message: {}", message);
        self.client.complete(message).await
    }
}
