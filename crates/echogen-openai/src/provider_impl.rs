use std::{future::Future, pin::Pin, sync::Arc};

use echogen_core::{
    error::Result,
    provider::{GenerationCall, GenerationProvider},
};

use crate::{api_v1::ChatCompletionRequest, error::OpenAiError, OpenAiAdapter};

impl GenerationProvider for OpenAiAdapter {
    fn invoke<'p>(
        &'p self,
        call: GenerationCall,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::from(call);
            let response = client.chat_completion(request).await?;

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            // Empty content is left to the orchestrator's validator, which
            // treats it as a failed attempt rather than a transport error.
            Ok(first_choice.message.content.unwrap_or_default())
        })
    }
}
