// Trait seam for the language-model collaborator.
//
// The pipeline only ever needs "prompt in, raw text out" — extraction
// stages do their own parsing and recovery on the result. Keeping the
// seam this narrow lets tests script model output verbatim (fixtures.rs)
// with no network involved.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Completer: Send + Sync {
    /// One prompt, one plain-text response. The text may or may not be
    /// well-formed JSON; callers decide what to do with it.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl Completer for ai_client::Groq {
    async fn complete(&self, prompt: &str) -> Result<String> {
        ai_client::Groq::complete(self, prompt).await
    }
}
