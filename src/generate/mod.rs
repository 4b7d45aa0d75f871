pub mod normalize;
pub mod prompt;

pub use normalize::normalize_comment;
pub use prompt::build_prompt;

use crate::provider::LlmProvider;

/// Generate a normalized Doxygen block for `entity_name`.
///
/// Returns `None` only when the provider call fails; the cause is logged here and
/// never propagated. Any text the provider returns is normalized into a valid block.
pub fn generate(provider: &dyn LlmProvider, context: &str, entity_name: &str) -> Option<String> {
    let prompt = build_prompt(context, entity_name);
    match provider.complete(&prompt) {
        Ok(raw) => Some(normalize_comment(&raw)),
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                model = provider.model(),
                "error generating comment for {entity_name}: {e}"
            );
            None
        }
    }
}
