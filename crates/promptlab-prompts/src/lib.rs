//! Prompt variants for side-by-side comparison.
//!
//! Templates are flat strings with `{query}` and `{context}` placeholders;
//! a [`PromptSet`] renders every variant against the same query so the
//! wording of the prompt is the only experimental variable.

mod set;
mod template;

pub use set::{BuiltPrompt, PromptError, PromptPreview, PromptSet, VariantInfo};
pub use template::PromptTemplate;
