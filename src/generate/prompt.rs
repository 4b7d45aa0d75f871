/// Instruction template sent for each undocumented entity.
///
/// `{context}` and `{entity_name}` are substituted by [`build_prompt`]. The context
/// is only there to disambiguate the target; the model is asked for exactly one block.
pub const PROMPT_TEMPLATE: &str = r#"You are a C++ documentation expert. Generate a comprehensive Doxygen comment for the following C++ entity.

Instructions:
- Use proper Doxygen tags (@brief, @param, @return, @throws, etc.)
- Include detailed descriptions for complex functions
- Document all parameters and return values clearly
- Add relevant @see references if applicable
- Use @since, @warning, or @note tags when appropriate
- Focus on the TARGET ENTITY, but use the context to understand its purpose
- Do not document any other entity that appears in the context
- Generate ONLY the Doxygen comment block (starting with /** and ending with */)
- Do not include any code, explanations, or markdown formatting

Context:
```cpp
{context}
```

Generate a comprehensive Doxygen comment for the target entity: {entity_name}

Response format: Start with /** and end with */"#;

pub fn build_prompt(context: &str, entity_name: &str) -> String {
    // Entity first: a context containing the literal "{entity_name}" must survive intact.
    PROMPT_TEMPLATE
        .replacen("{entity_name}", entity_name, 1)
        .replacen("{context}", context, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_both_fields() {
        let prompt = build_prompt("class Widget { void resize(int w); };", "Widget::resize");
        assert!(prompt.contains("```cpp\nclass Widget { void resize(int w); };\n```"));
        assert!(prompt.contains("for the target entity: Widget::resize"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{entity_name}"));
    }

    #[test]
    fn test_placeholder_text_in_context_is_kept() {
        let prompt = build_prompt("// see {entity_name}", "foo");
        assert!(prompt.contains("// see {entity_name}"));
        assert!(prompt.contains("target entity: foo"));
    }

    #[test]
    fn test_context_is_only_for_disambiguation() {
        let prompt = build_prompt("class A {}; class B {};", "B");
        assert!(prompt.contains("Do not document any other entity that appears in the context"));
        assert!(prompt.contains("Generate ONLY the Doxygen comment block"));
    }
}
