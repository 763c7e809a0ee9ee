#![allow(dead_code)]

// Vector store prompts — the librarian Q&A template used to answer user
// questions over retrieved document excerpts, and the relevance check
// run over new abstracts before ingestion.

use serde::{Deserialize, Serialize};

/// Librarian Q&A system template. Replace `{context}` with the retrieved
/// document excerpts before sending.
pub const VS_SYSTEM_TEMPLATE: &str = r#"You are the GPT maestro, an expert robot librarian and maintainer of the LLMpedia. Use the following document excerpts to answer the user's question about Large Language Models (LLMs).

==========
{context}
==========

## Guidelines
- If the question is unrelated to LLMs reply without referencing the documents.
- If the user provides suggestions or feedback on the LLMpedia, acknowledge it and thank them.
- Use up to three paragraphs (or less) to provide a complete, direct and useful answer. Break down concepts step by step and avoid using complex jargon.
- Be practical and reference any existing libraries or implementations mentioned on the documents.
- Add citations referencing the relevant arxiv_codes (e.g.: use the format `*reference content* (arxiv:1234.5678)`).
- You do not need to quote or use all the documents presented. Prioritize most recent content and that with most citations.

## Response Format
Your response will consist of 3 markdown sections, as in the following template.
```
### Scratchpad
Make a list of the documents presented and determine if they provide useful information to answer the question. If so write a brief summary of how they can be used. If not, write "Not useful".

### Sketch
Use markdown nested lists to organize the main points and sketch your answer. You can also add any notes or ideas you have.

### Response
Write your final answer here. You can use up to three paragraphs to structure it. Remember to add citations (e.g.: use the format `*reference content* (arxiv:1234.5678)`).
```
"#;

/// Relevance verdict on a candidate abstract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRelevance {
    pub analysis: String,
    pub is_related: bool,
}

/// Relevance check over an abstract; the abstract follows as the user
/// message. The model answers with a [`PaperRelevance`] object.
pub const LLM_PAPER_CHECK_TEMPLATE: &str = "Analyze the following abstract and first sections of a whitepaper to determine if it is directly related to Large Language Models (LLMs) or text embeddings. Papers about diffusion models, text-to-image or text-to-video generation, are NOT related to LLMs or text embeddings.
Respond with a JSON object with your analysis and your final answer and nothing else.";

pub const LLM_PAPER_CHECK_FMT_TEMPLATE: &str = r#"OUTPUT FORMAT EXAMPLES
=======================
## Example 1
{
    "analysis": "The paper discusses prompting techniques for LLMs, hence it is directly related to LLMs.",
    "is_related": true
}

## Example 2
{
    "analysis": "The paper discusses a new LoRa technique for text-to-image diffusion models, hence it is not directly related to LLMs or text embeddings.",
    "is_related": false
}

## Example 3
{
    "analysis": "The paper discusses a new dataset for text embedding evaluation in the context of retrieval systems, hence it is directly related to text embeddings.",
    "is_related": true
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_librarian_template_has_context_placeholder() {
        assert!(VS_SYSTEM_TEMPLATE.contains("{context}"));
    }

    #[test]
    fn test_relevance_verdict_deserializes() {
        let json = r#"{
            "analysis": "The paper discusses speculative decoding for LLM inference.",
            "is_related": true
        }"#;
        let verdict: PaperRelevance = serde_json::from_str(json).unwrap();
        assert!(verdict.is_related);
    }

    #[test]
    fn test_format_examples_parse_as_relevance_verdicts() {
        let mut parsed = 0;
        for chunk in LLM_PAPER_CHECK_FMT_TEMPLATE.split("## Example") {
            if let (Some(start), Some(end)) = (chunk.find('{'), chunk.rfind('}')) {
                let verdict: PaperRelevance =
                    serde_json::from_str(&chunk[start..=end]).unwrap();
                assert!(!verdict.analysis.is_empty());
                parsed += 1;
            }
        }
        assert_eq!(parsed, 3);
    }
}
