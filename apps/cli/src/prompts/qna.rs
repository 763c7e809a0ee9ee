#![allow(dead_code)]

// Q&A generation prompts — five grounded question/answer pairs per text
// chunk, stored for retrieval training. Two variants: the JSON-mode
// prompt (QnaSet response) and a completion-style prompt for base models
// that cannot be trusted with JSON.

use serde::{Deserialize, Serialize};

/// One self-contained question/answer pair grounded on a text chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QnaPair {
    /// Very specific question that does not make reference to the text.
    pub question: String,
    /// Detailed answer to the question with citation.
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QnaSet {
    pub qna_pairs: Vec<QnaPair>,
}

pub const QNA_SYSTEM_PROMPT: &str = r#"GUIDELINES
============
Generate Q&A Pairs:
- Produce five (5) applied question-answer pairs strictly grounded on the provided text snippet.
- Do not reference figures, tables or any other visual elements.
- Do not make explicit references to "the text".

Question Considerations:
- Cover a range of themes within the text to maintain diversity and avoid duplication.
- Frame each question independently; assume no continuity or relationship between them.
- Begin all your questions with "According to the LLM literature, ...".
- Do not repeat or rephrase any of the sample questions.

Answer Considerations:
- When possible borrow verbatim from the original text to maintain accuracy and style.
- Provide concise, thorough answers without adding personal opinions.
- Use the following format for citations: Smith et al. (2022, 2209.12345).
- Do not begin answers with "According to the LLM literature, ...".
- Do not reference any figures.

EXAMPLE
===========
```
...Remarkably, our study illustrates a notable enhancement in Large Language Models (LLMs) for Named Entity Recognition (NER) tasks through the innovative deployment of Reinforcement Learning (RL). To elucidate, we employ an adaptive learning framework, continually refining entity recognition algorithms via sophisticated iterative feedback mechanisms, manifesting a significant 12% increase in entity discernment accuracy within datasets, especially those encompassing financial news and social media snippets...
```
*Source:* Williams et al. (2023, 2309.12346)

[
    {
        "question": "According to the LLM literature, how can I enhance the performance of Large Language Models (LLMs) in Named Entity Recognition (NER) tasks?",
        "answer": "One way to enhance the performance of LLMs in NER tasks is through the application of Reinforcement Learning (RL). Williams et al. (2023, 2309.12346) employed an adaptive learning framework, which continually refines recognition algorithms utilizing iterative feedback, yielding a 12% improvement in entity discernment accuracy on datasets comprising financial news and social media snippets."
    },
    ...
]
"#;

/// Replace `{text_chunk}`, `{authors}`, `{year}` and `{arxiv_code}`.
pub const QNA_USER_PROMPT: &str = r#"
```
...{text_chunk}...
```
*Source:* {authors}, ({year}, {arxiv_code})"#;

/// Header line the completion-style variant steers the base model into.
pub const LLAMA_DIVIDER: &str = "Here are five self-contained, highly-specific question & answer pairs based on the paper, without referencing it directly (with citations):";

/// Completion-style Q&A prompt for base models. Replace `{text_chunk}`,
/// `{authors}`, `{year}` and `{arxiv_code}`; the model continues after
/// the trailing "Q1:" stub.
pub const LLAMA_QNA_SYSTEM_PROMPT: &str = r#"EXAMPLE
===========
```
...the ramifications of excluding ReLU activation outputs have been thoroughly investigated. Our empirical analysis uncovers an intricate trade-off between model interpretability and its classification accuracy. By removing ReLU activations, our study unearthed increased transparency in the model's decision-making processes. Nevertheless, this modification has its concomitant drawbacks, primarily evidenced by an approximate 3% degradation in classification accuracy...
```
*Source:* Mark et al. (2022, 2209.12345)

Q1: According to the LLM literature, what happens to the performance of Llama-based Large Language Model architectures in classification tasks if I remove the ReLU activation outputs?
A1: Based on the findings of Mark et al. (2022, 2209.12345), the removal of ReLU activations in Llama-based architectures reveals an existing trade-off between interpretability and accuracy. The alteration allows for more direct insight into model decision-making, marked by a notable improvement in the clarity of feature influence mappings. However, this also induces a roughly 3% decline in classification accuracy.

Q2: ...

GUIDELINES
============
Generate Q&A Pairs:
- Produce five (5) applied question-answer pairs strictly grounded on the provided text snippet.
- Do not make explicit references to the paper (e.g., "the paper", "the authors", "the study", etc.).

Question Considerations:
- Cover a range of themes within the text to maintain diversity and avoid duplication.
- Frame each question independently; assume no continuity or relationship between them.
- Provide the necessary detail to ensure the question is self-contained and understandable.
- Begin all your questions with "According to the LLM literature, ...".

Answer Considerations:
- When possible borrow verbatim from the original text to maintain accuracy and style.
- Provide concise, thorough answers without adding personal opinions.
- Always include citations. Use this format: Smith et al. (2022, 2209.12345).
- Do not begin answers with "According to the LLM literature, ...".
- Do not reference any figures.

YOUR TURN
===========
```
...{text_chunk}...
```
*Source:* {authors}, ({year}, {arxiv_code})

Here are five self-contained, highly-specific question & answer pairs based on the paper, without referencing it directly (with citations):

Q1: According to the LLM literature,"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qna_set_deserializes() {
        let json = r#"{
            "qna_pairs": [
                {
                    "question": "According to the LLM literature, how does speculative decoding speed up inference?",
                    "answer": "A small draft model proposes tokens that the target model verifies in parallel, as shown by Chen et al. (2023, 2302.01318)."
                },
                {
                    "question": "According to the LLM literature, what is the impact of RLHF on helpfulness?",
                    "answer": "Ouyang et al. (2022, 2203.02155) report large preference gains over supervised baselines."
                }
            ]
        }"#;
        let set: QnaSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.qna_pairs.len(), 2);
        assert!(set.qna_pairs[0]
            .question
            .starts_with("According to the LLM literature,"));
    }

    #[test]
    fn test_user_prompt_carries_source_placeholders() {
        for placeholder in ["{text_chunk}", "{authors}", "{year}", "{arxiv_code}"] {
            assert!(QNA_USER_PROMPT.contains(placeholder), "missing {placeholder}");
        }
    }

    #[test]
    fn test_completion_variant_ends_on_the_question_stub() {
        assert!(LLAMA_QNA_SYSTEM_PROMPT.contains(LLAMA_DIVIDER));
        assert!(LLAMA_QNA_SYSTEM_PROMPT.ends_with("Q1: According to the LLM literature,"));
    }
}
