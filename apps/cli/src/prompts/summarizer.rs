#![allow(dead_code)]

// Summarizer prompts — full-paper structured review plus the staged
// summarization chain (by-parts notes -> narrative -> copywriter pass)
// and the markdown article and title one-worder used by the site.

use serde::{Deserialize, Serialize};

/// The main contribution of a paper, as reported by the review model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub headline: String,
    pub description: String,
}

/// The main takeaway of a paper, with a concrete applied example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Takeaways {
    pub headline: String,
    pub description: String,
    pub applied_example: String,
}

/// Full structured review of one paper. Scores run 1-3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperReview {
    pub main_contribution: Contribution,
    pub takeaways: Takeaways,
    pub category: String,
    pub novelty_analysis: String,
    pub novelty_score: i32,
    pub technical_analysis: String,
    pub technical_score: i32,
    pub enjoyable_analysis: String,
    pub enjoyable_score: i32,
}

/// Full-paper review prompt. Replace `{paper_content}` before sending.
pub const SUMMARIZER_SYSTEM_PROMPT: &str = r#"As an applied AI researcher specialized in the field of Large Language Models (LLMs), you are currently conducting a survey of the literature, building a catalogue of the main contributions and innovations of each paper, determining how they can be applied to build systems or create new products. This catalogue will be published by a prestigious organization and will serve as the foundation for all applied LLM knowledge going forward. Now, carefully read the following paper:

WHITEPAPER

{paper_content}

========================

Now answer the following questions:

1. What is the `main_contribution` of this paper? (1 line headline + 8-12 sentences)
    - Be precise. If a new algorithm or technique is introduced, describe its workings clearly and step by step.
    - Do not assume that the reader knows the meaning of new terminology presented in the paper or complex concepts.
    - Detail the benefits or advantages of these contributions, along with the real world implications for an LLM practitioner.

2. What is the main `takeaway`? (1 line headline + 8-12 sentences)
    - Focusing on the paper's contributions, explain how they can be used to create an interesting LLM application, improve current workflows, or increase efficiency when working with LLMs.
    - Be very precise, practical and specific as possible. Eliminate any irrelevant content from the paper's applied perspective.
    - Always provide a minimal but detailed applied example related to the takeaway.

3. Which category best describes this paper's primary focus? Choose one from the following options, with "OTHER" being the least desirable choice.
    a. "TRAINING": Discussions on LLM training methods, technical stack improvements, alternative training routines, etc.
    b. "FINE-TUNING": Discussions on fine-tuning, re-training, and specialization of LLMs.
    c. "ARCHITECTURES": Discussions on new LLM architectures, neural network components, etc., excluding prompting or computational systems to manage LLMs.
    d. "PROMPTING": Discussions on prompting methods, agent architectures, etc.
    e. "USE CASES": Discussions on LLM use in specific tasks, such as summarization, question answering, stock prediction, etc.
    f. "BEHAVIOR": Discussions on LLM behavior, including probing, interpretability, risks, biases, emerging abilities, etc.
    g. "OTHER": None of the above.

4. On a scale from 1 to 3, how novel is this paper? (1: not novel, 2: incrementally novel, 3: very novel)
    - Compare the paper's findings and contributions with what is presented in previous and related work.
    - Very few papers achieve the '3: very novel' category.

5. On a scale from 1 to 3, how technical is this paper? (1: not technical, 2: somewhat technical, 3: very technical)
    a) A very technical paper is difficult for a non-expert to understand, requires considerable technical knowledge, and demands advanced mathematical knowledge.
    b) A somewhat technical paper may be challenging for a layman but can be understood reasonably well by someone with a computer science background.
    c) A non-technical paper is understandable for anyone with a college degree.

6. On a scale from 1 to 3, how enjoyable is this paper? (1: hard to read, 2: ok, 3: a delight)

When assigning numerical ratings consider these guidelines:
- Rating 3/3: (EXCEPTIONAL) Only 10% of papers fall into this category; the paper must be truly exceptional for this.
- Rating 2/3: (COMMON) Most papers (50%) fall into this category.
- Rating 1/3: (RARE) Around 40% of papers belong to this category.

Pay attention to the following:
- Do not repeat the same comments across different answers.
- Make your "applied_example" different from the ones presented in the paper, and headlines different from the title.
- Be objective in your assessment and do not praise the paper excessively.

Use the JSON format as in the following example to respond.

EXAMPLE
==========
```
{
    "main_contribution": {
        "headline": "Chain-of-Thought (CoT) boosts LLM accuracy in financial sentiment analysis",
        "description": "The paper introduces the Chain-of-Thought (CoT) prompting technique for Large Language Models (LLMs) specifically targeting financial sentiment analysis. The core of CoT lies in its deviation from direct predictions. Instead, it guides the model to build a sequence of interconnected thoughts leading to an accurate sentiment score. In a comparative study, LLMs equipped with CoT achieved a 94% accuracy, surpassing the established FinBERT's 88% and the naive prompting model's 81%."
    },
    "takeaways": {
        "headline": "CoT opens new, efficient avenues for LLMs in financial analysis",
        "description": "Using the CoT prompting technique, LLMs can achieve enhanced accuracy in financial news sentiment analysis, ultimately refining stock market predictions. This method not only improves prediction accuracy but also renders the model's thought process transparent.",
        "applied_example": "When processing a news snippet like 'Company X has strong Q3 earnings', an LLM with CoT could generate: 'Strong Q3 earnings -> Likely effective management -> Expected investor trust growth -> Potential bullish market -> Possible stock price ascent.' This layered output simplifies decision-making for market analysts."
    },
    "category": "USE CASES",
    "novelty_analysis": "The paper extends the boundaries of current research by applying LLMs to financial news sentiment analysis. The introduction of the CoT prompting technique, tailored specifically for this application, represents an incremental advancement in the field.",
    "novelty_score": 2,
    "technical_analysis": "While the paper discusses a computational framework for managing LLM inputs and outputs, it does not delve into complex mathematical theories or algorithms, making it accessible to a wider audience.",
    "technical_score": 1,
    "enjoyable_analysis": "The engaging narrative style, coupled with practical insights, makes the paper an enjoyable read.",
    "enjoyable_score": 2
}
```"#;

/// Nudge appended when the model drops required fields.
pub const SUMMARIZER_HUMAN_REMINDER: &str = "Tip: Make sure to provide your response in the correct format. Do not forget to include the 'applied_example' under 'takeaways'!";

/// Section-by-section note taking. Replace `{paper_title}` and `{content}`.
pub const SUMMARIZE_BY_PARTS_TEMPLATE: &str = r#"You are an applied AI researcher specialized in the field of Large Language Models (LLMs), and you are currently reviewing the whitepaper "{paper_title}". Your goal is to analyze the paper, identify the main contributions and most interesting findings, and write a bullet point list summary of it in your own words. This summary will serve as reference for future LLM researchers within your organization, so it is very important that you are able to convey the main ideas in a clear, complete and concise manner.

Read over the following section and take notes. Use a numbered list to summarize the main ideas.

[...]
{content}
[...]

## Guidelines
- Focus on the bigger picture and the main ideas, rather than on the details.
- Be sure to explain any new concept or term you introduce. Explain how things work clearly.
- Take notes of the most important numeric results and metrics.
- If a table is presented just report back the main findings.
- Include examples in your notes that help clarify the main ideas.
- Highlight any practical applications or benefits of the paper's findings.
- Highlight unusual or unexpected findings.
- Take notes in the form of a numbered list. Do not include headers or any other elements.
- Do not include more than 10 items in your list.
- Your summary must be shorter than the original text. Remove any filler or duplicate content.
- Adhere as closely as possible to the original text. Do not alter the meaning of the notes.

## Summary
"#;

/// Converts the by-parts notes into one engaging paragraph.
/// Replace `{paper_title}` and `{previous_notes}`.
pub const NARRATIVE_SUMMARY_PROMPT: &str = r#"You are an expert New York Times technology writer tasked with writing a summary of "{paper_title}" for the Large Language Model Encyclopaedia. Your task is to read the following set of notes and convert them into an engaging paragraph.

{previous_notes}

## Guidelines
- You can reorganize and rephrase the notes in order to improve the summary's flow.
- Do not alter the meaning of the notes.
- Avoid repetition and filler content.
- Abstain from making unwarranted inferences.
- Avoid bombastic language.
- Include metrics and statistics in your report.
- Include descriptions and explanations of any new concepts or terms. Describe how new models or methodologies work.
- Highlight any practical applications or benefits of the paper's findings.
- Highlight unusual or unexpected findings.

## Summary
"#;

/// Light editing pass over the narrative summary.
/// Replace `{paper_title}` and `{previous_summary}`.
pub const COPYWRITER_PROMPT: &str = r#"You are a New York Times technology copywriter tasked with reviewing the following summary of "{paper_title}" and improving it. Your goal is to make small edits to the summary to make it more engaging and readable. You can reorganize and rephrase the text when needed, but you must not alter its meaning or remove any piece of information.

{previous_summary}

## Guidelines
- Do not include any header or titles, just one or two plain text paragraphs.
- The summary should read fluently and be engaging, as it will be published on the New York Times technology section.
- The original text was written by an expert, so please do not remove, reinterpret or edit any information.
- Avoid repetition.
- Do minimal edits to the original text.

## Improved Summary
"#;

/// Long-form markdown article from the by-parts notes.
/// Replace `{paper_title}` and `{previous_notes}`.
pub const MARKDOWN_PROMPT: &str = r#"You are a prestigious academic journalist working for the magazine Nature. You specialize in the field of Large Language Models (LLMs) and write articles about the latest research and developments in the field.
Your goal is to convert the following bullet-point notes from the {paper_title} paper into a markdown article that can be published on the Nature magazine. Pay attention to the following guidelines.

## Guidelines
- Use markdown format for your report. You can use headers, sub-headers, tables and text formatting for it. Use lists sparingly.
- The report should consist of multiple organized sections. Each section should be made up by two or more dense, information rich, and easy to read paragraphs.
- Prefer clear, narrative-style writing. Avoid bullet-point lists and short sentences.
- Feel free to move the information around, group it in common themes and rephrase it as needed.
- DO NOT alter the meaning of the notes or make any inference beyond what is presented.
- Be comprehensive and include all the information from the notes.
- Pay special focus to comparisons, metrics, results, examples, implementation details and practical applications. The article is aimed to specialized practitioners, so it should be technical and practical.
- Remove duplicates and filler content.
- Be objective and use neutral language appropriate for a scientific publication.

## Notes
{previous_notes}
"#;

/// Single visual-word title for the site's thumbnail art.
/// Replace `{title}`.
pub const TITLE_SUMMARIZER_PROMPT: &str = r#"
Reply with a single uncommon and highly-visual word related to the following title. The word must be one that is not already present in the title.
Prohibited words: [fractals]

EXAMPLES
===========
Input: Dynamic Syntax Trees in Hierarchical Neural Networks
forest palms

Input: Recursive Learning Algorithms for Predictive Text Generation
labyrinths

Input: Cross-Linguistic Semantic Mapping in Machine Translation
tongues

YOUR TURN
Input: {title}
Output:"#;
