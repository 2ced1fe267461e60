//! Prompt templates for the generation service.
//!
//! Each task (full analysis, per-chunk analysis, synthesis, question
//! answering) has one template per supported language, kept in a small table
//! so the orchestration logic stays wording-agnostic. Placeholders are plain
//! `{name}` markers substituted at call time.

use serde::Deserialize;
use std::str::FromStr;

/// Target language for prompts and responses.
///
/// The service is aimed at bilingual legal review, so even the English
/// templates ask the model to answer in both English and Tamil.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English-first prompts.
    #[default]
    English,
    /// Tamil-first prompts.
    Tamil,
}

impl Language {
    /// Wire name used in request and response payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Tamil => "tamil",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" => Ok(Self::English),
            "tamil" => Ok(Self::Tamil),
            _ => Err(()),
        }
    }
}

/// Template set for one language.
struct PromptSet {
    analysis: &'static str,
    chunk: &'static str,
    synthesis: &'static str,
    question: &'static str,
}

const ENGLISH_PROMPTS: PromptSet = PromptSet {
    analysis: "\
Analyze this legal document comprehensively and provide a detailed, \
understandable summary in both English and Tamil.

Document:
{document}

Please provide a detailed response in this format:

Document Type:
- What type of legal document is this?

Parties Involved:
- Who are the parties involved and what are their names and roles?

Property Details:
- Where is the property located, what type is it, and what are its \
identifiers?

Key Terms:
- What are the main terms and conditions?
- What is mentioned about money, time, and conditions?

Legal Actions:
- What legal actions will be taken and what happens in case of disputes?

Risks and Precautions:
- What risks are involved and what precautions should be taken?

Simple Summary:
- What is the main message of this document and why is it important?",
    chunk: "\
Analyze part {part} of {total} of the legal document and provide key points \
in both English and Tamil.

Document Part:
{chunk}

Key Points:
1. Parties involved
2. Property details
3. Key terms, dates, and amounts
4. Legal actions and risks",
    synthesis: "\
Based on these individual analyses of a legal document, provide a \
comprehensive summary in English with Tamil translations:

{summaries}

Please provide:
1. Complete document overview
2. All parties involved
3. Complete property details
4. All key terms, dates, and amounts
5. Legal implications and risks
6. Simple explanation for common people",
    question: "\
Answer this question based on the document with detailed, accurate \
information:

Question: {question}

Document:
{document}

Please provide your answer in this format:

Direct Answer:
- Direct response to the question

Evidence from Document:
- Relevant parts from the document with specific references and numbers

Explanation:
- Explanation of the answer and its legal implications

Important Notes:
- Important considerations and legal advice

Provide the answer in both English and Tamil.",
};

const TAMIL_PROMPTS: PromptSet = PromptSet {
    analysis: "\
இந்த சட்ட ஆவணத்தை முழுமையாக பகுப்பாய்வு செய்து விரிவான, புரிந்துகொள்ளக்கூடிய \
சுருக்கத்தை தமிழ் மற்றும் ஆங்கிலத்தில் தரவும்.

ஆவணம்:
{document}

தயவுசெய்து பின்வரும் வடிவத்தில் விரிவான பதில் தரவும்:

ஆவண வகை (Document Type):
- இது என்ன வகையான சட்ட ஆவணம்?

பங்காளிகள் (Parties Involved):
- இந்த ஆவணத்தில் யார் யார் பங்கு வகிக்கிறார்கள்? அவர்களின் பெயர்கள் மற்றும் \
பாத்திரங்கள் என்ன?

சொத்து விவரங்கள் (Property Details):
- சொத்து எங்கே உள்ளது? சொத்தின் வகை, விவரங்கள் மற்றும் அடையாளங்கள் என்ன?

முக்கிய விதிமுறைகள் (Key Terms):
- இந்த ஆவணத்தின் முக்கிய விதிமுறைகள் என்ன? பணம், காலம், நிபந்தனைகள் பற்றி \
என்ன கூறப்பட்டுள்ளது?

சட்ட நடவடிக்கைகள் (Legal Actions):
- சட்டப்படி என்ன நடவடிக்கைகள் எடுக்கப்படும்? சர்ச்சை நிலையில் என்ன செய்யப்படும்?

அபாயங்கள் மற்றும் கவனிப்புகள் (Risks & Precautions):
- இந்த ஆவணத்தில் என்ன அபாயங்கள் உள்ளன? என்ன கவனிப்புகள் எடுக்க வேண்டும்?

எளிய சுருக்கம் (Simple Summary):
- இந்த ஆவணத்தின் முக்கிய செய்தி என்ன? இது ஏன் முக்கியமானது?",
    chunk: "\
இந்த சட்ட ஆவணத்தின் பகுதி {part} / {total} ஐ பகுப்பாய்வு செய்து முக்கிய \
புள்ளிகளை தமிழ் மற்றும் ஆங்கிலத்தில் தரவும்.

ஆவண பகுதி:
{chunk}

முக்கிய புள்ளிகள்:
1. பங்காளிகள்
2. சொத்து விவரங்கள்
3. முக்கிய விதிமுறைகள், தேதிகள் மற்றும் தொகைகள்
4. சட்ட நடவடிக்கைகள் மற்றும் அபாயங்கள்",
    synthesis: "\
ஒரு சட்ட ஆவணத்தின் தனிப்பட்ட பகுப்பாய்வுகளின் அடிப்படையில் முழுமையான \
சுருக்கத்தை தமிழ் மற்றும் ஆங்கிலத்தில் தரவும்:

{summaries}

தயவுசெய்து தரவும்:
1. முழு ஆவண மேலோட்டம்
2. அனைத்து பங்காளிகளும்
3. முழு சொத்து விவரங்கள்
4. அனைத்து முக்கிய விதிமுறைகள், தேதிகள் மற்றும் தொகைகள்
5. சட்ட தாக்கங்கள் மற்றும் அபாயங்கள்
6. சாதாரண மக்களுக்கான எளிய விளக்கம்",
    question: "\
இந்த கேள்விக்கு ஆவணத்தின் அடிப்படையில் விரிவான, துல்லியமான பதில் தரவும்:

கேள்வி: {question}

ஆவணம்:
{document}

தயவுசெய்து பின்வரும் வடிவத்தில் பதில் தரவும்:

நேரடி பதில் (Direct Answer):
- கேள்விக்கு நேரடியான பதில்

ஆவணத்தில் இருந்து ஆதாரம் (Evidence from Document):
- ஆவணத்தில் இருந்து தொடர்புடைய பகுதிகள், குறிப்புகள் மற்றும் எண்கள்

விளக்கம் (Explanation):
- பதிலின் விளக்கம் மற்றும் சட்ட அர்த்தம்

கவனிப்புகள் (Important Notes):
- முக்கியமான கவனிப்புகள் மற்றும் சட்ட அறிவுரைகள்

தமிழ் மற்றும் ஆங்கிலத்தில் பதில் தரவும்.",
};

const fn templates(language: Language) -> &'static PromptSet {
    match language {
        Language::English => &ENGLISH_PROMPTS,
        Language::Tamil => &TAMIL_PROMPTS,
    }
}

/// Build the single-pass analysis prompt for a document that fits one chunk.
pub fn analysis_prompt(language: Language, document: &str) -> String {
    templates(language).analysis.replace("{document}", document)
}

/// Build the per-chunk prompt embedding the 1-based part index and total
/// chunk count.
pub fn chunk_prompt(language: Language, part: usize, total: usize, chunk: &str) -> String {
    templates(language)
        .chunk
        .replace("{part}", &part.to_string())
        .replace("{total}", &total.to_string())
        .replace("{chunk}", chunk)
}

/// Build the synthesis prompt from the ordered per-chunk summaries.
///
/// Each summary is labeled by its 1-based position, in input order, so the
/// final report can reference "part N of M" consistently.
pub fn synthesis_prompt(language: Language, summaries: &[String]) -> String {
    let labeled: Vec<String> = summaries
        .iter()
        .enumerate()
        .map(|(index, summary)| format!("--- Part {} Analysis ---\n{summary}", index + 1))
        .collect();
    templates(language)
        .synthesis
        .replace("{summaries}", &labeled.join("\n\n"))
}

/// Build the question-answering prompt for a stored or ad-hoc document.
pub fn question_prompt(language: Language, question: &str, document: &str) -> String {
    templates(language)
        .question
        .replace("{question}", question)
        .replace("{document}", document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_known_values_only() {
        assert_eq!("english".parse::<Language>(), Ok(Language::English));
        assert_eq!("Tamil".parse::<Language>(), Ok(Language::Tamil));
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn chunk_prompt_embeds_position_and_total() {
        let prompt = chunk_prompt(Language::English, 2, 3, "chunk body");
        assert!(prompt.contains("part 2 of 3"));
        assert!(prompt.contains("chunk body"));
    }

    #[test]
    fn synthesis_prompt_labels_every_summary_in_order() {
        let summaries = vec![
            "first analysis".to_string(),
            "second analysis".to_string(),
            "third analysis".to_string(),
        ];
        let prompt = synthesis_prompt(Language::English, &summaries);

        let positions: Vec<usize> = (1..=3)
            .map(|n| {
                prompt
                    .find(&format!("--- Part {n} Analysis ---"))
                    .expect("label present")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!prompt.contains("--- Part 4 Analysis ---"));
        assert!(prompt.contains("first analysis"));
        assert!(prompt.contains("third analysis"));
    }

    #[test]
    fn synthesis_prompt_supports_a_single_summary() {
        let prompt = synthesis_prompt(Language::Tamil, &["only one".to_string()]);
        assert!(prompt.contains("--- Part 1 Analysis ---"));
        assert!(prompt.contains("only one"));
    }

    #[test]
    fn question_prompt_embeds_question_and_document() {
        let prompt = question_prompt(Language::English, "Who signed?", "the deed text");
        assert!(prompt.contains("Question: Who signed?"));
        assert!(prompt.contains("the deed text"));
    }
}
