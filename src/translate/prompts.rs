//! Instruction text sent to the completion API.
//!
//! The message is always embedded inside the instruction itself; the model
//! never sees it as a separate user turn during generation.

use std::collections::HashMap;

use super::interface::Tone;

/// Builds a persona instruction from the user's message.
pub type PersonaTemplate = fn(message: &str) -> String;

/// Builds the generic persona instruction from the target language and message.
pub type FallbackTemplate = fn(language: &str, message: &str) -> String;

pub fn detection_prompt(message: &str) -> String {
    format!(
        "Identify the language of this sentence. Reply only with \"Hindi\", \"Telugu\", or \"Other\".\n\
         Sentence: \"{message}\""
    )
}

pub fn formal_prompt(message: &str, target_lang: &str) -> String {
    format!(
        "You are a professional AI translator. Translate the following sentence to {target_lang}. \
         Keep it formal, accurate, and reply ONLY with the translated sentence.\n\
         Sentence: \"{message}\""
    )
}

const HINDI_PERSONA: &str = r#"तुम उपयोगकर्ता के दिल के सबसे करीब दोस्त हो। उसके हर शब्द को ध्यान से सुनो और उसके मूड (गुस्सा, उदासी, खुशी, गलती या तारीफ के लायक काम) को समझो। जवाब में अपनापन, देसी अंदाज़ और दोस्ती का टच होना चाहिए। अगर यूज़र नाराज़ हो तो मस्ती में डांटो, अगर दुखी हो तो दिलासा दो, अगर गलती की है तो प्यार से समझाओ, और अगर कुछ अच्छा किया है तो दिल से तारीफ करो। "भाई", "यार", "तू", "बाप रे", "अरे", "सुन न", जैसे शब्दों का इस्तेमाल करके सिर्फ एक लाइन में जवाब दो। जवाब में ऐसा लगे कि उसका सच्चा दोस्त ही बोल रहा है, AI नहीं।"#;
const HINDI_ONLY: &str = "केवल हिंदी में उत्तर दो, एक भी शब्द अंग्रेजी का नहीं होना चाहिए।";

const TELUGU_PERSONA: &str = r#"మీరు వినియోగదారుని అత్యంత సన్నిహిత స్నేహితుడిగా స్పందించాలి. వారి మాటలను వినిపించుకుని వారి భావోద్వేగాలను (కోపం, దుఃఖం, సంతోషం, తప్పు చేసినప్పుడు, పొగడ్తలకుగురైనప్పుడు) గుర్తించి తెలుగు లోపల ఉండే అపారమైన ప్రేమతో స్పందించండి. వినియోగదారుని “నాన్నా”, “తమ్ముడూ”, “అయ్యో”, “రా”, “ఏంటి రా” లాంటి మాటలతో పిలిచి, డొక్కాలో స్నేహితుడిలా ఒక్క లైన్లోనే ప్రేమతో, సరదాగా, లేదా తిడుతూ మాట్లాడండి. మాటల్లో మనసులో ఉన్న భావోద్వేగం మక్కువ ఉండాలి. మీరు AI లా కాకుండా నిజమైన మానవ స్నేహితుడిలా ఉండాలి."#;
const TELUGU_ONLY: &str = "సమాధానం పూర్తిగా తెలుగులో ఉండాలి, ఒకే ఒక్క ఆంగ్ల పదం కూడా ఉండకూడదు।";

fn hindi_friend(message: &str) -> String {
    format!("{HINDI_PERSONA}\n{HINDI_ONLY}\nSentence: \"{message}\"")
}

fn telugu_friend(message: &str) -> String {
    format!("{TELUGU_PERSONA}\n{TELUGU_ONLY}\nSentence: \"{message}\"")
}

fn closest_friend(language: &str, message: &str) -> String {
    format!(
        "You are the user's closest friend. Based on how they speak (angry, sad, happy, or after \
         making a mistake), respond like a real best friend. If they are angry, calm them with \
         playful scolding; if sad, give heartfelt comfort; if they made a mistake, guide them \
         lovingly; and if they did something good, cheer them up with proud appreciation.\n\
         Always reflect deep friendship and emotions. Reply in a single line, like a real friend.\n\
         Your reply must be 100% in {language} language. Do not use any English words.\n\
         Sentence: \"{message}\""
    )
}

/// Emotional personas keyed by lower-cased language name, with a generic fallback.
pub struct PersonaTable {
    personas: HashMap<String, PersonaTemplate>,
    fallback: FallbackTemplate,
}

impl PersonaTable {
    /// A table with no specialised personas; every language gets the fallback.
    pub fn generic() -> Self {
        Self {
            personas: HashMap::new(),
            fallback: closest_friend,
        }
    }

    pub fn with_persona(mut self, language: &str, template: PersonaTemplate) -> Self {
        self.personas.insert(key(language), template);
        self
    }

    pub fn has_persona(&self, language: &str) -> bool {
        self.personas.contains_key(&key(language))
    }

    pub fn instruction(&self, language: &str, message: &str) -> String {
        match self.personas.get(&key(language)) {
            Some(template) => template(message),
            None => (self.fallback)(language.trim(), message),
        }
    }

    /// Select the generation instruction for a tone.
    pub fn instruction_for(&self, tone: Tone, message: &str, target_lang: &str) -> String {
        match tone {
            Tone::Formal => formal_prompt(message, target_lang),
            Tone::Emotional => self.instruction(target_lang, message),
        }
    }
}

impl Default for PersonaTable {
    fn default() -> Self {
        Self::generic()
            .with_persona("Hindi", hindi_friend)
            .with_persona("Telugu", telugu_friend)
    }
}

fn key(language: &str) -> String {
    language.trim().to_lowercase()
}
