//! Built-in sample legal documents.
//!
//! Served by `GET /sample/:key` so first-time users can try the analysis
//! flow without uploading anything. The texts are short bilingual examples
//! of the document kinds the tool targets: a loan agreement in Tamil and
//! English, and a Tamil partition deed.

use crate::processing::Language;

/// A language-keyed sample document.
pub struct SampleDocument {
    /// Sample text.
    pub text: &'static str,
    /// Language tag reported alongside the text.
    pub language: Language,
}

const TAMIL_LOAN_AGREEMENT: &str = "\
வணக்கம்! இது ஒரு சட்ட ஆவணம் ஆகும். இந்த ஆவணத்தில் பின்வரும் முக்கிய புள்ளிகள் உள்ளன:

1. கடனாளி மற்றும் கடன்தாரர் இடையேயான ஒப்பந்தம்
2. கடன் தொகை: ₹5,00,000 (ஐந்து லட்சம் ரூபாய்)
3. வட்டி விகிதம்: 12% ஆண்டுக்கு
4. திருப்பிச் செலுத்தும் காலம்: 24 மாதங்கள்
5. தாமத கட்டணம்: ₹500 மாதத்திற்கு
6. கடனாளி தினசரி ₹2000 செலுத்த வேண்டும்
7. ஒப்பந்தம் முறிவு நிலையில், முழு கடன் தொகையும் உடனடியாக திருப்பிச் செலுத்தப்பட வேண்டும்
8. சட்ட நடவடிக்கை எடுக்கப்படலாம்";

const ENGLISH_LOAN_AGREEMENT: &str = "\
LEGAL AGREEMENT FOR LOAN REPAYMENT

This document outlines the terms and conditions between the Borrower and Lender:

1. Loan Amount: ₹5,00,000 (Five Lakh Rupees)
2. Interest Rate: 12% per annum
3. Repayment Period: 24 months
4. Late Payment Fee: ₹500 per month
5. Daily Payment: ₹2000
6. Default Clause: In case of breach, full amount becomes immediately due
7. Legal Action: Lender reserves right to take legal action
8. Jurisdiction: Chennai High Court";

const TAMIL_PARTITION_DEED: &str = "\
பாகப் பிரிவினைப் பத்திரம் (PARTITION DEED)

இந்த ஆவணம் நாமக்கல் மாவட்டம், திருச்செங்கோடு வட்டம், கொக்கராயன் பேட்டை ரோடு, \
அனிமூர் போஸ்ட் பகுதியில் உள்ள நிலத்தைப் பிரித்துக்கொள்வதற்கான ஒப்பந்தம் ஆகும்.

முக்கிய புள்ளிகள்:
1. பங்காளிகள்: P. சுப்பிரமணியம், K. ஈஸ்வரமூர்த்தி, E. யசோதா
2. நில இடம்: நாமக்கல் மாவட்டம், திருச்செங்கோடு வட்டம்
3. முகவரி: கொக்கராயன் பேட்டை ரோடு, அனிமூர் போஸ்ட்
4. ஆவண எண்: 49420
5. பக்கம்: 5/20

சட்ட நடவடிக்கைகள்:
- இந்த ஆவணம் சட்டப்படி பதிவு செய்யப்பட்டுள்ளது
- அனைத்து பங்காளிகளும் இந்த ஒப்பந்தத்தை ஒப்புக்கொண்டுள்ளனர்
- நிலத்தின் பிரிவினை சட்டப்படி நடைபெறும்
- எந்தவொரு சர்ச்சையும் நீதிமன்றத்தில் தீர்வு காணப்படும்";

/// Look up a sample document by its wire key.
///
/// Recognized keys are `tamil`, `english`, and `land` (a Tamil partition
/// deed).
pub fn sample_document(key: &str) -> Option<SampleDocument> {
    match key {
        "tamil" => Some(SampleDocument {
            text: TAMIL_LOAN_AGREEMENT,
            language: Language::Tamil,
        }),
        "english" => Some(SampleDocument {
            text: ENGLISH_LOAN_AGREEMENT,
            language: Language::English,
        }),
        "land" => Some(SampleDocument {
            text: TAMIL_PARTITION_DEED,
            language: Language::Tamil,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert!(sample_document("tamil").is_some());
        assert!(sample_document("english").is_some());
        let land = sample_document("land").expect("land sample");
        assert_eq!(land.language, Language::Tamil);
        assert!(land.text.contains("PARTITION DEED"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(sample_document("french").is_none());
    }
}
