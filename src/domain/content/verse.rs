//! Daily verse reference data.

use once_cell::sync::Lazy;
use serde::Serialize;

/// A text available in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub english: &'static str,
    pub hindi: &'static str,
}

/// A Bhagavad Gita verse with its rendered meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub chapter: u8,
    pub verse: u8,
    pub text: Localized,
    pub meaning: Localized,
}

/// Fixed verse rotation for the daily-verse feature.
pub static VERSES: Lazy<Vec<Verse>> = Lazy::new(|| {
    vec![
        Verse {
            chapter: 2,
            verse: 47,
            text: Localized {
                english: "You have a right to perform your prescribed duties, but you are not \
                          entitled to the fruits of your actions.",
                hindi: "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन। मा कर्मफलहेतुर्भूर्मा ते सङ्गोऽस्त्वकर्मणि॥",
            },
            meaning: Localized {
                english: "Focus on the action itself, not on its rewards. Attachment to \
                          outcomes breeds anxiety; dedication to the work brings freedom.",
                hindi: "कर्म पर ध्यान दो, फल पर नहीं। परिणाम की आसक्ति चिंता लाती है; कर्म के प्रति \
                        समर्पण मुक्ति देता है।",
            },
        },
        Verse {
            chapter: 2,
            verse: 20,
            text: Localized {
                english: "The soul is never born, nor does it ever die; it is unborn, eternal, \
                          permanent, and primeval.",
                hindi: "न जायते म्रियते वा कदाचिन्नायं भूत्वा भविता वा न भूयः।",
            },
            meaning: Localized {
                english: "What is essential in you cannot be destroyed. Loss and change touch \
                          the surface, never the center.",
                hindi: "तुम्हारा सार नष्ट नहीं हो सकता। हानि और परिवर्तन सतह को छूते हैं, केंद्र को कभी नहीं।",
            },
        },
        Verse {
            chapter: 6,
            verse: 35,
            text: Localized {
                english: "The mind is restless and difficult to restrain, but it is subdued by \
                          practice and detachment.",
                hindi: "असंशयं महाबाहो मनो दुर्निग्रहं चलम्। अभ्यासेन तु कौन्तेय वैराग्येण च गृह्यते॥",
            },
            meaning: Localized {
                english: "A wandering mind is not a failure; it is the starting condition. \
                          Steadiness is built through repetition and release.",
                hindi: "भटकता मन असफलता नहीं, प्रारंभिक अवस्था है। अभ्यास और वैराग्य से स्थिरता बनती है।",
            },
        },
        Verse {
            chapter: 4,
            verse: 7,
            text: Localized {
                english: "Whenever there is a decline of righteousness and a rise of \
                          unrighteousness, I manifest myself.",
                hindi: "यदा यदा हि धर्मस्य ग्लानिर्भवति भारत। अभ्युत्थानमधर्मस्य तदात्मानं सृजाम्यहम्॥",
            },
            meaning: Localized {
                english: "Renewal follows decline. In personal terms: every lapse is an \
                          invitation for something wiser to arise in you.",
                hindi: "पतन के बाद नवीनीकरण आता है। हर चूक तुम्हारे भीतर कुछ बुद्धिमान जगाने का निमंत्रण है।",
            },
        },
        Verse {
            chapter: 18,
            verse: 66,
            text: Localized {
                english: "Abandon all varieties of duty and simply surrender unto me; I shall \
                          deliver you from all sin, do not fear.",
                hindi: "सर्वधर्मान्परित्यज्य मामेकं शरणं व्रज। अहं त्वां सर्वपापेभ्यो मोक्षयिष्यामि मा शुचः॥",
            },
            meaning: Localized {
                english: "When analysis is exhausted, trust remains. Release the burden of \
                          perfect choices and act from sincerity.",
                hindi: "जब विश्लेषण समाप्त हो जाए, तब विश्वास शेष रहता है। पूर्ण निर्णय का बोझ छोड़ो और \
                        सच्चाई से कर्म करो।",
            },
        },
    ]
});

/// Selects the verse for a given day of year, rotating through the table.
pub fn verse_for_day(day_of_year: u32) -> &'static Verse {
    let index = (day_of_year as usize) % VERSES.len();
    &VERSES[index]
}
