//! Static fallback responses.
//!
//! Pre-written guidance substituted whenever the generative backend is
//! unreachable or unconfigured. Every (category, language) pair resolves to
//! a string; the lookup is total by construction.

use super::{Language, ResponseCategory};

/// Returns the fixed fallback response for a category/language pair.
pub fn fallback_response(category: ResponseCategory, language: Language) -> &'static str {
    match language {
        Language::English => english(category),
        Language::Hindi => hindi(category),
    }
}

fn english(category: ResponseCategory) -> &'static str {
    match category {
        ResponseCategory::Relationships => {
            "The Gita teaches that every relationship is a field for practicing selfless love. \
             Chapter 12 describes the devotee as free from malice, friendly, and compassionate. \
             Try this: listen today without planning your reply, give without keeping score, and \
             let go of one expectation you have placed on the other person. Bonds loosen when we \
             grasp; they deepen when we serve."
        }
        ResponseCategory::Career => {
            "\"You have a right to your actions, but never to the fruits of your actions\" \
             (Gita 2.47). Anxiety about outcomes drains the energy the work itself needs. Define \
             the next concrete step, do it with full attention, and review results as information \
             rather than judgment. Excellence in the doing is the only part that was ever yours."
        }
        ResponseCategory::Health => {
            "The Gita counsels moderation: \"Yoga is not for one who eats too much or too little, \
             sleeps too much or too little\" (6.16). Treat the body as the instrument of your \
             purpose. Keep regular hours for food and rest, move daily, and observe discomfort \
             calmly instead of fighting it. Small consistent care outweighs drastic correction."
        }
        ResponseCategory::Anxiety => {
            "Arjuna too stood overwhelmed before what felt impossible. Krishna's counsel begins \
             with the breath and the present act: the mind is restless, but it is tamed by \
             practice and detachment (6.35). When worry rises, name it, return attention to the \
             one thing in front of you, and act on that alone. Peace is not the absence of the \
             storm; it is a steady place within it."
        }
        ResponseCategory::Spirituality => {
            "\"The soul is never born, nor does it die\" (Gita 2.20). The search for meaning is \
             itself the path. Set aside a few minutes daily for stillness, offer your ordinary \
             work as practice, and study one verse at a time. The goal is not to escape life but \
             to meet it with a quiet center."
        }
        ResponseCategory::General => {
            "Whatever you face, the Gita offers one steady instruction: act with sincerity, \
             release attachment to results, and keep the mind even in gain and loss (2.48). \
             Equanimity is skill in action. Take one honest step today and let that be enough."
        }
    }
}

fn hindi(category: ResponseCategory) -> &'static str {
    match category {
        ResponseCategory::Relationships => {
            "गीता सिखाती है कि हर रिश्ता निःस्वार्थ प्रेम के अभ्यास का क्षेत्र है। अध्याय 12 में भक्त को \
             द्वेषरहित, मैत्रीपूर्ण और करुणामय बताया गया है। आज बिना उत्तर सोचे सुनिए, बिना हिसाब रखे दीजिए, \
             और एक अपेक्षा छोड़ दीजिए। पकड़ने से बंधन ढीले होते हैं, सेवा से गहरे।"
        }
        ResponseCategory::Career => {
            "\"कर्मण्येवाधिकारस्ते मा फलेषु कदाचन\" (गीता 2.47)। परिणाम की चिंता वही ऊर्जा खा जाती है \
             जो काम को चाहिए। अगला ठोस कदम तय कीजिए, पूरे ध्यान से कीजिए, और परिणाम को निर्णय नहीं, \
             जानकारी मानिए। कर्म की उत्कृष्टता ही आपका हिस्सा है।"
        }
        ResponseCategory::Health => {
            "गीता संयम सिखाती है: \"योग उसके लिए नहीं जो बहुत खाता है या बिल्कुल नहीं खाता, बहुत सोता है \
             या बहुत जागता है\" (6.16)। शरीर को अपने उद्देश्य का साधन मानिए। भोजन और विश्राम का नियम \
             रखिए, रोज़ चलिए, और कष्ट से लड़ने की बजाय उसे शांति से देखिए।"
        }
        ResponseCategory::Anxiety => {
            "अर्जुन भी असंभव लगने वाले क्षण के सामने व्याकुल खड़े थे। कृष्ण का उपदेश वर्तमान कर्म से शुरू \
             होता है: मन चंचल है, पर अभ्यास और वैराग्य से वश में आता है (6.35)। जब चिंता उठे, उसे नाम \
             दीजिए, सामने के एक काम पर ध्यान लौटाइए, और केवल उसी पर कार्य कीजिए। शांति तूफ़ान का अभाव \
             नहीं, उसके भीतर एक स्थिर स्थान है।"
        }
        ResponseCategory::Spirituality => {
            "\"आत्मा न जन्म लेती है, न मरती है\" (गीता 2.20)। अर्थ की खोज स्वयं मार्ग है। प्रतिदिन कुछ \
             मिनट मौन के लिए रखिए, अपने साधारण काम को साधना की तरह अर्पित कीजिए, और एक-एक श्लोक \
             का अध्ययन कीजिए। लक्ष्य जीवन से भागना नहीं, शांत केंद्र से उसका सामना करना है।"
        }
        ResponseCategory::General => {
            "जो भी सामने हो, गीता का एक स्थिर निर्देश है: सच्चाई से कर्म कीजिए, फल की आसक्ति छोड़िए, \
             और लाभ-हानि में मन सम रखिए (2.48)। समत्व ही कर्म में कुशलता है। आज एक ईमानदार कदम \
             उठाइए और उसे पर्याप्त मानिए।"
        }
    }
}

/// Returns the fixed fallback interpretation for a dream, per language.
pub fn dream_fallback(language: Language) -> &'static str {
    match language {
        Language::English => {
            "Dreams often carry the mind's unfinished conversations. The Gita calls the mind \
             restless and turbulent, yet trainable through practice (6.34-35). Rather than \
             fixing a single meaning, notice the feeling the dream left behind and meet it \
             honestly in waking life. A few quiet minutes of reflection before sleep settles \
             the mind that speaks in dreams."
        }
        Language::Hindi => {
            "स्वप्न प्रायः मन की अधूरी बातें लेकर आते हैं। गीता मन को चंचल और प्रबल कहती है, पर अभ्यास \
             से वश में आने वाला भी (6.34-35)। एक निश्चित अर्थ खोजने की बजाय देखिए कि स्वप्न ने कौन-सी \
             भावना छोड़ी है, और जागते जीवन में उसका सामना ईमानदारी से कीजिए। सोने से पहले कुछ क्षण \
             का मौन उस मन को शांत करता है जो स्वप्नों में बोलता है।"
        }
    }
}
