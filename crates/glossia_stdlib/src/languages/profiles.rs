//! Profile-only language registrations.
//!
//! These languages ship no hand-authored patterns at all: every parse goes
//! through the pattern generator. Each profile declares word order,
//! adposition placement, generic role markers, and localized command
//! keywords; that is all the generator needs for baseline coverage.

use std::sync::Arc;

use glossia_language::{AdpositionOrder, LanguageProfile, WordOrder};
use glossia_parser::{LanguageRegistry, SpaceDelimited};

use glossia_foundation::SemanticRole::{Destination, Patient, Source};

/// Registers every profile-only language.
pub fn register(registry: &LanguageRegistry) {
    for (code, profile) in [
        ("de", german()),
        ("fr", french()),
        ("ru", russian()),
        ("tr", turkish()),
        ("ko", korean()),
        ("hi", hindi()),
    ] {
        registry.register_language(code, Arc::new(SpaceDelimited::new()), profile);
    }
}

/// German: `setze x auf 5`.
fn german() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(Patient, "auf", ["zu"])
        .with_marker(Destination, "in", ["nach"])
        .with_marker(Source, "von", ["aus"])
        .with_keyword("set", "setze", ["setzen"])
        .with_keyword("put", "lege", ["legen"])
        .with_keyword("toggle", "schalte", ["umschalten"])
        .with_keyword("add", "ergänze", ["hinzufügen"])
        .with_keyword("remove", "entferne", ["entfernen", "lösche"])
        .with_keyword("show", "zeige", ["zeigen"])
        .with_keyword("hide", "verstecke", ["verbergen"])
        .with_keyword("wait", "warte", ["warten"])
        .with_keyword("on", "bei", ["wenn"])
}

/// French: `définir x à 5`.
fn french() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(Patient, "à", ["a", "en"])
        .with_marker(Destination, "dans", ["sur"])
        .with_marker(Source, "de", ["depuis"])
        .with_keyword("set", "définir", ["définis", "régler"])
        .with_keyword("put", "mettre", ["mets", "placer"])
        .with_keyword("toggle", "basculer", ["bascule"])
        .with_keyword("add", "ajouter", ["ajoute"])
        .with_keyword("remove", "retirer", ["retire", "supprimer"])
        .with_keyword("show", "afficher", ["affiche", "montrer"])
        .with_keyword("hide", "masquer", ["masque", "cacher"])
        .with_keyword("wait", "attendre", ["attends"])
        .with_keyword("on", "sur", ["quand"])
}

/// Russian: `установить x в 5`.
fn russian() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(Patient, "в", ["на"])
        .with_marker(Destination, "в", ["на"])
        .with_marker(Source, "из", ["от"])
        .with_keyword("set", "установить", ["установи", "задать"])
        .with_keyword("put", "поместить", ["помести", "положить"])
        .with_keyword("toggle", "переключить", ["переключи"])
        .with_keyword("add", "добавить", ["добавь"])
        .with_keyword("remove", "убрать", ["убери", "удалить"])
        .with_keyword("show", "показать", ["покажи"])
        .with_keyword("hide", "скрыть", ["скрой"])
        .with_keyword("wait", "ждать", ["жди", "подождать"])
        .with_keyword("on", "при", ["когда"])
}

/// Turkish: SOV with postpositions, `x olarak 5 ayarla`.
///
/// The morph rule models vowel harmony on the imperative plural suffix:
/// `ayarlayın` and `ayarlayin` both resolve to `ayarla`'s entry.
fn turkish() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Sov, AdpositionOrder::Postposition)
        .with_morph_rule("ın", ["in", "un", "ün"])
        .with_marker(Patient, "olarak", Vec::<String>::new())
        .with_marker(Destination, "üzerine", ["içine"])
        .with_marker(Source, "kaynağından", Vec::<String>::new())
        .with_keyword("set", "ayarla", ["ayarlayın"])
        .with_keyword("put", "koy", ["koyun"])
        .with_keyword("toggle", "değiştir", ["değiştirin"])
        .with_keyword("add", "ekle", ["ekleyin"])
        .with_keyword("remove", "kaldır", ["kaldırın", "sil"])
        .with_keyword("show", "göster", ["gösterin"])
        .with_keyword("hide", "gizle", ["gizleyin"])
        .with_keyword("wait", "bekle", ["bekleyin"])
        .with_keyword("on", "olunca", ["olduğunda"])
}

/// Korean: SOV with postpositional particles.
///
/// The morph rules cover particle allomorphs: 를/을 after vowels versus
/// consonants, 로/으로 likewise. Input is expected spaced (particles
/// separated), the teaching-text convention.
fn korean() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Sov, AdpositionOrder::Postposition)
        .with_morph_rule("를", ["을"])
        .with_morph_rule("로", ["으로"])
        .with_marker(Patient, "를", Vec::<String>::new())
        .with_marker(Destination, "에", ["로"])
        .with_marker(Source, "에서", Vec::<String>::new())
        .with_keyword("set", "설정", ["설정해"])
        .with_keyword("put", "놓기", ["놓아"])
        .with_keyword("toggle", "전환", ["전환해"])
        .with_keyword("add", "추가", ["추가해"])
        .with_keyword("remove", "제거", ["제거해"])
        .with_keyword("show", "표시", ["표시해"])
        .with_keyword("hide", "숨기기", ["숨겨"])
        .with_keyword("wait", "대기", ["기다려"])
        .with_keyword("on", "때", Vec::<String>::new())
}

/// Hindi: SOV with postpositions, `x को 5 पर सेट`.
fn hindi() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Sov, AdpositionOrder::Postposition)
        .with_marker(Destination, "को", Vec::<String>::new())
        .with_marker(Patient, "पर", ["से"])
        .with_marker(Source, "से", Vec::<String>::new())
        .with_keyword("set", "सेट", ["सेट-करें"])
        .with_keyword("put", "रखें", ["रखो"])
        .with_keyword("toggle", "टॉगल", Vec::<String>::new())
        .with_keyword("add", "जोड़ें", ["जोड़ो"])
        .with_keyword("remove", "हटाएं", ["हटाओ"])
        .with_keyword("show", "दिखाएं", ["दिखाओ"])
        .with_keyword("hide", "छिपाएं", ["छिपाओ"])
        .with_keyword("wait", "प्रतीक्षा", ["रुको"])
        .with_keyword("on", "होने-पर", Vec::<String>::new())
}
