//! Language profiles.
//!
//! A [`LanguageProfile`] captures the linguistic metadata the pattern
//! generator needs: dominant word order, adposition placement, a generic
//! marker per semantic role, localized command keywords, and morphological
//! suffix alternatives. Profiles drive fallback synthesis for languages with
//! no hand-authored patterns.

use std::collections::BTreeMap;

use glossia_foundation::SemanticRole;

use crate::template::AliasSet;

/// Dominant constituent order of a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordOrder {
    /// Subject-verb-object (English, Chinese, Spanish).
    Svo,
    /// Subject-object-verb (Japanese, Korean, Turkish, Hindi).
    Sov,
    /// Verb-subject-object (Classical Arabic, Welsh).
    Vso,
}

/// Whether role markers precede or follow their argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdpositionOrder {
    /// Marker comes before the value (`to 5`).
    Preposition,
    /// Marker comes after the value (`5 に`).
    Postposition,
}

/// A morphological alternative rule.
///
/// When a marker or keyword ends with `suffix`, forms with each variant
/// substituted are accepted as alternatives. Models vowel-harmony and
/// inflection variants without listing every form by hand.
#[derive(Clone, Debug)]
pub struct MorphRule {
    suffix: String,
    variants: Vec<String>,
}

/// Linguistic metadata for one language.
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    word_order: WordOrder,
    adpositions: AdpositionOrder,
    role_markers: BTreeMap<SemanticRole, AliasSet>,
    command_keywords: BTreeMap<String, AliasSet>,
    morph_rules: Vec<MorphRule>,
}

impl LanguageProfile {
    /// Creates a profile with the given word order and adposition placement.
    #[must_use]
    pub fn new(word_order: WordOrder, adpositions: AdpositionOrder) -> Self {
        Self {
            word_order,
            adpositions,
            role_markers: BTreeMap::new(),
            command_keywords: BTreeMap::new(),
            morph_rules: Vec::new(),
        }
    }

    /// Adds a morphological alternative rule.
    ///
    /// Rules apply to markers and keywords added after this call; add rules
    /// first when building a profile.
    #[must_use]
    pub fn with_morph_rule<I, S>(mut self, suffix: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.morph_rules.push(MorphRule {
            suffix: suffix.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Adds the generic marker for a role, expanding morphological variants.
    #[must_use]
    pub fn with_marker<I, S>(mut self, role: SemanticRole, primary: impl Into<String>, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases = self.expand(primary.into(), alternatives);
        self.role_markers.insert(role, aliases);
        self
    }

    /// Adds the localized keyword for a command, expanding morphological
    /// variants.
    #[must_use]
    pub fn with_keyword<I, S>(
        mut self,
        command: impl Into<String>,
        primary: impl Into<String>,
        alternatives: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases = self.expand(primary.into(), alternatives);
        self.command_keywords.insert(command.into(), aliases);
        self
    }

    /// The profile's word order.
    #[must_use]
    pub const fn word_order(&self) -> WordOrder {
        self.word_order
    }

    /// The profile's adposition placement.
    #[must_use]
    pub const fn adpositions(&self) -> AdpositionOrder {
        self.adpositions
    }

    /// The generic marker for a role, if declared.
    #[must_use]
    pub fn marker(&self, role: SemanticRole) -> Option<&AliasSet> {
        self.role_markers.get(&role)
    }

    /// The localized keyword for a command, if declared.
    #[must_use]
    pub fn keyword(&self, command: &str) -> Option<&AliasSet> {
        self.command_keywords.get(command)
    }

    /// Commands this profile carries keywords for.
    pub fn known_commands(&self) -> impl Iterator<Item = &str> {
        self.command_keywords.keys().map(String::as_str)
    }

    /// Builds an alias set from a primary form, explicit alternatives, and
    /// morphological expansion of both.
    fn expand<I, S>(&self, primary: String, alternatives: I) -> AliasSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut forms: Vec<String> = alternatives.into_iter().map(Into::into).collect();
        let mut expanded = Vec::new();
        for form in std::iter::once(&primary).chain(forms.iter()) {
            for rule in &self.morph_rules {
                if let Some(stem) = form.strip_suffix(&rule.suffix) {
                    for variant in &rule.variants {
                        expanded.push(format!("{stem}{variant}"));
                    }
                }
            }
        }
        forms.extend(expanded);
        AliasSet::new(primary, forms)
    }
}
