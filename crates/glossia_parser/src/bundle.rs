//! Declarative language bundles.
//!
//! A bundle is the JSON form of one language module: tokenizer strategy,
//! profile, and optional hand-authored patterns. Loading a bundle applies it
//! as one atomic registration, so readers never observe a half-loaded
//! language. The fetch that produces the JSON (file, embedded asset, remote
//! bundle) is the caller's concern; failures here surface immediately with
//! language code, source, and cause, and are never auto-retried.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use glossia_foundation::{Error, Result, SemanticRole, ValueKind};
use glossia_language::{
    AdpositionOrder, Capture, ExtractionRule, LanguagePattern, LanguageProfile, MarkerSide,
    TemplateToken, WordOrder,
};

use crate::registry::LanguageRegistry;
use crate::tokenizer::{HanScript, SpaceDelimited, Tokenizer};

/// The JSON form of one language module.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageBundle {
    /// Language code (`"sw"`, `"pt-br"`).
    pub code: String,
    /// Tokenization strategy.
    pub tokenizer: TokenizerSpec,
    /// Linguistic profile.
    pub profile: ProfileSpec,
    /// Hand-authored patterns; may be empty for generator-covered languages.
    #[serde(default)]
    pub patterns: Vec<PatternSpec>,
}

/// Tokenizer strategy selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum TokenizerSpec {
    /// Whitespace-separated scripts.
    SpaceDelimited,
    /// CJK segmentation against a known-word vocabulary.
    HanScript {
        /// Extra vocabulary beyond the profile's keywords and markers.
        #[serde(default)]
        vocabulary: Vec<String>,
    },
}

/// Word order in bundle form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrderSpec {
    /// Subject-verb-object.
    Svo,
    /// Subject-object-verb.
    Sov,
    /// Verb-subject-object.
    Vso,
}

/// Adposition placement in bundle form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdpositionSpec {
    /// Markers precede their value.
    Preposition,
    /// Markers follow their value.
    Postposition,
}

/// A morphological alternative rule in bundle form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MorphRuleSpec {
    /// Suffix the rule applies to.
    pub suffix: String,
    /// Variant suffixes accepted in its place.
    pub variants: Vec<String>,
}

/// A primary form plus alternatives.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AliasSpec {
    /// The primary surface form.
    pub primary: String,
    /// Accepted alternatives, in preference order.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// A language profile in bundle form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// Dominant word order.
    pub word_order: WordOrderSpec,
    /// Marker placement.
    pub adpositions: AdpositionSpec,
    /// Morphological alternative rules.
    #[serde(default)]
    pub morph_rules: Vec<MorphRuleSpec>,
    /// Generic role markers.
    #[serde(default)]
    pub markers: BTreeMap<SemanticRole, AliasSpec>,
    /// Localized command keywords.
    #[serde(default)]
    pub keywords: BTreeMap<String, AliasSpec>,
}

/// Claim behavior in bundle form.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureSpec {
    /// Exactly one token.
    Single,
    /// One or more tokens.
    #[default]
    Greedy,
    /// The rest of the input.
    Body,
}

/// A template token in bundle form.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TemplateTokenSpec {
    /// A literal word.
    Literal {
        /// Primary form.
        value: String,
        /// Accepted alternatives.
        #[serde(default)]
        alternatives: Vec<String>,
    },
    /// A role slot.
    Role {
        /// The semantic role.
        role: SemanticRole,
        /// Accepted value kinds; empty means any.
        #[serde(default)]
        expected: Vec<ValueKind>,
        /// Claim behavior.
        #[serde(default)]
        capture: CaptureSpec,
    },
    /// A grouped sub-template.
    Group {
        /// Whether the group may be skipped.
        #[serde(default)]
        optional: bool,
        /// The group's tokens.
        tokens: Vec<TemplateTokenSpec>,
    },
}

/// Marker side in bundle form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SideSpec {
    /// Value precedes the marker.
    Before,
    /// Value follows the marker.
    After,
}

/// An extraction rule in bundle form.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum ExtractionRuleSpec {
    /// Take the tokens claimed at a template index.
    Position {
        /// Top-level template index.
        index: usize,
    },
    /// Locate the value next to a marker.
    Marker {
        /// Primary marker form.
        marker: String,
        /// Alternatives, tried in order.
        #[serde(default)]
        alternatives: Vec<String>,
        /// Side of the marker the value occupies.
        side: SideSpec,
    },
}

/// A pattern in bundle form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Stable pattern identifier.
    pub id: String,
    /// Command the pattern parses into.
    pub command: String,
    /// Disambiguation priority.
    #[serde(default)]
    pub priority: i32,
    /// Ordered template tokens.
    pub template: Vec<TemplateTokenSpec>,
    /// Per-role extraction rules.
    #[serde(default)]
    pub extraction: BTreeMap<SemanticRole, ExtractionRuleSpec>,
}

/// Parses a bundle from JSON text and registers it atomically.
///
/// Returns the registered language code.
///
/// # Errors
///
/// [`glossia_foundation::ErrorKind::LanguageLoad`] on malformed JSON or a
/// pattern that fails validation; the registry is left untouched in both
/// cases.
pub fn load_bundle_str(
    registry: &LanguageRegistry,
    json: &str,
    source: &str,
) -> Result<String> {
    let bundle: LanguageBundle = serde_json::from_str(json)
        .map_err(|err| Error::language_load("unknown", source, err.to_string()))?;
    apply_bundle(registry, bundle, source)
}

/// Reads a bundle file and registers it atomically.
///
/// Returns the registered language code.
///
/// # Errors
///
/// [`glossia_foundation::ErrorKind::LanguageLoad`] when the file cannot be
/// read or its contents fail to load.
pub fn load_bundle_path(registry: &LanguageRegistry, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let json = std::fs::read_to_string(path)
        .map_err(|err| Error::language_load("unknown", &source, err.to_string()))?;
    load_bundle_str(registry, &json, &source)
}

/// Applies a parsed bundle: tokenizer + profile registration, then the
/// authored pattern set.
fn apply_bundle(
    registry: &LanguageRegistry,
    bundle: LanguageBundle,
    source: &str,
) -> Result<String> {
    let code = bundle.code.clone();
    let profile = build_profile(&bundle.profile);
    let tokenizer = build_tokenizer(&bundle.tokenizer, &bundle.profile);

    let patterns: Vec<LanguagePattern> = bundle
        .patterns
        .iter()
        .map(|spec| build_pattern(spec, &code))
        .collect();

    // Validate the whole set before touching the registry, so a bad bundle
    // leaves any prior registration for this code in place.
    for pattern in &patterns {
        pattern
            .validate()
            .map_err(|err| Error::language_load(&code, source, err.to_string()))?;
    }

    registry.register_language(code.clone(), tokenizer, profile);
    registry
        .register_patterns(&code, patterns)
        .map_err(|err| Error::language_load(&code, source, err.to_string()))?;

    debug!(language = %code, source, "loaded language bundle");
    Ok(code)
}

fn build_profile(spec: &ProfileSpec) -> LanguageProfile {
    let word_order = match spec.word_order {
        WordOrderSpec::Svo => WordOrder::Svo,
        WordOrderSpec::Sov => WordOrder::Sov,
        WordOrderSpec::Vso => WordOrder::Vso,
    };
    let adpositions = match spec.adpositions {
        AdpositionSpec::Preposition => AdpositionOrder::Preposition,
        AdpositionSpec::Postposition => AdpositionOrder::Postposition,
    };

    let mut profile = LanguageProfile::new(word_order, adpositions);
    for rule in &spec.morph_rules {
        profile = profile.with_morph_rule(&rule.suffix, rule.variants.clone());
    }
    for (role, alias) in &spec.markers {
        profile = profile.with_marker(*role, &alias.primary, alias.alternatives.clone());
    }
    for (command, alias) in &spec.keywords {
        profile = profile.with_keyword(command, &alias.primary, alias.alternatives.clone());
    }
    profile
}

/// Builds the tokenizer; Han-script vocabularies are seeded with every
/// keyword and marker surface form from the profile, so bundles only list
/// additional segmentation vocabulary.
fn build_tokenizer(spec: &TokenizerSpec, profile: &ProfileSpec) -> Arc<dyn Tokenizer> {
    match spec {
        TokenizerSpec::SpaceDelimited => Arc::new(SpaceDelimited::new()),
        TokenizerSpec::HanScript { vocabulary } => {
            let mut words = vocabulary.clone();
            for alias in profile.markers.values().chain(profile.keywords.values()) {
                words.push(alias.primary.clone());
                words.extend(alias.alternatives.iter().cloned());
            }
            Arc::new(HanScript::new(words))
        }
    }
}

fn build_pattern(spec: &PatternSpec, language: &str) -> LanguagePattern {
    let template = spec.template.iter().map(build_template_token).collect();
    let mut pattern = LanguagePattern::authored(
        &spec.id,
        language,
        &spec.command,
        spec.priority,
        template,
    );
    for (role, rule) in &spec.extraction {
        pattern = pattern.with_extraction(*role, build_extraction_rule(rule));
    }
    pattern
}

fn build_template_token(spec: &TemplateTokenSpec) -> TemplateToken {
    match spec {
        TemplateTokenSpec::Literal {
            value,
            alternatives,
        } => TemplateToken::literal_with(value, alternatives.clone()),
        TemplateTokenSpec::Role {
            role,
            expected,
            capture,
        } => TemplateToken::role_expecting(
            *role,
            expected.clone(),
            match capture {
                CaptureSpec::Single => Capture::Single,
                CaptureSpec::Greedy => Capture::Greedy,
                CaptureSpec::Body => Capture::Body,
            },
        ),
        TemplateTokenSpec::Group { optional, tokens } => {
            let inner = tokens.iter().map(build_template_token).collect();
            if *optional {
                TemplateToken::optional_group(inner)
            } else {
                TemplateToken::group(inner)
            }
        }
    }
}

fn build_extraction_rule(spec: &ExtractionRuleSpec) -> ExtractionRule {
    match spec {
        ExtractionRuleSpec::Position { index } => ExtractionRule::position(*index),
        ExtractionRuleSpec::Marker {
            marker,
            alternatives,
            side,
        } => ExtractionRule::marker(
            marker,
            alternatives.clone(),
            match side {
                SideSpec::Before => MarkerSide::Before,
                SideSpec::After => MarkerSide::After,
            },
        ),
    }
}
