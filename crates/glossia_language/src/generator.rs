//! Fallback pattern synthesis.
//!
//! Given a language profile and a command descriptor, synthesizes baseline
//! patterns that follow the profile's word order and generic role markers.
//! Every registered language gets baseline parseability for every known
//! command even with zero curated pattern data; several shipped languages
//! rely entirely on this path.

use glossia_foundation::SemanticRole;

use crate::command::{CommandCatalog, CommandDescriptor, RoleSpec};
use crate::extraction::{ExtractionRule, MarkerSide};
use crate::pattern::LanguagePattern;
use crate::profile::{AdpositionOrder, LanguageProfile, WordOrder};
use crate::template::{AliasSet, Capture, LiteralToken, TemplateToken};

/// Synthesizes fallback patterns from language profiles.
pub struct PatternGenerator;

impl PatternGenerator {
    /// Numeric priority of generated patterns. The authored-over-generated
    /// guarantee comes from the source tier, not from this value.
    pub const PRIORITY: i32 = -100;

    /// Generates fallback patterns for one command.
    ///
    /// Produces a full shape (all descriptor roles) and, when optional roles
    /// exist, a minimal shape (required roles only). Returns an empty list
    /// when the profile carries no keyword for the command.
    #[must_use]
    pub fn generate(
        profile: &LanguageProfile,
        descriptor: &CommandDescriptor,
        language: &str,
    ) -> Vec<LanguagePattern> {
        let Some(keyword) = profile.keyword(descriptor.name()) else {
            return Vec::new();
        };

        let all: Vec<&RoleSpec> = descriptor.roles().iter().collect();
        let required: Vec<&RoleSpec> = descriptor
            .roles()
            .iter()
            .filter(|spec| spec.required)
            .collect();

        let mut patterns = vec![Self::assemble(
            profile,
            descriptor,
            keyword.clone(),
            language,
            &all,
            format!("{language}:{}:gen", descriptor.name()),
        )];

        if required.len() < all.len() {
            patterns.push(Self::assemble(
                profile,
                descriptor,
                keyword.clone(),
                language,
                &required,
                format!("{language}:{}:gen:min", descriptor.name()),
            ));
        }

        patterns
    }

    /// Generates fallback patterns for every command in the catalog.
    #[must_use]
    pub fn generate_all(
        profile: &LanguageProfile,
        catalog: &CommandCatalog,
        language: &str,
    ) -> Vec<LanguagePattern> {
        catalog
            .descriptors()
            .flat_map(|descriptor| Self::generate(profile, descriptor, language))
            .collect()
    }

    /// Builds one pattern for the given role subset, following the profile's
    /// word order and adposition placement.
    fn assemble(
        profile: &LanguageProfile,
        descriptor: &CommandDescriptor,
        keyword: AliasSet,
        language: &str,
        roles: &[&RoleSpec],
        id: String,
    ) -> LanguagePattern {
        // Body slots claim the rest of the input, so they always sit at the
        // very end regardless of word order.
        let (body_roles, plain_roles): (Vec<&RoleSpec>, Vec<&RoleSpec>) = roles
            .iter()
            .copied()
            .partition(|spec| spec.capture == Capture::Body);

        let mut template = Vec::new();
        let mut extraction: Vec<(SemanticRole, ExtractionRule)> = Vec::new();

        let keyword_token = TemplateToken::Literal(LiteralToken { aliases: keyword });

        // SOV puts the verb after its arguments; SVO and VSO lead with it.
        // (Commands have no subject slot, so VSO collapses into SVO here.)
        let verb_first = matches!(profile.word_order(), WordOrder::Svo | WordOrder::Vso);
        if verb_first {
            template.push(keyword_token.clone());
        }

        for (i, spec) in plain_roles.iter().enumerate() {
            // In verb-first orders the first argument sits directly after
            // the keyword and stays unmarked (`set x to 5`, `put 5 into x`);
            // postpositional SOV languages case-mark every argument.
            let bare = verb_first && i == 0;
            Self::push_role(profile, spec, bare, &mut template, &mut extraction);
        }

        if matches!(profile.word_order(), WordOrder::Sov) {
            template.push(keyword_token);
        }

        for spec in &body_roles {
            let index = template.len();
            template.push(TemplateToken::body(spec.role));
            extraction.push((spec.role, ExtractionRule::position(index)));
        }

        let mut pattern =
            LanguagePattern::generated(id, language, descriptor.name(), Self::PRIORITY, template);
        for (role, rule) in extraction {
            pattern = pattern.with_extraction(role, rule);
        }
        pattern
    }

    /// Appends one role slot, marked per the profile when a generic marker
    /// is declared, bare (position-extracted) otherwise.
    fn push_role(
        profile: &LanguageProfile,
        spec: &RoleSpec,
        bare: bool,
        template: &mut Vec<TemplateToken>,
        extraction: &mut Vec<(SemanticRole, ExtractionRule)>,
    ) {
        let slot = TemplateToken::role_expecting(spec.role, spec.expected.clone(), spec.capture);

        match profile.marker(spec.role).filter(|_| !bare) {
            Some(marker) => match profile.adpositions() {
                AdpositionOrder::Preposition => {
                    template.push(TemplateToken::Literal(LiteralToken {
                        aliases: marker.clone(),
                    }));
                    template.push(slot);
                    extraction.push((
                        spec.role,
                        ExtractionRule::Marker {
                            aliases: marker.clone(),
                            side: MarkerSide::After,
                        },
                    ));
                }
                AdpositionOrder::Postposition => {
                    template.push(slot);
                    template.push(TemplateToken::Literal(LiteralToken {
                        aliases: marker.clone(),
                    }));
                    extraction.push((
                        spec.role,
                        ExtractionRule::Marker {
                            aliases: marker.clone(),
                            side: MarkerSide::Before,
                        },
                    ));
                }
            },
            None => {
                let index = template.len();
                template.push(slot);
                extraction.push((spec.role, ExtractionRule::position(index)));
            }
        }
    }
}
