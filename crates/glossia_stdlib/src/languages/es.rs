//! Spanish language module.
//!
//! Normalized matching folds accents, so `establecé` and `establece` hit the
//! same alias entry.

use std::sync::Arc;

use glossia_foundation::{Result, ValueKind};
use glossia_language::{
    AdpositionOrder, Capture, ExtractionRule, LanguagePattern, LanguageProfile, MarkerSide,
    TemplateToken, WordOrder,
};
use glossia_parser::{LanguageRegistry, SpaceDelimited};

use glossia_foundation::SemanticRole::{Body, Destination, Event, Patient, Source};

/// Registers Spanish: tokenizer, profile, and the authored pattern table.
///
/// # Errors
///
/// Propagates pattern validation failures (none are expected from the
/// shipped table).
pub fn register(registry: &LanguageRegistry) -> Result<()> {
    registry.register_language("es", Arc::new(SpaceDelimited::new()), profile());
    registry.register_patterns("es", patterns())
}

fn profile() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(Patient, "a", ["en", "como"])
        .with_marker(Destination, "en", ["dentro"])
        .with_marker(Source, "de", ["desde"])
        .with_keyword("set", "establecer", ["establece", "asignar"])
        .with_keyword("put", "poner", ["pon", "colocar"])
        .with_keyword("toggle", "alternar", ["alterna", "cambiar"])
        .with_keyword("add", "añadir", ["agregar", "agrega"])
        .with_keyword("remove", "quitar", ["eliminar", "quita"])
        .with_keyword("show", "mostrar", ["muestra"])
        .with_keyword("hide", "ocultar", ["oculta"])
        .with_keyword("wait", "esperar", ["espera"])
        .with_keyword("on", "al", ["cuando"])
}

fn patterns() -> Vec<LanguagePattern> {
    vec![
        // establecer x a 5
        LanguagePattern::authored(
            "es:set:1",
            "es",
            "set",
            100,
            vec![
                TemplateToken::literal_with("establecer", ["establece", "asignar", "asigna"]),
                TemplateToken::role(Destination),
                TemplateToken::literal_with("a", ["en", "como"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Destination, ExtractionRule::position(1))
        .with_extraction(
            Patient,
            ExtractionRule::marker("a", ["en", "como"], MarkerSide::After),
        ),
        // poner 5 en x
        LanguagePattern::authored(
            "es:put:1",
            "es",
            "put",
            100,
            vec![
                TemplateToken::literal_with("poner", ["pon", "colocar", "coloca"]),
                TemplateToken::role(Patient),
                TemplateToken::literal_with("en", ["dentro"]),
                TemplateToken::role(Destination),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("en", ["dentro"], MarkerSide::After),
        ),
        // alternar .activo [en #menu]
        LanguagePattern::authored(
            "es:toggle:1",
            "es",
            "toggle",
            100,
            vec![
                TemplateToken::literal_with("alternar", ["alterna", "cambiar", "cambia"]),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal("en"),
                    TemplateToken::role(Destination),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("en", Vec::<String>::new(), MarkerSide::After),
        ),
        // añadir .rojo [a #caja]
        LanguagePattern::authored(
            "es:add:1",
            "es",
            "add",
            100,
            vec![
                TemplateToken::literal_with("añadir", ["añade", "agregar", "agrega"]),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal("a"),
                    TemplateToken::role(Destination),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("a", Vec::<String>::new(), MarkerSide::After),
        ),
        // quitar .rojo [de #caja]
        LanguagePattern::authored(
            "es:remove:1",
            "es",
            "remove",
            100,
            vec![
                TemplateToken::literal_with("quitar", ["quita", "eliminar", "elimina"]),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal_with("de", ["desde"]),
                    TemplateToken::role(Source),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Source,
            ExtractionRule::marker("de", ["desde"], MarkerSide::After),
        ),
        // mostrar #modal
        LanguagePattern::authored(
            "es:show:1",
            "es",
            "show",
            100,
            vec![
                TemplateToken::literal_with("mostrar", ["muestra"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // ocultar #modal
        LanguagePattern::authored(
            "es:hide:1",
            "es",
            "hide",
            100,
            vec![
                TemplateToken::literal_with("ocultar", ["oculta", "esconder"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // esperar 2s
        LanguagePattern::authored(
            "es:wait:1",
            "es",
            "wait",
            100,
            vec![
                TemplateToken::literal_with("esperar", ["espera"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // al click [de #btn] <body>
        LanguagePattern::authored(
            "es:on:1",
            "es",
            "on",
            100,
            vec![
                TemplateToken::literal_with("al", ["cuando"]),
                TemplateToken::role_expecting(Event, vec![ValueKind::Reference], Capture::Single),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal_with("de", ["desde"]),
                    TemplateToken::role_single(Source),
                ]),
                TemplateToken::body(Body),
            ],
        )
        .with_extraction(Event, ExtractionRule::position(1))
        .with_extraction(
            Source,
            ExtractionRule::marker("de", ["desde"], MarkerSide::After),
        )
        .with_extraction(Body, ExtractionRule::position(3)),
    ]
}
