//! English language module.

use std::sync::Arc;

use glossia_foundation::{Result, ValueKind};
use glossia_language::{
    AdpositionOrder, Capture, ExtractionRule, LanguagePattern, LanguageProfile, MarkerSide,
    TemplateToken, WordOrder,
};
use glossia_parser::{LanguageRegistry, SpaceDelimited};

use glossia_foundation::SemanticRole::{Body, Destination, Event, Patient, Source};

/// Registers English: tokenizer, profile, and the authored pattern table.
///
/// # Errors
///
/// Propagates pattern validation failures (none are expected from the
/// shipped table).
pub fn register(registry: &LanguageRegistry) -> Result<()> {
    registry.register_language("en", Arc::new(SpaceDelimited::new()), profile());
    registry.register_patterns("en", patterns())
}

fn profile() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(Patient, "to", ["into"])
        .with_marker(Destination, "into", ["in", "onto"])
        .with_marker(Source, "from", Vec::<String>::new())
        .with_keyword("set", "set", ["assign"])
        .with_keyword("put", "put", ["place"])
        .with_keyword("toggle", "toggle", ["switch"])
        .with_keyword("add", "add", Vec::<String>::new())
        .with_keyword("remove", "remove", ["delete"])
        .with_keyword("show", "show", ["reveal"])
        .with_keyword("hide", "hide", Vec::<String>::new())
        .with_keyword("wait", "wait", ["pause"])
        .with_keyword("on", "on", ["when"])
}

fn patterns() -> Vec<LanguagePattern> {
    vec![
        // set x to 5
        LanguagePattern::authored(
            "en:set:1",
            "en",
            "set",
            100,
            vec![
                TemplateToken::literal_with("set", ["assign"]),
                TemplateToken::role(Destination),
                TemplateToken::literal("to"),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Destination, ExtractionRule::position(1))
        .with_extraction(
            Patient,
            ExtractionRule::marker("to", Vec::<String>::new(), MarkerSide::After),
        ),
        // put 5 into x
        LanguagePattern::authored(
            "en:put:1",
            "en",
            "put",
            100,
            vec![
                TemplateToken::literal_with("put", ["place"]),
                TemplateToken::role(Patient),
                TemplateToken::literal_with("into", ["in", "onto"]),
                TemplateToken::role(Destination),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("into", ["in", "onto"], MarkerSide::After),
        ),
        // toggle .active [on #menu]
        LanguagePattern::authored(
            "en:toggle:1",
            "en",
            "toggle",
            100,
            vec![
                TemplateToken::literal_with("toggle", ["switch"]),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal("on"),
                    TemplateToken::role(Destination),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("on", Vec::<String>::new(), MarkerSide::After),
        ),
        // add .hot [to #nav]
        LanguagePattern::authored(
            "en:add:1",
            "en",
            "add",
            100,
            vec![
                TemplateToken::literal("add"),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal("to"),
                    TemplateToken::role(Destination),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("to", Vec::<String>::new(), MarkerSide::After),
        ),
        // remove .hot [from #nav]
        LanguagePattern::authored(
            "en:remove:1",
            "en",
            "remove",
            100,
            vec![
                TemplateToken::literal_with("remove", ["delete"]),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal("from"),
                    TemplateToken::role(Source),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Source,
            ExtractionRule::marker("from", Vec::<String>::new(), MarkerSide::After),
        ),
        // show #modal
        LanguagePattern::authored(
            "en:show:1",
            "en",
            "show",
            100,
            vec![
                TemplateToken::literal_with("show", ["reveal"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // hide #modal
        LanguagePattern::authored(
            "en:hide:1",
            "en",
            "hide",
            100,
            vec![
                TemplateToken::literal("hide"),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // wait 2s
        LanguagePattern::authored(
            "en:wait:1",
            "en",
            "wait",
            100,
            vec![
                TemplateToken::literal_with("wait", ["pause"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // on click [from #btn] <body>
        LanguagePattern::authored(
            "en:on:1",
            "en",
            "on",
            100,
            vec![
                TemplateToken::literal_with("on", ["when"]),
                TemplateToken::role_expecting(
                    Event,
                    vec![ValueKind::Reference],
                    Capture::Single,
                ),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal("from"),
                    TemplateToken::role_single(Source),
                ]),
                TemplateToken::body(Body),
            ],
        )
        .with_extraction(Event, ExtractionRule::position(1))
        .with_extraction(
            Source,
            ExtractionRule::marker("from", Vec::<String>::new(), MarkerSide::After),
        )
        .with_extraction(Body, ExtractionRule::position(3)),
        // when clicked <body> — past-participle phrasing, preferred when it
        // applies.
        LanguagePattern::authored(
            "en:on:2",
            "en",
            "on",
            105,
            vec![
                TemplateToken::literal("when"),
                TemplateToken::role_expecting(
                    Event,
                    vec![ValueKind::Reference],
                    Capture::Single,
                ),
                TemplateToken::body(Body),
            ],
        )
        .with_extraction(Event, ExtractionRule::position(1))
        .with_extraction(Body, ExtractionRule::position(2)),
    ]
}
