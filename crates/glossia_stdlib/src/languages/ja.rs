//! Japanese language module.
//!
//! Subject-object-verb with postpositional particles: the particle, not the
//! position, locates each argument, so every role extracts through a marker
//! rule with the value on the `Before` side. The Han-script tokenizer's
//! vocabulary carries the particles and verb forms; katakana event names
//! like `クリック` survive as single unknown-run tokens.

use std::sync::Arc;

use glossia_foundation::Result;
use glossia_language::{
    AdpositionOrder, ExtractionRule, LanguagePattern, LanguageProfile, MarkerSide, TemplateToken,
    WordOrder,
};
use glossia_parser::{HanScript, LanguageRegistry};

use glossia_foundation::SemanticRole::{Body, Destination, Event, Patient, Source};

/// Segmentation vocabulary: particles, verb forms, and their variants.
const VOCABULARY: &[&str] = &[
    "を", "に", "へ", "から", "で", "する", "して", "しろ", "設定", "セット", "切り替える",
    "切り替え", "トグル", "追加", "足す", "削除", "除去", "表示", "非表示", "隠す", "置く",
    "配置", "待つ", "待機", "待て", "したら", "されたら", "時に",
];

/// Registers Japanese: tokenizer, profile, and the authored pattern table.
///
/// # Errors
///
/// Propagates pattern validation failures (none are expected from the
/// shipped table).
pub fn register(registry: &LanguageRegistry) -> Result<()> {
    registry.register_language(
        "ja",
        Arc::new(HanScript::new(VOCABULARY.iter().copied())),
        profile(),
    );
    registry.register_patterns("ja", patterns())
}

fn profile() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Sov, AdpositionOrder::Postposition)
        .with_marker(Destination, "に", ["へ"])
        .with_marker(Patient, "を", Vec::<String>::new())
        .with_marker(Source, "から", Vec::<String>::new())
        .with_keyword("set", "設定", ["セット"])
        .with_keyword("put", "置く", ["配置"])
        .with_keyword("toggle", "切り替える", ["切り替え", "トグル"])
        .with_keyword("add", "追加", ["足す"])
        .with_keyword("remove", "削除", ["除去"])
        .with_keyword("show", "表示", Vec::<String>::new())
        .with_keyword("hide", "非表示", ["隠す"])
        .with_keyword("wait", "待つ", ["待機"])
        .with_keyword("on", "したら", ["されたら"])
}

fn patterns() -> Vec<LanguagePattern> {
    vec![
        // #box を 5 に 設定 [する]
        LanguagePattern::authored(
            "ja:set:1",
            "ja",
            "set",
            100,
            vec![
                TemplateToken::role(Destination),
                TemplateToken::literal("を"),
                TemplateToken::role(Patient),
                TemplateToken::literal_with("に", ["へ"]),
                TemplateToken::literal_with("設定", ["セット"]),
                TemplateToken::optional_group(vec![TemplateToken::literal_with(
                    "する",
                    ["して", "しろ"],
                )]),
            ],
        )
        .with_extraction(
            Destination,
            ExtractionRule::marker("を", Vec::<String>::new(), MarkerSide::Before),
        )
        .with_extraction(
            Patient,
            ExtractionRule::marker("に", ["へ"], MarkerSide::Before),
        ),
        // 5 を #box に 置く
        LanguagePattern::authored(
            "ja:put:1",
            "ja",
            "put",
            100,
            vec![
                TemplateToken::role(Patient),
                TemplateToken::literal("を"),
                TemplateToken::role_single(Destination),
                TemplateToken::literal_with("に", ["へ"]),
                TemplateToken::literal_with("置く", ["配置"]),
            ],
        )
        .with_extraction(
            Patient,
            ExtractionRule::marker("を", Vec::<String>::new(), MarkerSide::Before),
        )
        .with_extraction(
            Destination,
            ExtractionRule::marker("に", ["へ"], MarkerSide::Before),
        ),
        // .active を 切り替える
        LanguagePattern::authored(
            "ja:toggle:1",
            "ja",
            "toggle",
            100,
            vec![
                TemplateToken::role(Patient),
                TemplateToken::literal("を"),
                TemplateToken::literal_with("切り替える", ["切り替え", "トグル"]),
            ],
        )
        .with_extraction(
            Patient,
            ExtractionRule::marker("を", Vec::<String>::new(), MarkerSide::Before),
        ),
        // [#nav に] .hot を 追加
        LanguagePattern::authored(
            "ja:add:1",
            "ja",
            "add",
            100,
            vec![
                TemplateToken::optional_group(vec![
                    TemplateToken::role_single(Destination),
                    TemplateToken::literal_with("に", ["へ"]),
                ]),
                TemplateToken::role(Patient),
                TemplateToken::literal("を"),
                TemplateToken::literal_with("追加", ["足す"]),
            ],
        )
        .with_extraction(
            Destination,
            ExtractionRule::marker("に", ["へ"], MarkerSide::Before),
        )
        .with_extraction(
            Patient,
            ExtractionRule::marker("を", Vec::<String>::new(), MarkerSide::Before),
        ),
        // [#nav から] .hot を 削除
        LanguagePattern::authored(
            "ja:remove:1",
            "ja",
            "remove",
            100,
            vec![
                TemplateToken::optional_group(vec![
                    TemplateToken::role_single(Source),
                    TemplateToken::literal("から"),
                ]),
                TemplateToken::role(Patient),
                TemplateToken::literal("を"),
                TemplateToken::literal_with("削除", ["除去"]),
            ],
        )
        .with_extraction(
            Source,
            ExtractionRule::marker("から", Vec::<String>::new(), MarkerSide::Before),
        )
        .with_extraction(
            Patient,
            ExtractionRule::marker("を", Vec::<String>::new(), MarkerSide::Before),
        ),
        // #modal を 表示
        LanguagePattern::authored(
            "ja:show:1",
            "ja",
            "show",
            100,
            vec![
                TemplateToken::role(Patient),
                TemplateToken::literal("を"),
                TemplateToken::literal("表示"),
            ],
        )
        .with_extraction(
            Patient,
            ExtractionRule::marker("を", Vec::<String>::new(), MarkerSide::Before),
        ),
        // #modal を 非表示
        LanguagePattern::authored(
            "ja:hide:1",
            "ja",
            "hide",
            100,
            vec![
                TemplateToken::role(Patient),
                TemplateToken::literal("を"),
                TemplateToken::literal_with("非表示", ["隠す"]),
            ],
        )
        .with_extraction(
            Patient,
            ExtractionRule::marker("を", Vec::<String>::new(), MarkerSide::Before),
        ),
        // 2 待つ
        LanguagePattern::authored(
            "ja:wait:1",
            "ja",
            "wait",
            100,
            vec![
                TemplateToken::role(Patient),
                TemplateToken::literal_with("待つ", ["待機", "待て"]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(0)),
        // クリック したら <body>
        LanguagePattern::authored(
            "ja:on:1",
            "ja",
            "on",
            100,
            vec![
                TemplateToken::role_single(Event),
                TemplateToken::literal_with("したら", ["されたら", "時に"]),
                TemplateToken::body(Body),
            ],
        )
        .with_extraction(
            Event,
            ExtractionRule::marker("したら", ["されたら", "時に"], MarkerSide::Before),
        )
        .with_extraction(Body, ExtractionRule::position(2)),
    ]
}
