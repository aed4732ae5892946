//! Chinese language module.
//!
//! Uses the Han-script tokenizer: the segmentation vocabulary below carries
//! every keyword and marker form (simplified and traditional), so unspaced
//! input like `設置#box为5` splits correctly.

use std::sync::Arc;

use glossia_foundation::{Result, ValueKind};
use glossia_language::{
    AdpositionOrder, Capture, ExtractionRule, LanguagePattern, LanguageProfile, MarkerSide,
    TemplateToken, WordOrder,
};
use glossia_parser::{HanScript, LanguageRegistry};

use glossia_foundation::SemanticRole::{Body, Destination, Event, Patient, Source};

/// Segmentation vocabulary: all surface forms the patterns can match.
const VOCABULARY: &[&str] = &[
    "设置", "設置", "设定", "設定", "为", "為", "到", "至", "放置", "放", "进", "進", "切换",
    "切換", "添加", "加上", "移除", "删除", "刪除", "从", "從", "显示", "顯示", "隐藏", "隱藏",
    "等待", "等", "当", "當", "一旦",
];

/// Registers Chinese: tokenizer, profile, and the authored pattern table.
///
/// # Errors
///
/// Propagates pattern validation failures (none are expected from the
/// shipped table).
pub fn register(registry: &LanguageRegistry) -> Result<()> {
    registry.register_language(
        "zh",
        Arc::new(HanScript::new(VOCABULARY.iter().copied())),
        profile(),
    );
    registry.register_patterns("zh", patterns())
}

fn profile() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(Patient, "为", ["為"])
        .with_marker(Destination, "到", ["至"])
        .with_marker(Source, "从", ["從"])
        .with_keyword("set", "设置", ["設置", "设定", "設定"])
        .with_keyword("put", "放置", ["放"])
        .with_keyword("toggle", "切换", ["切換"])
        .with_keyword("add", "添加", ["加上"])
        .with_keyword("remove", "移除", ["删除", "刪除"])
        .with_keyword("show", "显示", ["顯示"])
        .with_keyword("hide", "隐藏", ["隱藏"])
        .with_keyword("wait", "等待", ["等"])
        .with_keyword("on", "当", ["當"])
}

fn patterns() -> Vec<LanguagePattern> {
    vec![
        // 設置 #box 为 5
        LanguagePattern::authored(
            "zh:set:1",
            "zh",
            "set",
            100,
            vec![
                TemplateToken::literal_with("设置", ["設置", "设定", "設定"]),
                TemplateToken::role(Destination),
                TemplateToken::literal_with("为", ["為", "到"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Destination, ExtractionRule::position(1))
        .with_extraction(
            Patient,
            ExtractionRule::marker("为", ["為", "到"], MarkerSide::After),
        ),
        // 放置 5 到 #box
        LanguagePattern::authored(
            "zh:put:1",
            "zh",
            "put",
            100,
            vec![
                TemplateToken::literal_with("放置", ["放"]),
                TemplateToken::role(Patient),
                TemplateToken::literal_with("到", ["进", "進", "至"]),
                TemplateToken::role(Destination),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("到", ["进", "進", "至"], MarkerSide::After),
        ),
        // 切换 .active
        LanguagePattern::authored(
            "zh:toggle:1",
            "zh",
            "toggle",
            100,
            vec![
                TemplateToken::literal_with("切换", ["切換"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // 添加 .hot [到 #nav]
        LanguagePattern::authored(
            "zh:add:1",
            "zh",
            "add",
            100,
            vec![
                TemplateToken::literal_with("添加", ["加上"]),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal_with("到", ["至"]),
                    TemplateToken::role(Destination),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Destination,
            ExtractionRule::marker("到", ["至"], MarkerSide::After),
        ),
        // 移除 .hot [从 #nav]
        LanguagePattern::authored(
            "zh:remove:1",
            "zh",
            "remove",
            100,
            vec![
                TemplateToken::literal_with("移除", ["删除", "刪除"]),
                TemplateToken::role(Patient),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal_with("从", ["從"]),
                    TemplateToken::role(Source),
                ]),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1))
        .with_extraction(
            Source,
            ExtractionRule::marker("从", ["從"], MarkerSide::After),
        ),
        // 显示 #modal
        LanguagePattern::authored(
            "zh:show:1",
            "zh",
            "show",
            100,
            vec![
                TemplateToken::literal_with("显示", ["顯示"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // 隐藏 #modal
        LanguagePattern::authored(
            "zh:hide:1",
            "zh",
            "hide",
            100,
            vec![
                TemplateToken::literal_with("隐藏", ["隱藏"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // 等待 2
        LanguagePattern::authored(
            "zh:wait:1",
            "zh",
            "wait",
            100,
            vec![
                TemplateToken::literal_with("等待", ["等"]),
                TemplateToken::role(Patient),
            ],
        )
        .with_extraction(Patient, ExtractionRule::position(1)),
        // 当 click [从 #btn] <body>
        LanguagePattern::authored(
            "zh:on:1",
            "zh",
            "on",
            100,
            vec![
                TemplateToken::literal_with("当", ["當", "一旦"]),
                TemplateToken::role_expecting(Event, vec![ValueKind::Reference], Capture::Single),
                TemplateToken::optional_group(vec![
                    TemplateToken::literal_with("从", ["從"]),
                    TemplateToken::role_single(Source),
                ]),
                TemplateToken::body(Body),
            ],
        )
        .with_extraction(Event, ExtractionRule::position(1))
        .with_extraction(
            Source,
            ExtractionRule::marker("从", ["從"], MarkerSide::After),
        )
        .with_extraction(Body, ExtractionRule::position(3)),
    ]
}
