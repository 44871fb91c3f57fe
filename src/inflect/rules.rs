use once_cell::sync::Lazy;
use regex::Regex;

/// Words that are spelled the same in singular and plural.
pub(super) const UNCOUNTABLE: &[&str] = &[
    "audio",
    "bison",
    "cattle",
    "chassis",
    "compensation",
    "coreopsis",
    "data",
    "deer",
    "education",
    "emoji",
    "equipment",
    "evidence",
    "feedback",
    "firmware",
    "fish",
    "furniture",
    "gold",
    "hardware",
    "information",
    "jedi",
    "kin",
    "knowledge",
    "love",
    "metadata",
    "money",
    "moose",
    "news",
    "nutrition",
    "offspring",
    "plankton",
    "police",
    "rain",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "swine",
    "traffic",
    "wheat",
];

/// Irregular `(singular, plural)` pairs, matched against the last word.
pub(super) const IRREGULAR: &[(&str, &str)] = &[
    ("atlas", "atlases"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("human", "humans"),
    ("leaf", "leaves"),
    ("man", "men"),
    ("move", "moves"),
    ("ox", "oxen"),
    ("person", "people"),
    ("sex", "sexes"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("zombie", "zombies"),
];

/// Ordered suffix rules; the first match wins.
const SINGULAR_PATTERNS: &[(&str, &str)] = &[
    (r"(?i)(s)tatuses$", "${1}tatus"),
    (r"(?i)^(.*)(menu)s$", "${1}${2}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias)(es)*$", "${1}"),
    (r"(?i)(buffal|her|potat|tomat|volcan)oes$", "${1}o"),
    (
        r"(?i)(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|viri?)i$",
        "${1}us",
    ),
    (r"(?i)([ftw]ax)es", "${1}"),
    (r"(?i)(cris|ax|test)(is|es)$", "${1}is"),
    (
        r"(?i)(analy|^ba|diagno|parenthe|progno|synop|the)(sis|ses)$",
        "${1}sis",
    ),
    (r"(?i)(shoe|slave)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"ouses$", "ouse"),
    (r"([^a])uses$", "${1}us"),
    (r"(?i)([ml])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)(drive)s$", "${1}"),
    (r"(?i)([^fo])ves$", "${1}fe"),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"eaus$", "eau"),
    (r"(?i)(ss)$", "${1}"),
    (r"^(.*us)$", "${1}"),
    (r"(?i)s$", ""),
];

/// Compiled suffix rules, built once on first use.
#[expect(
    clippy::expect_used,
    reason = "Rule patterns are compile-time constants and cannot fail"
)]
pub(super) static SINGULAR_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SINGULAR_PATTERNS
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("singular rule is a valid regex literal"),
                *replacement,
            )
        })
        .collect()
});
