/// Built-in reference vocabulary as `(name, aliases)` rows.
///
/// Order matters: parsed skills are reported in this order.
pub const DEFAULT_SKILLS: &[(&str, &[&str])] = &[
    ("python", &[]),
    ("java", &[]),
    ("sql", &[]),
    ("excel", &[]),
    ("tableau", &[]),
    ("power bi", &[]),
    ("statistics", &[]),
    ("machine learning", &[]),
    ("flask", &[]),
    ("django", &[]),
    ("aws", &[]),
    ("azure", &[]),
    ("docker", &[]),
    ("react", &[]),
];
