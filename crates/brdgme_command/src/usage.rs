//! Plain-text usage summaries derived from a [`Spec`].

use crate::spec::Spec;

/// One line of command help.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Usage {
    /// Compact syntax, e.g. `bid 0-15`.
    pub syntax: String,
    /// Description from the nearest [`Spec::Doc`].
    pub desc: Option<String>,
}

impl Usage {
    fn new(syntax: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            desc: None,
        }
    }
}

impl Spec {
    /// Summarizes this spec, one entry per top-level alternative.
    #[must_use]
    pub fn usage(&self) -> Vec<Usage> {
        self.usage_named(None)
    }

    /// `doc_name` is the name of the enclosing [`Spec::Doc`], which replaces
    /// enum candidate lists.
    fn usage_named(&self, doc_name: Option<&str>) -> Vec<Usage> {
        match self {
            Self::Int { min, max } => vec![Usage::new(int_syntax(*min, *max))],
            Self::Token(token) => vec![Usage::new(token.clone())],
            Self::Enum { values, .. } => vec![Usage::new(match doc_name {
                Some(name) => format!("[{name}]"),
                None => format!("[{}]", values.join(" | ")),
            })],
            Self::OneOf(specs) => specs
                .iter()
                .filter_map(|s| join(s.usage_named(doc_name)))
                .collect(),
            Self::Chain(specs) => vec![chain_usage(specs, doc_name)],
            Self::Many { spec, min, max, .. } => many_usage(spec, *min, *max, doc_name)
                .into_iter()
                .collect(),
            Self::Opt(spec) => join(spec.usage_named(doc_name))
                .map(|mut usage| {
                    usage.syntax.push('?');
                    usage
                })
                .into_iter()
                .collect(),
            Self::Doc { name, desc, spec } => join(spec.usage_named(Some(name)))
                .map(|usage| Usage {
                    desc: desc.clone().or(usage.desc),
                    ..usage
                })
                .into_iter()
                .collect(),
            Self::Player => vec![Usage::new("player")],
            Self::Space => vec![Usage::new(" ")],
        }
    }
}

fn int_syntax(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (None, None) => "#".to_string(),
        (Some(min), Some(max)) if min == max => min.to_string(),
        (min, Some(max)) => format!("{}-{max}", min.unwrap_or(0)),
        (Some(min), None) => format!("{min}+"),
    }
}

/// Collapses alternatives into a single bracketed entry, keeping the first
/// alternative's description.
fn join(mut usages: Vec<Usage>) -> Option<Usage> {
    match usages.len() {
        0 => None,
        1 => usages.pop(),
        _ => {
            let desc = usages[0].desc.clone();
            let syntax: Vec<String> = usages.into_iter().map(|u| u.syntax).collect();
            Some(Usage {
                syntax: format!("[{}]", syntax.join(" | ")),
                desc,
            })
        }
    }
}

fn chain_usage(specs: &[Spec], doc_name: Option<&str>) -> Usage {
    let mut usage = Usage::new(String::new());
    for (i, spec) in specs.iter().enumerate() {
        if let Some(part) = join(spec.usage_named(doc_name)) {
            if i == 0 {
                usage.desc = part.desc;
            }
            usage.syntax.push_str(&part.syntax);
        }
    }
    usage
}

fn many_usage(
    spec: &Spec,
    min: Option<usize>,
    max: Option<usize>,
    doc_name: Option<&str>,
) -> Option<Usage> {
    let mut usage = join(spec.usage_named(doc_name))?;
    match (min, max) {
        (_, Some(0)) => return None,
        (Some(min), Some(max)) if min > max => return None,
        (Some(0) | None, Some(1)) => usage.syntax.push('?'),
        (Some(1), Some(1)) => {}
        (None | Some(0), _) => usage.syntax.push('*'),
        (Some(1), _) => usage.syntax.push('+'),
        (Some(min), None) => usage.syntax = format!("({min}+){}", usage.syntax),
        (min, Some(max)) => {
            usage.syntax = format!("{}({}-{max})", usage.syntax, min.unwrap_or(0));
        }
    }
    Some(usage)
}

/// Renders usage entries, each description on its own line above the
/// indented syntax.
#[must_use]
pub fn render_usage(usages: &[Usage]) -> String {
    let mut out = String::new();
    for (i, usage) in usages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if let Some(desc) = &usage.desc {
            out.push_str(desc);
            out.push_str("\n  ");
        }
        out.push_str(&usage.syntax);
    }
    out
}
