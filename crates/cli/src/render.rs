use reuse_protocol::{HookResponse, MatchEntry};
use reuse_similarity::MatchResult;

/// How many matches an advisory message names.
const ADVISORY_MATCH_LIMIT: usize = 3;

pub fn to_match_entry(result: &MatchResult) -> MatchEntry {
    MatchEntry {
        name: result.display_name.clone(),
        path: result.relative_path.clone(),
        score: result.score,
        groups: result.matched_concepts.iter().cloned().collect(),
    }
}

fn match_list(matches: &[MatchResult]) -> String {
    matches
        .iter()
        .take(ADVISORY_MATCH_LIMIT)
        .map(|m| {
            format!(
                "'{}' (src/components/{}, score={:.2})",
                m.display_name, m.relative_path, m.score
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn hook_advisory(basename: &str, matches: &[MatchResult]) -> HookResponse {
    let top = &matches[0];
    let list = match_list(matches);

    HookResponse::advise(
        format!(
            "Component similarity detected: '{basename}' may overlap with \
             existing component(s): {list}."
        ),
        format!(
            "Stop. A component named '{}' already exists at src/components/{}. \
             Evaluate if it can be reused or extended before creating a new file \
             '{basename}'. Similar components found: {list}. Only proceed with a \
             new file if the existing components genuinely cannot serve this \
             purpose.",
            top.display_name, top.relative_path
        ),
    )
}

pub fn check_advisory(target: &str, matches: &[MatchResult]) -> String {
    let mut lines = vec![format!(
        "'{}' may duplicate {} existing component(s):",
        target,
        matches.len()
    )];
    for m in matches {
        let concepts = if m.matched_concepts.is_empty() {
            String::new()
        } else {
            format!(
                " [{}]",
                m.matched_concepts.iter().cloned().collect::<Vec<_>>().join(", ")
            )
        };
        lines.push(format!(
            "  {:.2}  {}{}",
            m.score, m.relative_path, concepts
        ));
    }
    lines.join("\n")
}
