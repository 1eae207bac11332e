use super::{build_energetics, collect_pairs, print_scores, read_input};
use crate::cli::MismatchArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use stickyends::workflows::score;
use tracing::{info, warn};

pub fn run(args: MismatchArgs) -> Result<()> {
    let energetics = build_energetics(&args.energetics)?;
    let end_type = args.input.end_type;

    let result = match &args.against {
        Some(query) => {
            let mut targets = args.ends.clone();
            if let Some(path) = &args.input.input {
                targets.extend(parser::parse_sequence_tokens(&read_input(path)?));
            }
            if targets.is_empty() {
                return Err(CliError::NoTargets {
                    query: query.clone(),
                });
            }
            info!("Scoring {} against {} end(s).", query, targets.len());
            score::score_against(&energetics, end_type, query, &targets)
        }
        None => {
            let pairs = collect_pairs(&args.input)?;
            info!("Scoring {} pair(s).", pairs.len());
            score::score_pairs(&energetics, end_type, &pairs)
        }
    };

    let scores = result.inspect_err(|e| {
        if e.is_not_implemented() {
            warn!("The selected mismatch model is not available. Use '--model dangle'.");
        }
    })?;

    print_scores(&scores)
}
