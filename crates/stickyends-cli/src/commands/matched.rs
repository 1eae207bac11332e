use super::{build_energetics, collect_pairs, print_scores};
use crate::cli::MatchedArgs;
use crate::error::Result;
use stickyends::workflows::score;
use tracing::info;

pub fn run(args: MatchedArgs) -> Result<()> {
    let energetics = build_energetics(&args.energetics)?;
    let pairs = collect_pairs(&args.input)?;
    info!("Scoring {} matched duplex(es).", pairs.len());
    let scores = score::score_matched(&energetics, args.input.end_type, &pairs)?;
    print_scores(&scores)
}
