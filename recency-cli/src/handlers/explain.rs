use crate::args::ExplainArgs;
use crate::context::RecencyCliContext;
use crate::output::{OutputFormat, print_explanations};
use crate::utils::read_records;
use serde_json::Value;
use std::io::Write;

pub fn handle_explain_command(
    args: &ExplainArgs,
    ctx: &RecencyCliContext,
    output_format: OutputFormat,
    out: &mut dyn Write,
) -> recency::Result<()> {
    let records = read_records(&args.input)?;

    let ranked = match args.limit {
        Some(limit) => ctx.ranker.rank_top(&records, limit),
        None => ctx.ranker.rank(&records),
    };
    let ranked: Vec<&Value> = ranked.iter().collect();

    let scores: Vec<_> = ranked.iter().map(|r| ctx.ranker.explain(r)).collect();
    print_explanations(
        out,
        &ranked,
        &scores,
        &ctx.config.ranking.id_field,
        output_format,
    )?;
    Ok(())
}
