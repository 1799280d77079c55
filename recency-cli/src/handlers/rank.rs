use crate::args::RankArgs;
use crate::context::RecencyCliContext;
use crate::output::{OutputFormat, format_warning, print_records};
use crate::utils::read_records;
use serde_json::Value;
use std::io::Write;

pub fn handle_rank_command(
    args: &RankArgs,
    ctx: &RecencyCliContext,
    output_format: OutputFormat,
    out: &mut dyn Write,
) -> recency::Result<()> {
    let records = read_records(&args.input)?;
    rank_records(&records, args.limit, ctx, output_format, out)
}

/// Rank already-parsed records and print them.
pub fn rank_records(
    records: &[Value],
    limit: Option<usize>,
    ctx: &RecencyCliContext,
    output_format: OutputFormat,
    out: &mut dyn Write,
) -> recency::Result<()> {
    let non_objects = records.iter().filter(|r| !r.is_object()).count();
    if non_objects > 0 && !output_format.is_machine() {
        eprintln!(
            "{}",
            format_warning(&format!(
                "{} of {} entries are not objects; they sort last",
                non_objects,
                records.len()
            ))
        );
    }

    let ranked = match limit {
        Some(limit) => ctx.ranker.rank_top(records, limit),
        None => ctx.ranker.rank(records),
    };
    let ranked: Vec<&Value> = ranked.iter().collect();

    let scores: Vec<_> = ranked.iter().map(|r| ctx.ranker.explain(r)).collect();
    print_records(
        out,
        &ranked,
        &scores,
        &ctx.config.ranking.id_field,
        output_format,
    )?;
    Ok(())
}
