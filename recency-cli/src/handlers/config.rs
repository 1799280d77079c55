use crate::context::RecencyCliContext;
use crate::output::OutputFormat;
use colored::*;
use recency::RecencyError;
use std::io::Write;

pub fn handle_config_command(
    ctx: &RecencyCliContext,
    output_format: OutputFormat,
    out: &mut dyn Write,
) -> recency::Result<()> {
    if output_format.is_machine() {
        serde_json::to_writer_pretty(&mut *out, &ctx.config)
            .map_err(|e| RecencyError::Other(e.to_string()))?;
        writeln!(out)?;
        return Ok(());
    }

    let ranking = &ctx.config.ranking;
    let logging = &ctx.config.logging;

    writeln!(out, "{}", "Ranking".bold())?;
    writeln!(out, "  priority fields: {}", ranking.priority_fields.join(", "))?;
    writeln!(out, "  narrow fields:   {}", ranking.narrow_fields.join(", "))?;
    writeln!(out, "  scan suffixes:   {}", ranking.scan_suffixes.join(", "))?;
    writeln!(out, "  id field:        {}", ranking.id_field)?;
    writeln!(out, "{}", "Logging".bold())?;
    writeln!(out, "  level:           {}", logging.level)?;
    writeln!(out, "  format:          {:?}", logging.format)?;
    match &logging.file {
        Some(path) => writeln!(out, "  file:            {}", path.display())?,
        None => writeln!(out, "  file:            -")?,
    }
    Ok(())
}
