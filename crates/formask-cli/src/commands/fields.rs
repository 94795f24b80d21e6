use anyhow::Result;
use clap::Args;

use crate::commands::{print_json, Context};

#[derive(Debug, Args)]
pub struct FieldsArgs {}

pub fn list_fields(ctx: &Context<'_>, _args: FieldsArgs) -> Result<()> {
    if ctx.json {
        return print_json(&ctx.config.fields);
    }
    for spec in &ctx.config.fields {
        println!("{}\t{}", spec.label, spec.mask.as_str());
    }
    Ok(())
}
