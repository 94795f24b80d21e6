use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::commands::{print_json, Context};
use crate::util::parse_mask_arg;
use formask_core::MaskKind;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Mask to apply: phone, uppercase or capitalize
    pub mask: String,
    /// Raw input text
    pub value: String,
    /// Previously accepted display value
    #[arg(long, default_value = "")]
    pub previous: String,
}

#[derive(Debug, Args)]
pub struct TraceArgs {
    /// Text to type, one character at a time
    pub value: String,
    #[arg(long, default_value = "phone")]
    pub mask: String,
}

#[derive(Debug, Serialize)]
struct ApplyOutput<'a> {
    mask: &'a str,
    input: &'a str,
    display: &'a str,
    changed: bool,
}

#[derive(Debug, Serialize)]
struct TraceStep {
    pressed: char,
    display: String,
}

pub fn apply(ctx: &Context<'_>, args: ApplyArgs) -> Result<()> {
    let mask = parse_mask_arg(&args.mask)?;
    let (display, changed) = match mask.apply(&args.value, &args.previous) {
        Some(next) => (next, true),
        None => (args.value.clone(), false),
    };
    debug!(mask = mask.as_str(), changed, "mask applied");

    if ctx.json {
        return print_json(&ApplyOutput {
            mask: mask.as_str(),
            input: &args.value,
            display: &display,
            changed,
        });
    }
    println!("{}", display);
    Ok(())
}

pub fn trace(ctx: &Context<'_>, args: TraceArgs) -> Result<()> {
    let mask = parse_mask_arg(&args.mask)?;
    let steps = trace_steps(mask, &args.value);

    if ctx.json {
        return print_json(&steps);
    }
    for step in &steps {
        println!("{}  {}", step.pressed, step.display);
    }
    Ok(())
}

// Simulates a keystroke per character: each raw input is the previous
// display value with one character appended, and the mask result becomes
// the next previous value.
fn trace_steps(mask: MaskKind, value: &str) -> Vec<TraceStep> {
    let mut steps = Vec::new();
    let mut display = String::new();
    for ch in value.chars() {
        let mut raw = display.clone();
        raw.push(ch);
        display = mask.apply(&raw, &display).unwrap_or(raw);
        steps.push(TraceStep {
            pressed: ch,
            display: display.clone(),
        });
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::trace_steps;
    use formask_core::MaskKind;

    #[test]
    fn trace_steps_threads_each_result_as_the_previous_value() {
        let steps = trace_steps(MaskKind::PhoneUs, "1234567890");
        let displays: Vec<&str> = steps.iter().map(|step| step.display.as_str()).collect();
        assert_eq!(
            displays,
            [
                "1",
                "12",
                "(123)",
                "(123) 4",
                "(123) 45",
                "(123) 456",
                "(123) 456-7",
                "(123) 456-78",
                "(123) 456-789",
                "(123) 456-7890",
            ]
        );
    }

    #[test]
    fn trace_steps_handles_name_masks() {
        let steps = trace_steps(MaskKind::Uppercase, "ab");
        assert_eq!(steps.last().expect("step").display, "AB");
    }
}
