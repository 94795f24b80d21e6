use anyhow::Result;
use formask_core::MaskKind;

use crate::error::invalid_input;

pub fn parse_mask_arg(raw: &str) -> Result<MaskKind> {
    MaskKind::parse(raw).map_err(|err| invalid_input(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_mask_arg;
    use formask_core::MaskKind;

    #[test]
    fn parse_mask_arg_accepts_known_masks() {
        assert_eq!(parse_mask_arg("phone").expect("mask"), MaskKind::PhoneUs);
    }

    #[test]
    fn parse_mask_arg_reports_invalid_input() {
        let err = parse_mask_arg("zip").unwrap_err();
        assert!(err.to_string().contains("unknown mask kind"));
    }
}
