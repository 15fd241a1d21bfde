use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Positional command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub width: u32,
    pub height: u32,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl CliArgs {
    /// Parse `program width height input output`.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() != 5 {
            let program = args.first().map(String::as_str).unwrap_or("raycast");
            bail!("Usage: {} <width> <height> <input> <output>", program);
        }

        Ok(Self {
            width: parse_dimension("width", &args[1])?,
            height: parse_dimension("height", &args[2])?,
            input: PathBuf::from(&args[3]),
            output: PathBuf::from(&args[4]),
        })
    }
}

fn parse_dimension(name: &str, value: &str) -> Result<u32> {
    let parsed = value
        .parse::<u32>()
        .with_context(|| format!("Invalid {}: \"{}\"", name, value))?;
    if parsed == 0 {
        bail!("Invalid {}: must be greater than zero", name);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = CliArgs::from_args(args(&["raycast", "640", "480", "in.json", "out.ppm"])).unwrap();
        assert_eq!(parsed.width, 640);
        assert_eq!(parsed.height, 480);
        assert_eq!(parsed.input, PathBuf::from("in.json"));
        assert_eq!(parsed.output, PathBuf::from("out.ppm"));
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = CliArgs::from_args(args(&["raycast", "640", "480"])).unwrap_err();
        assert!(err.to_string().starts_with("Usage: raycast"));
    }

    #[test]
    fn test_dimensions_must_be_positive_integers() {
        for (width, height) in [("0", "10"), ("10", "-5"), ("ten", "10"), ("10", "2.5")] {
            assert!(
                CliArgs::from_args(args(&["raycast", width, height, "in.json", "out.ppm"])).is_err(),
                "{}x{} should be rejected",
                width,
                height
            );
        }
    }
}
