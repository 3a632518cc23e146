//! Long help text constants for CLI subcommands.
//!
//! Extracted from `cli.rs` to keep the argument definitions concise.

/// Percentile prediction for a sitting and raw score.
pub const PREDICT: &str = "\
Predict the percentile for a raw score in a given sitting.

The sitting's M99 (raw score at the 99th percentile) selects a
difficulty-adjusted curve; the score is placed on it by linear
interpolation between neighbouring points.

Difficulty:
  t = clamp((M99 - 151) / (236 - 151), 0, 1)    0 = hardest, 1 = easiest

Curve (per reference point p with shape factor f):
  p = 99.0   expected = M99                     (anchor, never scaled)
  p > 99.0   expected = f * (1.08 - 0.20 t) * M99
  p < 99.0   expected = f * (0.96 + 0.04 t) * M99

Scores at or above the top of the curve report 99.99; scores at or below
the bottom report 0.00. Marks must be whole numbers from 0 to 300;
289, 293, 294, 297, 298 and 299 cannot be obtained and are rejected.

Examples:
  pp predict 24S1 170            # 99.00
  pp predict 21S1 180 --json     # {\"percentile\": \"...\"}
  pp --config pp.toml predict 30S1 150";

/// Adjusted curve listing.
pub const CURVE: &str = "\
Print the difficulty-adjusted curve for a sitting or an ad-hoc M99.

Columns:
  Percentile  reference percentile (99.99 down to 0)
  Base        reference shape factor
  Factor      effective factor after difficulty adjustment
  Marks       expected raw score at that percentile

For easy sittings (M99 above about 193) the lowest upper-tail points
would fall below the anchor; they are raised to the anchor score so the
curve never increases as the percentile drops.

Examples:
  pp curve 24S1
  pp curve --m99 205 --json";

/// Sitting table listing.
pub const SITTINGS: &str = "\
List the sittings with their M99 and difficulty coefficient.

The built-in table can be replaced with a TOML file:

  [sittings]
  \"24S1\" = 170
  \"24S2\" = 151

  [scores]
  min = 0
  max = 300
  disallowed = [289, 293, 294, 297, 298, 299]

Examples:
  pp sittings
  pp --config pp.toml sittings --json";
