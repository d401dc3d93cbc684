//! Lists the supported frame formats.

use anyhow::Result;
use tweak_core::FrameFormat;

/// One table row per format.
pub fn render() -> String {
    let mut out = format!("{:<10} {:<6} {:>6} {:>5} {:>5}\n", "NAME", "FAMILY", "PLANES", "SS_W", "SS_H");
    for format in FrameFormat::ALL {
        out.push_str(&format!(
            "{:<10} {:<6} {:>6} {:>5} {:>5}\n",
            format.name(),
            format.family.to_string(),
            format.plane_count(),
            format.ss_w,
            format.ss_h
        ));
    }
    out
}

/// Run the formats command.
pub fn run(_verbose: u8) -> Result<()> {
    print!("{}", render());
    Ok(())
}
