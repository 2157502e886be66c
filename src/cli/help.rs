use std::io::{self, Write};

use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_help(&mut out)?;
    out.flush()
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    box_top(out, "Seedpass")?;
    box_line_center(out, "Deterministic password synthesizer")?;
    box_line(out, "")?;
    box_line(out, "The same seed and constraints always produce the same password.")?;
    box_line(out, "Without --seed, each password gets a fresh 32-byte OS seed.")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  seedpass [OPTIONS]")?;
    box_line(out, "")?;
    box_line(out, "OPTIONS:")?;
    box_line(out, " Password:")?;
    box_opt(
        out,
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH} to {MAX_LENGTH} (default: 16)"),
    )?;
    box_opt(out, "  -n, --number <N>", "How many to generate. With --bytes, this is byte count and supports K/M/G suffixes.")?;
    box_opt(out, "      --seed <HEX|->", "Hex seed, or - to read one line from stdin")?;
    box_opt(out, "      --no-<CLASS>", "Disable a class (upper, lower, digit, symbol) and drop its minimum")?;
    box_opt(out, "      --min-<CLASS> <N>", "Require at least N characters of a class (default: 1 each)")?;
    box_line(out, "")?;
    box_line(out, " Output:")?;
    box_opt(out, "  -o, --output [FILE]", "Append to file (default: seedpass.txt)")?;
    box_opt(out, "  -b, --board", "Copy to clipboard instead of printing")?;
    box_opt(out, "  -e, --entropy", "Print an entropy estimate to stderr")?;
    box_opt(out, "  -q, --quiet", "Suppress all output except passwords/bytes")?;
    box_line(out, "")?;
    box_line(out, " Settings:")?;
    box_opt(out, "  -s, --saved", "Start from saved settings")?;
    box_opt(out, "      --save", "Save the effective settings as defaults")?;
    box_line(out, "")?;
    box_line(out, " Diagnostics:")?;
    box_opt(out, "      --bytes", "Dump the expanded seed stream. Use -n for limit, -o for file.")?;
    box_opt(out, "  -h, --help", "Display this help message")?;
    box_opt(out, "  -v, --version", "Display version")?;
    box_line(out, "")?;
    box_line(out, "ENVIRONMENT:")?;
    box_opt(out, "  SEEDPASS_LOG", "Log filter, e.g. debug (default: warn)")?;
    box_opt(out, "  SEEDPASS_CONFIG", "Settings file path")?;
    box_line(out, "")?;
    box_line(out, "EXAMPLES:")?;
    box_line(out, "  seedpass                        One 16-character password")?;
    box_line(out, "  seedpass -l 20 -n 3             Three passwords, 20 characters")?;
    box_line(out, "  seedpass --seed $HEX -l 12      Reproducible from a seed")?;
    box_line(out, "  seedpass --no-symbol --min-digit 3  Alphanumeric, 3+ digits")?;
    box_line(out, "  seedpass --bytes --seed $HEX -n 1K")?;
    box_line(out, "")?;
    box_bottom(out)?;
    writeln!(out)
}
