use std::io::{self, Write};

use macq_core::lookup::Lookup;

/// Writes `<address> <vendor>` per result, in the order given.
pub fn write_results<W: Write>(out: &mut W, results: &[Lookup]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{} {}", result.mac, result.vendor)?;
    }
    out.flush()
}
