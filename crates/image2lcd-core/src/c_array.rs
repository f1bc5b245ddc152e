//! C array serialization.
//!
//! Output format:
//! ```text
//! static const unsigned char gImage_<name>[<len>] = {
//! 0XF8,0X00,0XF8,0X00,...   (16 pixels per line)
//! };
//! ```
//! Line breaks follow the x position inside each row, not the running byte
//! count, so a width that is not a multiple of 16 yields a short line at the
//! end of every row.

use std::io::{self, Write};

use crate::{OutputBuffer, BYTES_PER_PIXEL};

/// Pixels (byte pairs) per output line.
pub const PIXELS_PER_LINE: usize = 16;

/// Prefix of every generated array identifier.
pub const ARRAY_PREFIX: &str = "gImage_";

/// Builds the array identifier for a base name. No identifier validation.
pub fn array_name(base: &str) -> String {
    format!("{ARRAY_PREFIX}{base}")
}

/// Streams `buffer` as a C array declaration named `name`.
pub fn write_c_array<W: Write>(writer: &mut W, name: &str, buffer: &OutputBuffer) -> io::Result<()> {
    writeln!(
        writer,
        "static const unsigned char {}[{}] = {{",
        name,
        buffer.len()
    )?;

    for row in buffer.rows() {
        for (x, pair) in row.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            write!(writer, "0X{:02X},0X{:02X},", pair[0], pair[1])?;
            if (x + 1) % PIXELS_PER_LINE == 0 {
                writer.write_all(b"\n")?;
            }
        }
    }

    writer.write_all(b"\n};\n")
}

/// Renders `buffer` as a C array declaration into a string.
pub fn render_c_array(name: &str, buffer: &OutputBuffer) -> io::Result<String> {
    let mut out = Vec::with_capacity(buffer.len() * 5 + 64);
    write_c_array(&mut out, name, buffer)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
