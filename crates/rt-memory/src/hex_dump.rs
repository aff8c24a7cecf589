use crate::Buffer;

/// Prints the contents of a [`Buffer`].
#[derive(Clone, Copy, Debug)]
pub struct HexDump<'a, B: Buffer + ?Sized> {
    buffer: &'a B,
}

impl<'a, B: Buffer + ?Sized> HexDump<'a, B> {
    /// Constructs a hex dump of the given [`Buffer`].
    pub const fn new(buffer: &'a B) -> Self {
        Self { buffer }
    }
}

impl<'a, B: Buffer + ?Sized> From<&'a B> for HexDump<'a, B> {
    fn from(buffer: &'a B) -> Self {
        Self::new(buffer)
    }
}

impl<B: Buffer + ?Sized> HexDump<'_, B> {
    fn write(&self, f: &mut core::fmt::Formatter<'_>, upper: bool) -> core::fmt::Result {
        let size = self.buffer.byte_len();
        let width = size.checked_ilog(16).unwrap_or_default().max(7) as usize + 1;

        write!(f, "{: <width$}", "Offset")?;
        if upper {
            writeln!(f, "  00 01 02 03  04 05 06 07  08 09 0A 0B  0C 0D 0E 0F  ASCII")?;
        } else {
            writeln!(f, "  00 01 02 03  04 05 06 07  08 09 0a 0b  0c 0d 0e 0f  ASCII")?;
        }

        let mut bytes = [0u8; 16];
        let mut offset = 0;
        while offset < size {
            let bytes = &mut bytes[..16usize.min(size - offset)];
            if self.buffer.copy_to_slice(offset, bytes).is_err() {
                break;
            }

            if upper {
                write!(f, "{offset:0width$X}")?;
            } else {
                write!(f, "{offset:0width$x}")?;
            }

            for i in 0..16 {
                if i % 4 == 0 {
                    f.write_str("  ")?;
                } else {
                    f.write_str(" ")?;
                }

                match bytes.get(i) {
                    Some(b) if upper => write!(f, "{b:02X}")?,
                    Some(b) => write!(f, "{b:02x}")?,
                    None => f.write_str("  ")?,
                }
            }

            f.write_str("  ")?;
            for b in bytes.iter() {
                let c = if b.is_ascii_graphic() || *b == b' ' {
                    char::from(*b)
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }

            writeln!(f)?;

            offset += bytes.len();
        }

        Ok(())
    }
}

impl<B: Buffer + ?Sized> core::fmt::UpperHex for HexDump<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write(f, true)
    }
}

impl<B: Buffer + ?Sized> core::fmt::LowerHex for HexDump<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write(f, false)
    }
}

impl<B: Buffer + ?Sized> core::fmt::Display for HexDump<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::UpperHex::fmt(self, f)
    }
}
