//! # ROM Image Loading
//!
//! Loaders for the two image formats the machine accepts: a raw binary
//! and the line-oriented "Wozmon" hex text of the form
//!
//! ```text
//! 1000: A9 42 8D 00 FF
//! 1005: 4C 00 10
//! ```
//!
//! Each line starts with a hex address and a colon, followed by
//! space-separated hex bytes stored at consecutive addresses. Lines
//! without a colon are ignored, as is anything that fails to parse as
//! hex. Bytes addressed below the window base or past its end are
//! skipped.

/// Error returned when a binary image does not fit its target window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The image is larger than the window it is being loaded into.
    TooLarge {
        /// Image size in bytes.
        size: usize,
        /// Window capacity in bytes.
        capacity: usize,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::TooLarge { size, capacity } => {
                write!(f, "image of {size} bytes exceeds {capacity}-byte window")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Copies a raw binary image to the start of `window`.
pub fn load_binary(window: &mut [u8], image: &[u8]) -> Result<(), LoadError> {
    if image.len() > window.len() {
        return Err(LoadError::TooLarge {
            size: image.len(),
            capacity: window.len(),
        });
    }
    window[..image.len()].copy_from_slice(image);
    Ok(())
}

/// Parses Wozmon-format text into `window`, which covers addresses
/// `base ..` for `window.len()` bytes. Returns the number of bytes
/// stored.
///
/// # Examples
///
/// ```
/// use lib65c02::rom::load_wozmon;
///
/// let mut window = [0u8; 16];
/// let count = load_wozmon(&mut window, 0x1000, "1000: A9 42\n1002: 60\n");
/// assert_eq!(count, 3);
/// assert_eq!(&window[..3], &[0xA9, 0x42, 0x60]);
/// ```
pub fn load_wozmon(window: &mut [u8], base: u16, text: &str) -> usize {
    let mut stored = 0;
    for line in text.lines() {
        let Some((addr_text, bytes_text)) = line.split_once(':') else {
            continue;
        };
        let Ok(addr) = u16::from_str_radix(addr_text.trim(), 16) else {
            continue;
        };

        let mut addr = addr as usize;
        for token in bytes_text.split_whitespace() {
            let Ok(byte) = u8::from_str_radix(token, 16) else {
                break;
            };
            // Addresses below the window base or past its end are skipped.
            if let Some(offset) = addr.checked_sub(base as usize) {
                if let Some(slot) = window.get_mut(offset) {
                    *slot = byte;
                    stored += 1;
                }
            }
            addr += 1;
        }
    }
    stored
}
