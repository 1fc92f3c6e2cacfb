//! Block-oriented file-I/O port.
//!
//! A four-register command state machine that lets firmware load and
//! save host files one byte at a time — the backing store for BASIC's
//! LOAD and SAVE. The firmware spells a filename into the name buffer,
//! issues an open command, then moves bytes through the data register.

use super::Device;
use std::any::Any;
use std::fs::File;
use std::io::{Read, Write};

const REG_STATUS: u16 = 0x0;
const REG_DATA: u16 = 0x1;
const REG_NAME_INDEX: u16 = 0x2;
const REG_NAME_CHAR: u16 = 0x3;

const CMD_RESET: u8 = 0x00;
const CMD_OPEN_READ: u8 = 0x01;
const CMD_OPEN_WRITE: u8 = 0x02;
const CMD_READ: u8 = 0x03;
const CMD_WRITE: u8 = 0x04;
const CMD_CLOSE: u8 = 0x05;

/// Status bit: a file is open.
pub const STATUS_OPEN: u8 = 0x01;
/// Status bit: end of file reached on read.
pub const STATUS_EOF: u8 = 0x02;
/// Status bit: the last command failed.
pub const STATUS_ERROR: u8 = 0x04;
/// Status bit: device ready.
pub const STATUS_READY: u8 = 0x80;

const NAME_MAXLEN: usize = 256;

/// The open host file, tagged with the direction it was opened for.
enum OpenFile {
    Reader(File),
    Writer(File),
}

/// File-I/O port.
///
/// ## Register Map
///
/// | Offset | Read | Write |
/// |--------|------|-------|
/// | 0 | status | command |
/// | 1 | data | data |
/// | 2 | name index | name index |
/// | 3 | name char at index | name char; index auto-increments |
///
/// ## Commands (written to offset 0)
///
/// | Value | Command |
/// |-------|---------|
/// | 0x00 | reset: close, clear status, zero the name buffer |
/// | 0x01 | open for reading |
/// | 0x02 | open for writing |
/// | 0x03 | read one byte into DATA (EOF delivers 0 and sets EOF) |
/// | 0x04 | write DATA to the file |
/// | 0x05 | close |
///
/// Opening cuts the filename at the current index and closes any
/// previously open handle first. Failures of any kind surface only as
/// the ERROR status bit; the command always completes.
pub struct FileIo {
    file: Option<OpenFile>,
    status: u8,
    data: u8,
    name_index: u8,
    filename: [u8; NAME_MAXLEN],
}

impl FileIo {
    /// Creates the port in its reset state.
    pub fn new() -> Self {
        Self {
            file: None,
            status: STATUS_READY,
            data: 0,
            name_index: 0,
            filename: [0; NAME_MAXLEN],
        }
    }

    /// Closes any open file and clears all state except READY.
    pub fn reset(&mut self) {
        self.file = None;
        self.status = STATUS_READY;
        self.data = 0;
        self.name_index = 0;
        self.filename = [0; NAME_MAXLEN];
    }

    /// The filename as currently spelled, cut at the index (or at the
    /// first NUL, whichever comes sooner).
    fn current_name(&self) -> String {
        let spelled = &self.filename[..self.name_index as usize];
        let end = spelled.iter().position(|&b| b == 0).unwrap_or(spelled.len());
        String::from_utf8_lossy(&spelled[..end]).into_owned()
    }

    fn open_file(&mut self, for_write: bool) {
        // Any new open closes the prior handle first.
        self.file = None;
        let name = self.current_name();
        let opened = if for_write {
            File::create(&name).map(OpenFile::Writer)
        } else {
            File::open(&name).map(OpenFile::Reader)
        };
        match opened {
            Ok(handle) => {
                self.file = Some(handle);
                self.status = STATUS_READY | STATUS_OPEN;
            }
            Err(err) => {
                log::debug!("fileio: open {name:?} failed: {err}");
                self.status = STATUS_READY | STATUS_ERROR;
            }
        }
    }

    fn read_byte(&mut self) {
        match self.file.as_mut() {
            Some(OpenFile::Reader(file)) => {
                let mut buf = [0u8; 1];
                match file.read(&mut buf) {
                    Ok(0) => {
                        self.status |= STATUS_EOF;
                        self.data = 0;
                    }
                    Ok(_) => self.data = buf[0],
                    Err(err) => {
                        log::debug!("fileio: read failed: {err}");
                        self.status |= STATUS_ERROR;
                    }
                }
            }
            _ => self.status |= STATUS_ERROR,
        }
    }

    fn write_byte(&mut self) {
        match self.file.as_mut() {
            Some(OpenFile::Writer(file)) => {
                if let Err(err) = file.write_all(&[self.data]) {
                    log::debug!("fileio: write failed: {err}");
                    self.status |= STATUS_ERROR;
                }
            }
            _ => self.status |= STATUS_ERROR,
        }
    }

    fn dispatch(&mut self, command: u8) {
        match command {
            CMD_RESET => self.reset(),
            CMD_OPEN_READ => self.open_file(false),
            CMD_OPEN_WRITE => self.open_file(true),
            CMD_READ => self.read_byte(),
            CMD_WRITE => self.write_byte(),
            CMD_CLOSE => {
                self.file = None;
                self.status = STATUS_READY;
            }
            _ => {}
        }
    }
}

impl Default for FileIo {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for FileIo {
    fn read(&mut self, offset: u16) -> u8 {
        match offset {
            REG_STATUS => self.status,
            REG_DATA => self.data,
            REG_NAME_INDEX => self.name_index,
            REG_NAME_CHAR => self.filename[self.name_index as usize],
            _ => 0xFF,
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        match offset {
            REG_STATUS => self.dispatch(value),
            REG_DATA => self.data = value,
            REG_NAME_INDEX => self.name_index = value,
            REG_NAME_CHAR => {
                self.filename[self.name_index as usize] = value;
                self.name_index = self.name_index.wrapping_add(1);
            }
            _ => {}
        }
    }

    fn size(&self) -> u16 {
        16
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
