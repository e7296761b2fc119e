//! Snapshot format
//!
//! Little-endian throughout:
//! - [`Header`]: 16 bytes - magic, version, flags, width, height
//! - body: one record per cell in row-major order,
//!   element id (u16), temperature (f32), color (u32)
//!
//! Loading decodes into scratch buffers and commits only after the whole
//! body was read, so a failed load never leaves a half-written grid.

use std::fmt;
use std::io::{self, Read, Write};

use crate::domain::elements::ElementId;
use crate::spatial::grid::Grid;

/// Magic bytes identifying a grid snapshot ("FPXS")
pub const MAGIC: u32 = u32::from_le_bytes(*b"FPXS");

/// Current format version
pub const VERSION: u16 = 1;

/// Bytes per cell record
pub const CELL_RECORD_SIZE: usize = 2 + 4 + 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub version: u16,
    /// Reserved, written as 0
    pub flags: u16,
    pub width: u32,
    pub height: u32,
}

impl Header {
    pub const SIZE: usize = 16;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            flags: 0,
            width,
            height,
        }
    }

    /// Check the header against the grid it is about to be loaded into
    pub fn validate(&self, width: u32, height: u32) -> Result<(), SnapshotError> {
        if self.magic != MAGIC {
            return Err(SnapshotError::BadMagic(self.magic));
        }
        if self.version > VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        if self.width != width || self.height != height {
            return Err(SnapshotError::DimensionMismatch {
                file: (self.width, self.height),
                grid: (width, height),
            });
        }
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.magic.to_le_bytes())?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.flags.to_le_bytes())?;
        writer.write_all(&self.width.to_le_bytes())?;
        writer.write_all(&self.height.to_le_bytes())?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        reader.read_exact(&mut buf)?;
        Ok(Self {
            magic: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            version: u16::from_le_bytes([buf[4], buf[5]]),
            flags: u16::from_le_bytes([buf[6], buf[7]]),
            width: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            height: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
        })
    }
}

/// Errors from loading a snapshot
#[derive(Debug)]
pub enum SnapshotError {
    Io(io::Error),
    BadMagic(u32),
    UnsupportedVersion(u16),
    DimensionMismatch { file: (u32, u32), grid: (u32, u32) },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "snapshot I/O error: {e}"),
            SnapshotError::BadMagic(m) => write!(f, "not a grid snapshot (magic 0x{m:08x})"),
            SnapshotError::UnsupportedVersion(v) => {
                write!(f, "unsupported snapshot version {v} (max {VERSION})")
            }
            SnapshotError::DimensionMismatch { file, grid } => write!(
                f,
                "snapshot is {}x{} but the grid is {}x{}",
                file.0, file.1, grid.0, grid.1
            ),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        SnapshotError::Io(e)
    }
}

/// Write header and every cell of `grid`
pub fn write_grid<W: Write>(grid: &Grid, writer: &mut W) -> Result<(), SnapshotError> {
    Header::new(grid.width(), grid.height()).write_to(writer)?;

    let mut record = [0u8; CELL_RECORD_SIZE];
    for ((&id, &temp), &color) in grid
        .types()
        .iter()
        .zip(grid.temperatures())
        .zip(grid.colors())
    {
        record[0..2].copy_from_slice(&id.to_le_bytes());
        record[2..6].copy_from_slice(&temp.to_le_bytes());
        record[6..10].copy_from_slice(&color.to_le_bytes());
        writer.write_all(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Replace every cell of `grid` with the snapshot in `reader`.
/// All touched flags are cleared on success; on error `grid` is unchanged.
pub fn read_grid<R: Read>(grid: &mut Grid, reader: &mut R) -> Result<(), SnapshotError> {
    let header = Header::read_from(reader)?;
    if let Err(e) = header.validate(grid.width(), grid.height()) {
        log::warn!("snapshot rejected: {}", e);
        return Err(e);
    }

    let size = grid.size();
    let mut types: Vec<ElementId> = Vec::with_capacity(size);
    let mut temperature: Vec<f32> = Vec::with_capacity(size);
    let mut colors: Vec<u32> = Vec::with_capacity(size);

    let mut record = [0u8; CELL_RECORD_SIZE];
    for _ in 0..size {
        reader.read_exact(&mut record)?;
        types.push(u16::from_le_bytes([record[0], record[1]]));
        temperature.push(f32::from_le_bytes([record[2], record[3], record[4], record[5]]));
        colors.push(u32::from_le_bytes([record[6], record[7], record[8], record[9]]));
    }

    grid.types = types;
    grid.temperature = temperature;
    grid.colors = colors;
    grid.touched.fill(0);
    Ok(())
}
