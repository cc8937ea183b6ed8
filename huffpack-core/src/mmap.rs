//! Memory-mapped byte source and sink.
//!
//! The codec core works on plain byte slices; this module supplies those
//! slices from files without staging them through intermediate buffers. The
//! source is a read-only mapping of known size, the sink a writable mapping
//! created at an exact target size.
//!
//! Encode and decode both compute their exact output size before writing
//! (see the codec crate), so the sink is normally sized once and never grown.
//! [`ByteSink::grow`] remaps the file at a larger size and invalidates any
//! previously obtained slice.
//!
//! # Safety
//!
//! Memory-mapped files are unsound if another process truncates the file
//! while mapped. Mappings here are private to one encode/decode call and the
//! caller is responsible for file stability, the same contract the rest of
//! the ecosystem uses.

use crate::error::Result;
use memmap2::{Mmap, MmapMut};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// A read-only memory-mapped byte source of known size.
#[derive(Debug)]
pub struct ByteSource {
    mmap: Mmap,
}

impl ByteSource {
    /// Map the file at `path` read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        // SAFETY: read-only mapping; the caller ensures the file is not
        // truncated while mapped.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap })
    }

    /// Total size of the mapped file in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Whether the mapped file has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// The full file contents as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.mmap
    }
}

/// A writable memory-mapped byte sink created at a fixed target size.
#[derive(Debug)]
pub struct ByteSink {
    file: File,
    mmap: MmapMut,
}

impl ByteSink {
    /// Create (or truncate) the file at `path` and map `size` writable bytes.
    ///
    /// The mapping starts zero-filled, which the bit packer relies on: it
    /// only ever ORs code bits into place.
    pub fn create<P: AsRef<Path>>(path: P, size: u64) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?;
        file.set_len(size)?;
        // SAFETY: freshly created file owned by this handle for the lifetime
        // of the mapping.
        let mmap = unsafe { MmapMut::map_mut(&file)? };
        Ok(Self { file, mmap })
    }

    /// Current size of the sink in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Whether the sink has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// The writable byte region.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.mmap
    }

    /// Resize the sink to `size` bytes and remap.
    ///
    /// Any slice previously obtained from [`as_mut_slice`](Self::as_mut_slice)
    /// is invalidated. New bytes are zero-filled.
    pub fn grow(&mut self, size: u64) -> Result<()> {
        self.file.set_len(size)?;
        // SAFETY: same file handle; the old mapping is dropped on assignment.
        self.mmap = unsafe { MmapMut::map_mut(&self.file)? };
        Ok(())
    }

    /// Shrink the file to its final size and flush the mapping.
    pub fn finish(mut self, final_size: u64) -> Result<()> {
        self.mmap.flush()?;
        drop(self.mmap);
        self.file.set_len(final_size)?;
        Ok(())
    }
}
