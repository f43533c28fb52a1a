use std::fs::File;
use std::io::{Cursor, Error, ErrorKind, Read, Result, Seek, SeekFrom};

/// A byte source for [`WindowedReader`](crate::WindowedReader).
///
/// Reading is mandatory. Moving forward without reading is an optional capability: the
/// default implementation of [`Source::skip_forward`] reports it as missing, in which case
/// leading bytes are read and discarded instead.
pub trait Source: Read {
    /// Moves `n` bytes forward from the current position without reading them.
    ///
    /// Returns `None` if the source cannot do this, otherwise the result of the
    /// positioning call, which is the new absolute position on success.
    fn skip_forward(&mut self, n: u64) -> Option<Result<u64>> {
        let _ = n;
        None
    }
}

/// Declares a [`Read`] as seek-incapable, even if it implements [`Seek`].
#[derive(Debug)]
pub struct Sequential<R> where R: Read {
    reader: R,
}

impl<R> Sequential<R> where R: Read {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> Read for Sequential<R> where R: Read {
    fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        self.reader.read(dst)
    }
}

impl<R> Source for Sequential<R> where R: Read {}

/// Declares a [`Read`]+[`Seek`] as seek-capable. Skipping is done with a single
/// [`SeekFrom::Current`].
#[derive(Debug)]
pub struct Positioned<R> where R: Read + Seek {
    reader: R,
}

impl<R> Positioned<R> where R: Read + Seek {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> Read for Positioned<R> where R: Read + Seek {
    fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        self.reader.read(dst)
    }
}

impl<R> Source for Positioned<R> where R: Read + Seek {
    fn skip_forward(&mut self, n: u64) -> Option<Result<u64>> {
        Some(seek_current(&mut self.reader, n))
    }
}

fn seek_current<R>(reader: &mut R, n: u64) -> Result<u64> where R: Seek {
    let offset = i64::try_from(n)
        .map_err(|_| Error::new(ErrorKind::InvalidInput, "skip distance does not fit into a seek offset"))?;
    reader.seek(SeekFrom::Current(offset))
}

impl Source for &[u8] {}

impl<T> Source for Cursor<T> where T: AsRef<[u8]> {
    fn skip_forward(&mut self, n: u64) -> Option<Result<u64>> {
        Some(seek_current(self, n))
    }
}

impl Source for File {
    fn skip_forward(&mut self, n: u64) -> Option<Result<u64>> {
        Some(seek_current(self, n))
    }
}

impl<S> Source for Box<S> where S: Source + ?Sized {
    fn skip_forward(&mut self, n: u64) -> Option<Result<u64>> {
        (**self).skip_forward(n)
    }
}

impl<S> Source for &mut S where S: Source + ?Sized {
    fn skip_forward(&mut self, n: u64) -> Option<Result<u64>> {
        (**self).skip_forward(n)
    }
}
