use std::io::{Read, Result, Seek};

use log::{debug, trace};

use crate::source::{Positioned, Sequential, Source};

#[derive(Debug)]
pub struct WindowedReader<S> where S: Source {
    inner: S,
    skip: u64,
    stop: u64,
    cur: u64,
}

impl<S> WindowedReader<S> where S: Source {
    /// Creates a new WindowedReader which exposes the bytes of `inner` between `skip` and `stop`.
    ///
    ///  - `inner` - Source which has to be wrapped. It must not be read by anyone else afterwards.
    ///  - `skip` - Number of leading bytes to discard. `0` disables skipping.
    ///  - `stop` - Absolute offset in `inner` after which nothing is returned anymore. `0` disables the limit,
    ///    so offset `0` can never be used as a stop point.
    pub fn new(inner: S, skip: u64, stop: u64) -> Self {
        Self {
            inner,
            skip,
            stop,
            cur: 0,
        }
    }

    /// Returns the number of bytes consumed from the wrapped source so far, skipped bytes included.
    pub fn consumed(&self) -> u64 {
        self.cur
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn stop(&self) -> u64 {
        self.stop
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Reading from the returned source directly makes [`WindowedReader::consumed`] wrong.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn stop_reached(&self) -> bool {
        self.stop != 0 && self.cur >= self.stop
    }

    /// moves `cur` up to the skip boundary, using `dst` as scratch space if the source cannot seek.
    /// Returns `false` if the source did not deliver enough bytes to get there.
    fn skip_leading(&mut self, dst: &mut [u8]) -> Result<bool> {
        if let Some(result) = self.inner.skip_forward(self.skip - self.cur) {
            let position = result?;
            trace!("seeked over {} bytes, source is at {}", self.skip - self.cur, position);
            self.cur = self.skip;
            return Ok(true);
        }

        while self.cur < self.skip {
            let remaining = self.skip - self.cur;
            let len = if remaining < dst.len() as u64 { remaining as usize } else { dst.len() };
            let bytes = self.inner.read(&mut dst[..len])?;
            if bytes == 0 {
                debug!("discarding stopped at {} of {} bytes", self.cur, self.skip);
                return Ok(false);
            }
            self.cur += bytes as u64;
        }
        trace!("discarded {} bytes", self.skip);
        Ok(true)
    }
}

impl<R> WindowedReader<Sequential<R>> where R: Read {
    /// Creates a WindowedReader which always skips by reading and discarding, even if `reader` could seek.
    pub fn sequential(reader: R, skip: u64, stop: u64) -> Self {
        Self::new(Sequential::new(reader), skip, stop)
    }
}

impl<R> WindowedReader<Positioned<R>> where R: Read + Seek {
    /// Creates a WindowedReader which skips with a single relative seek.
    pub fn positioned(reader: R, skip: u64, stop: u64) -> Self {
        Self::new(Positioned::new(reader), skip, stop)
    }
}

impl<S> Read for WindowedReader<S> where S: Source {
    fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        if self.stop_reached() {
            return Ok(0);
        }

        if self.skip != 0 && self.cur < self.skip && !self.skip_leading(dst)? {
            return Ok(0);
        }

        let mut len = dst.len();
        if self.stop != 0 {
            // a skip boundary behind the stop boundary ends the window right away
            if self.cur >= self.stop {
                return Ok(0);
            }
            let left = self.stop - self.cur;
            if left < len as u64 {
                trace!("truncating read of {} bytes to {}", len, left);
                len = left as usize;
            }
        }

        let bytes = self.inner.read(&mut dst[..len])?;
        self.cur += bytes as u64;
        Ok(bytes)
    }
}
