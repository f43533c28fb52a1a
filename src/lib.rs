//! This crate provides a windowed view on a [`Read`](std::io::Read) object. [`WindowedReader`] skips a
//! number of leading bytes and stops returning data at a fixed offset of the wrapped stream, while
//! counting how many bytes it has consumed from that stream.
//!
//! Both boundaries are absolute offsets in the wrapped stream, and `0` disables either of them:
//!
//!  - `skip` - bytes before this offset are never returned
//!  - `stop` - bytes at or after this offset are never returned, a read never crosses it
//!
//! Skipping uses a single relative seek if the wrapped [`Source`] can do that, and reads and
//! discards the leading bytes otherwise. Whether a source can seek is up to its [`Source`]
//! implementation; [`Positioned`] and [`Sequential`] declare it explicitly for any reader.
//!
//! # Reading a window
//! ```rust
//! use std::io::{Cursor, Read};
//! use window_reader::WindowedReader;
//! let mut reader = WindowedReader::new(Cursor::new(b"0123456789"), 2, 8);
//!
//! let mut buffer: [u8; 7] = [0; 7];
//!
//! /* the read is truncated at the stop boundary */
//! assert_eq!(reader.read(&mut buffer).unwrap(), 6);
//! assert_eq!(&buffer, b"234567\0");
//! assert_eq!(reader.consumed(), 8);
//!
//! /* and nothing comes after it */
//! assert_eq!(reader.read(&mut buffer).unwrap(), 0);
//! assert_eq!(reader.consumed(), 8);
//! ```
//!
//! # Skipped bytes are counted, whether they were seeked over or discarded
//! ```rust
//! # use std::io::{Cursor, Read};
//! # use window_reader::WindowedReader;
//! let mut seeking = WindowedReader::positioned(Cursor::new(b"0123456789"), 5, 0);
//! let mut discarding = WindowedReader::sequential(Cursor::new(b"0123456789"), 5, 0);
//!
//! let mut buffer: [u8; 1] = [0; 1];
//! assert_eq!(seeking.read(&mut buffer).unwrap(), 1);
//! assert_eq!(&buffer, b"5");
//! assert_eq!(discarding.read(&mut buffer).unwrap(), 1);
//! assert_eq!(&buffer, b"5");
//!
//! assert_eq!(seeking.consumed(), 6);
//! assert_eq!(discarding.consumed(), 6);
//! ```
//!
//! # Errors of the wrapped source are passed through unchanged
//! ```rust
//! # use std::io::{Error, ErrorKind, Read, Result};
//! # use window_reader::{Source, WindowedReader};
//! struct Broken;
//!
//! impl Read for Broken {
//!     fn read(&mut self, _: &mut [u8]) -> Result<usize> {
//!         Err(Error::new(ErrorKind::BrokenPipe, "gone"))
//!     }
//! }
//!
//! impl Source for Broken {}
//!
//! let mut reader = WindowedReader::new(Broken, 2, 0);
//! let err = reader.read(&mut [0; 4]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BrokenPipe);
//! assert_eq!(reader.consumed(), 0);
//! ```
mod reader;
mod source;
pub use crate::reader::WindowedReader;
pub use crate::source::{Positioned, Sequential, Source};
