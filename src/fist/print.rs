//! Writing list elements to a sink.

use std::io::{self, Write};

use crate::{Fist, Result};

/// Delimiter used by [`Fist::print_stdout`] and [`Fist::println_stdout`].
pub const DEFAULT_DELIMITER: &str = " ";

impl Fist {
    /// Writes the elements to `sink`, separated by `delimiter`.
    ///
    /// Elements use their `Display` form. Nothing is written for an empty
    /// list. Returns the list itself so calls can be chained.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a pending map, or [`Error::Io`] if
    /// the sink fails. Elements before the failure have already been written.
    ///
    /// [`Error::Io`]: crate::Error::Io
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::fist;
    ///
    /// let mut sink = Vec::new();
    /// fist![1, 2, 3].print(&mut sink, ", ").unwrap();
    /// assert_eq!(String::from_utf8(sink).unwrap(), "1, 2, 3");
    /// ```
    pub fn print<W: Write + ?Sized>(&self, sink: &mut W, delimiter: &str) -> Result<&Self> {
        self.write_elements(sink, delimiter)?;
        Ok(self)
    }

    /// Like [`Fist::print`], followed by a newline.
    ///
    /// The newline is written even for an empty list.
    ///
    /// # Errors
    ///
    /// Same as [`Fist::print`].
    pub fn println<W: Write + ?Sized>(&self, sink: &mut W, delimiter: &str) -> Result<&Self> {
        self.write_elements(sink, delimiter)?;
        sink.write_all(b"\n")?;
        Ok(self)
    }

    /// [`Fist::print`] to standard output with [`DEFAULT_DELIMITER`].
    ///
    /// # Errors
    ///
    /// Same as [`Fist::print`].
    pub fn print_stdout(&self) -> Result<&Self> {
        let mut stdout = io::stdout().lock();
        self.print(&mut stdout, DEFAULT_DELIMITER)?;
        stdout.flush()?;
        Ok(self)
    }

    /// [`Fist::println`] to standard output with [`DEFAULT_DELIMITER`].
    ///
    /// # Errors
    ///
    /// Same as [`Fist::print`].
    pub fn println_stdout(&self) -> Result<&Self> {
        let mut stdout = io::stdout().lock();
        self.println(&mut stdout, DEFAULT_DELIMITER)?;
        stdout.flush()?;
        Ok(self)
    }

    fn write_elements<W: Write + ?Sized>(&self, sink: &mut W, delimiter: &str) -> Result<()> {
        tracing::debug!(delimiter, "printing list");
        for (index, element) in self.iter().enumerate() {
            let element = element?;
            if index > 0 {
                sink.write_all(delimiter.as_bytes())?;
            }
            write!(sink, "{element}")?;
        }
        Ok(())
    }
}
