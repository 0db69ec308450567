//! Tagged corpus readers and writers.
//!
//! The format has one token per line. A token line consists of three
//! tab-separated fields: the word form, the universal part-of-speech
//! tag and the Penn Treebank part-of-speech tag. Sentences are
//! terminated by a blank line:
//!
//! ```text
//! Guerrillas	NOUN	NNS
//! killed	VERB	VBD
//!
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use itertools::Itertools;
use tagged::Sentence;

use crate::error::{Error, ParseError};

/// A trait for objects that can read tagged `Sentence`s
pub trait ReadSentence {
    /// Read a `Sentence` from this object.
    ///
    /// # Errors
    ///
    /// A call to `read_sentence` may generate an error to indicate that
    /// the operation could not be completed.
    fn read_sentence(&mut self) -> Result<Option<Sentence>, Error>;

    /// Get an iterator over the sentences in this reader.
    fn sentences(self) -> Sentences<Self>
    where
        Self: Sized,
    {
        Sentences { reader: self }
    }
}

/// A reader for tagged sentences.
///
/// Only sentences that are terminated by a blank line are returned.
/// Tokens that follow the last blank line of the input are discarded,
/// so the final sentence of a file is lost when the file does not end
/// with a blank line.
///
/// Lines may be terminated by `\n`, `\r\n` or a lone `\r`.
pub struct Reader<R> {
    read: R,
    line_no: usize,
    after_cr: bool,
}

impl<R: io::BufRead> Reader<R> {
    /// Construct a new reader from an object that implements the
    /// `io::BufRead` trait.
    pub fn new(read: R) -> Reader<R> {
        Reader {
            read,
            line_no: 0,
            after_cr: false,
        }
    }

    /// Read a line without its terminator into `line`.
    ///
    /// Returns the number of bytes consumed, which is 0 at the end of
    /// the reader.
    fn read_line(&mut self, line: &mut String) -> io::Result<usize> {
        // The `\n` of a `\r\n` pair belongs to the previous line.
        if self.after_cr {
            self.after_cr = false;
            if self.read.fill_buf()?.first() == Some(&b'\n') {
                self.read.consume(1);
            }
        }

        let mut bytes = Vec::new();
        let mut consumed = 0;

        loop {
            let (terminator, used) = {
                let available = self.read.fill_buf()?;
                if available.is_empty() {
                    break;
                }

                match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(idx) => {
                        bytes.extend_from_slice(&available[..idx]);
                        (Some(available[idx]), idx + 1)
                    }
                    None => {
                        bytes.extend_from_slice(available);
                        (None, available.len())
                    }
                }
            };

            self.read.consume(used);
            consumed += used;

            if let Some(terminator) = terminator {
                self.after_cr = terminator == b'\r';
                break;
            }
        }

        let decoded = String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        line.push_str(&decoded);

        Ok(consumed)
    }
}

impl<R: io::BufRead> IntoIterator for Reader<R> {
    type Item = Result<Sentence, Error>;
    type IntoIter = Sentences<Reader<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences()
    }
}

impl<R: io::BufRead> ReadSentence for Reader<R> {
    fn read_sentence(&mut self) -> Result<Option<Sentence>, Error> {
        let mut line = String::new();
        let mut sentence = Sentence::new();

        loop {
            line.clear();

            // End of reader. An unterminated sentence is not returned.
            if self.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.line_no += 1;

            let line = line.trim_matches(is_blank);

            // Runs of blank lines separate sentences just like a single
            // blank line does.
            if line.is_empty() {
                if sentence.is_empty() {
                    continue;
                }

                return Ok(Some(sentence));
            }

            let (token, ud_tag, ptb_tag) = parse_token_line(line, self.line_no)?;
            sentence.push(token, ud_tag, ptb_tag);
        }
    }
}

/// Whitespace, including the ASCII information separators `\x1c` to
/// `\x1f`.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn parse_token_line(line: &str, line_no: usize) -> Result<(&str, &str, &str), ParseError> {
    let fields = line.split('\t').collect::<Vec<_>>();

    match *fields.as_slice() {
        [token, ud_tag, ptb_tag] => Ok((token, ud_tag, ptb_tag)),
        _ => Err(ParseError::FieldCount {
            line: line_no,
            fields: fields.len(),
            value: line.to_owned(),
        }),
    }
}

/// An iterator over the sentences in a `Reader`.
pub struct Sentences<R>
where
    R: ReadSentence,
{
    reader: R,
}

impl<R> Iterator for Sentences<R>
where
    R: ReadSentence,
{
    type Item = Result<Sentence, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_sentence() {
            Ok(None) => None,
            Ok(Some(sent)) => Some(Ok(sent)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read all sentences from a tagged corpus file.
///
/// The file is read to completion and closed before this function
/// returns. When a line cannot be parsed, the error is returned and no
/// sentences are.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<Sentence>, Error> {
    let f = File::open(path)?;
    Reader::new(io::BufReader::new(f)).sentences().collect()
}

/// A trait for objects that can write tagged `Sentence`s.
pub trait WriteSentence {
    /// Write a sentence into this object.
    ///
    /// # Errors
    ///
    /// A call to `write_sentence` may generate an error to indicate that
    /// the operation could not be completed.
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<(), Error>;
}

/// A writer for tagged sentences.
///
/// Every sentence is followed by a blank line, including the last one,
/// so that the output can be read back by `Reader` without losing the
/// final sentence.
pub struct Writer<W> {
    write: W,
}

impl<W: io::Write> Writer<W> {
    /// Construct a new writer from an object that implements the `io::Write`
    /// trait.
    pub fn new(write: W) -> Writer<W> {
        Writer { write }
    }

    /// Borrow the embedded writer. Getting the underlying writer is often
    /// useful when the writer writes to a memory object.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str;
    ///
    /// use tagged::Sentence;
    /// use tagtsv::io::{Writer, WriteSentence};
    ///
    /// let output = Vec::new();
    /// let mut writer = Writer::new(output);
    /// let mut sent = Sentence::new();
    /// sent.push("Guerrillas", "NOUN", "NNS");
    /// sent.push("killed", "VERB", "VBD");
    ///
    /// writer.write_sentence(&sent).unwrap();
    ///
    /// assert_eq!(
    ///     str::from_utf8(writer.get_ref()).unwrap(),
    ///     "Guerrillas\tNOUN\tNNS\nkilled\tVERB\tVBD\n\n"
    /// );
    /// ```
    pub fn get_ref(&self) -> &W {
        &self.write
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W: io::Write> WriteSentence for Writer<W> {
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<(), Error> {
        for token in sentence {
            writeln!(
                self.write,
                "{}",
                [token.token, token.ud_tag, token.ptb_tag].iter().join("\t")
            )?;
        }

        writeln!(self.write)?;

        Ok(())
    }
}
