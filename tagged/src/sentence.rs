//! Part-of-speech tagged sentences.

use std::iter::FromIterator;

use crate::error::SentenceError;

/// A view of one position in a `Sentence`.
///
/// The view borrows the word form and both of its tags from the
/// sentence columns.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TaggedToken<'a> {
    /// Word form or punctuation symbol.
    pub token: &'a str,

    /// Universal part-of-speech tag.
    pub ud_tag: &'a str,

    /// Penn Treebank part-of-speech tag.
    pub ptb_tag: &'a str,
}

/// A sentence annotated with two part-of-speech tag layers.
///
/// A sentence is stored as three aligned columns: the tokens, their
/// universal (UD) tags and their Penn Treebank (PTB) tags. The columns
/// always have the same length; the only ways to grow a sentence add a
/// token together with both of its tags.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Sentence {
    tokens: Vec<String>,
    ud_tags: Vec<String>,
    ptb_tags: Vec<String>,
}

impl Sentence {
    /// Construct an empty sentence.
    ///
    /// ```
    /// use tagged::Sentence;
    ///
    /// let sentence = Sentence::new();
    /// assert!(sentence.is_empty());
    /// ```
    pub fn new() -> Self {
        Sentence::default()
    }

    /// Construct a sentence from its three columns.
    ///
    /// Returns an error when the columns are not of the same length.
    pub fn from_parts(
        tokens: Vec<String>,
        ud_tags: Vec<String>,
        ptb_tags: Vec<String>,
    ) -> Result<Self, SentenceError> {
        if tokens.len() != ud_tags.len() || tokens.len() != ptb_tags.len() {
            return Err(SentenceError::LengthMismatch {
                tokens: tokens.len(),
                ud_tags: ud_tags.len(),
                ptb_tags: ptb_tags.len(),
            });
        }

        Ok(Sentence {
            tokens,
            ud_tags,
            ptb_tags,
        })
    }

    /// Add a token with its universal and PTB tags to the end of the
    /// sentence.
    pub fn push(
        &mut self,
        token: impl Into<String>,
        ud_tag: impl Into<String>,
        ptb_tag: impl Into<String>,
    ) {
        self.tokens.push(token.into());
        self.ud_tags.push(ud_tag.into());
        self.ptb_tags.push(ptb_tag.into());
    }

    /// Get the word forms.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Get the universal part-of-speech tags.
    pub fn ud_tags(&self) -> &[String] {
        &self.ud_tags
    }

    /// Get the Penn Treebank part-of-speech tags.
    pub fn ptb_tags(&self) -> &[String] {
        &self.ptb_tags
    }

    /// Get the token at position `idx` together with its tags.
    pub fn get(&self, idx: usize) -> Option<TaggedToken> {
        Some(TaggedToken {
            token: self.tokens.get(idx)?,
            ud_tag: &self.ud_tags[idx],
            ptb_tag: &self.ptb_tags[idx],
        })
    }

    /// Get an iterator over the tagged tokens of the sentence.
    ///
    /// ```
    /// use tagged::Sentence;
    ///
    /// let mut sentence = Sentence::new();
    /// sentence.push("Guerrillas", "NOUN", "NNS");
    /// sentence.push("killed", "VERB", "VBD");
    ///
    /// let ptb = sentence.iter().map(|t| t.ptb_tag).collect::<Vec<_>>();
    /// assert_eq!(ptb, ["NNS", "VBD"]);
    /// ```
    pub fn iter(&self) -> Iter {
        Iter {
            sentence: self,
            idx: 0,
        }
    }

    /// Returns `true` if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the number of tokens in the sentence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Unwrap the sentence into its token, universal tag and PTB tag
    /// columns.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<String>) {
        (self.tokens, self.ud_tags, self.ptb_tags)
    }
}

impl<S, U, P> Extend<(S, U, P)> for Sentence
where
    S: Into<String>,
    U: Into<String>,
    P: Into<String>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (S, U, P)>,
    {
        for (token, ud_tag, ptb_tag) in iter {
            self.push(token, ud_tag, ptb_tag);
        }
    }
}

impl<S, U, P> FromIterator<(S, U, P)> for Sentence
where
    S: Into<String>,
    U: Into<String>,
    P: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, U, P)>,
    {
        let mut sentence = Sentence::new();
        sentence.extend(iter);
        sentence
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = TaggedToken<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tagged tokens of a sentence.
pub struct Iter<'a> {
    sentence: &'a Sentence,
    idx: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = TaggedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.sentence.get(self.idx)?;
        self.idx += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sentence.len().saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;

    use super::{Sentence, TaggedToken};
    use crate::error::SentenceError;

    lazy_static! {
        static ref GUERRILLAS: Sentence = {
            let mut sentence = Sentence::new();
            sentence.push("Guerrillas", "NOUN", "NNS");
            sentence.push("killed", "VERB", "VBD");
            sentence.push("an", "DET", "DT");
            sentence.push("engineer", "NOUN", "NN");
            sentence
        };
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn push_keeps_columns_aligned() {
        assert_eq!(GUERRILLAS.len(), 4);
        assert_eq!(GUERRILLAS.tokens().len(), GUERRILLAS.ud_tags().len());
        assert_eq!(GUERRILLAS.tokens().len(), GUERRILLAS.ptb_tags().len());
        assert_eq!(
            GUERRILLAS.tokens(),
            strings(&["Guerrillas", "killed", "an", "engineer"]).as_slice()
        );
        assert_eq!(
            GUERRILLAS.ud_tags(),
            strings(&["NOUN", "VERB", "DET", "NOUN"]).as_slice()
        );
        assert_eq!(
            GUERRILLAS.ptb_tags(),
            strings(&["NNS", "VBD", "DT", "NN"]).as_slice()
        );
    }

    #[test]
    fn from_parts() {
        let sentence = Sentence::from_parts(
            strings(&["Guerrillas", "killed", "an", "engineer"]),
            strings(&["NOUN", "VERB", "DET", "NOUN"]),
            strings(&["NNS", "VBD", "DT", "NN"]),
        )
        .unwrap();

        assert_eq!(sentence, *GUERRILLAS);
    }

    #[test]
    fn from_parts_rejects_unaligned_columns() {
        assert_eq!(
            Sentence::from_parts(
                strings(&["Guerrillas", "killed"]),
                strings(&["NOUN"]),
                strings(&["NNS", "VBD"]),
            ),
            Err(SentenceError::LengthMismatch {
                tokens: 2,
                ud_tags: 1,
                ptb_tags: 2
            })
        );
    }

    #[test]
    fn get() {
        assert_eq!(
            GUERRILLAS.get(1),
            Some(TaggedToken {
                token: "killed",
                ud_tag: "VERB",
                ptb_tag: "VBD"
            })
        );
        assert!(GUERRILLAS.get(4).is_none());
        assert!(Sentence::new().get(0).is_none());
    }

    #[test]
    fn iter() {
        let iter = GUERRILLAS.iter();
        assert_eq!(iter.len(), 4);

        let ud_tags = iter.map(|t| t.ud_tag).collect::<Vec<_>>();
        assert_eq!(ud_tags, ["NOUN", "VERB", "DET", "NOUN"]);

        let tokens = (&*GUERRILLAS)
            .into_iter()
            .map(|t| t.token)
            .collect::<Vec<_>>();
        assert_eq!(tokens, ["Guerrillas", "killed", "an", "engineer"]);
    }

    #[test]
    fn collect_triples() {
        let sentence = vec![
            ("Guerrillas", "NOUN", "NNS"),
            ("killed", "VERB", "VBD"),
            ("an", "DET", "DT"),
            ("engineer", "NOUN", "NN"),
        ]
        .into_iter()
        .collect::<Sentence>();

        assert_eq!(sentence, *GUERRILLAS);
    }

    #[test]
    fn into_parts() {
        let (tokens, ud_tags, ptb_tags) = GUERRILLAS.clone().into_parts();
        assert_eq!(tokens, strings(&["Guerrillas", "killed", "an", "engineer"]));
        assert_eq!(ud_tags, strings(&["NOUN", "VERB", "DET", "NOUN"]));
        assert_eq!(ptb_tags, strings(&["NNS", "VBD", "DT", "NN"]));
    }
}
