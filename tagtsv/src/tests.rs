use std::fs::File;
use std::io::BufReader;

use lazy_static::lazy_static;
use tagged::Sentence;

use crate::io::{ReadSentence, Reader};

lazy_static! {
    pub static ref TEST_SENTENCES: Vec<Sentence> = {
        let mut sentences = Vec::new();

        let s1 = vec![
            ("Guerrillas", "NOUN", "NNS"),
            ("killed", "VERB", "VBD"),
            ("an", "DET", "DT"),
            ("engineer", "NOUN", "NN"),
            (",", "PUNCT", ","),
            ("Asi", "PROPN", "NNP"),
            ("Ali", "PROPN", "NNP"),
            (",", "PUNCT", ","),
            ("from", "ADP", "IN"),
            ("Tikrit", "PROPN", "NNP"),
            (".", "PUNCT", "."),
        ]
        .into_iter()
        .collect::<Sentence>();
        sentences.push(s1);

        let mut s2 = Sentence::new();
        s2.push("Gilles", "PROPN", "NNP");
        s2.push("Deleuze", "PROPN", "NNP");
        s2.push("wrote", "VERB", "VBD");
        s2.push("books", "NOUN", "NNS");
        s2.push(".", "PUNCT", ".");
        sentences.push(s2);

        sentences
    };
}

pub fn read_sentences(filename: &str) -> Vec<Sentence> {
    Reader::new(BufReader::new(File::open(filename).unwrap()))
        .sentences()
        .map(|s| s.unwrap())
        .collect()
}
