use crate::Analysis;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Renders an [`Analysis`] with each word's score hanging under the token.
//
// good  good  film  bad
// ╰──╯ 0.667
//       ╰──╯ 0.667
//             ╰──╯ 0.500
//                   ╰─╯ 0.333
// sentence 0: 1.000 "Good good film"
// sentence 1: 0.000 "Bad"
// score: 1.000
pub struct AnalysisDisplay<'a> {
    analysis: &'a Analysis,
    precision: usize,
}

impl<'a> AnalysisDisplay<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        AnalysisDisplay {
            analysis,
            precision: 3,
        }
    }

    /// Digits after the decimal point for every score.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl<'a> std::fmt::Display for AnalysisDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let precision = self.precision;

        let mut token_starts = Vec::with_capacity(self.analysis.words.len());
        let mut token_ends = Vec::with_capacity(self.analysis.words.len());
        let mut opening_line = String::new();
        for (idx, word) in self.analysis.words.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_starts.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&word.word);
            token_ends.push(UnicodeWidthStr::width(&*opening_line));
        }
        f.write_str(&opening_line)?;

        for (idx, word) in self.analysis.words.iter().enumerate() {
            f.write_char('\n')?;

            let start = token_starts[idx];
            let end = token_ends[idx];
            for _ in 0..start {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in (start + 1)..end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end - start > 1 {
                f.write_char('╯')?;
            }

            write!(f, " {:.*}", precision, word.score)?;
        }

        for (idx, sentence) in self.analysis.sentences.iter().enumerate() {
            write!(
                f,
                "\nsentence {}: {:.*} {:?}",
                idx, precision, sentence.score, sentence.sentence
            )?;
        }

        if let Some(language) = self.analysis.language {
            write!(f, "\nlanguage: {}", language.code())?;
        }

        write!(f, "\nscore: {:.*}", precision, self.analysis.score)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Label, Scorer, Trainer};

    #[test]
    fn test_display_words_sentences_and_score() {
        let mut trainer = Trainer::new();
        trainer.ingest("good film", Label::Positive);
        trainer.ingest("bad film", Label::Negative);
        let model = trainer.finish().unwrap();
        let scorer = Scorer::new(&model).unwrap();

        let analysis = scorer.analyze("Good good film. Bad!");

        insta::assert_snapshot!(analysis.display(), @r###"
        good  good  film  bad
        ╰──╯ 0.667
              ╰──╯ 0.667
                    ╰──╯ 0.500
                          ╰─╯ 0.333
        sentence 0: 1.000 "Good good film"
        sentence 1: 0.000 "Bad"
        score: 1.000
        "###);
    }

    #[test]
    fn test_display_single_char_tokens_and_precision() {
        let mut trainer = Trainer::new();
        trainer.ingest("good", Label::Positive);
        trainer.ingest("bad", Label::Negative);
        let model = trainer.finish().unwrap();
        let scorer = Scorer::new(&model).unwrap();

        let analysis = scorer.analyze("a ok");

        insta::assert_snapshot!(analysis.display().with_precision(1), @r###"
        a  ok
        ╰ 0.5
           ╰╯ 0.5
        score: 0.0
        "###);
    }
}
