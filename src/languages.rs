//! Languages retained from the raw sentence corpus
//!
//! The raw sentence file covers several hundred languages; partitioning only
//! keeps the fixed set below. A few of those are additionally marked
//! restricted: they stay available as sentence partitions but are excluded
//! from n-gram statistics.

/// What we know about one language of the sentence corpus
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Language {
    /// Three-letter code, as in the raw sentence file
    pub code: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// Excluded from n-gram statistics
    ///
    /// The frequency engine splits sentences on spaces, which is meaningless
    /// for languages whose script does not delimit words with spaces.
    pub restricted: bool,
}

/// Every language retained during corpus partitioning
pub fn all() -> &'static [Language] {
    &[
        Language {
            code: "eng",
            name: "English",
            restricted: false,
        },
        Language {
            code: "rus",
            name: "Russian",
            restricted: false,
        },
        Language {
            code: "ita",
            name: "Italian",
            restricted: false,
        },
        Language {
            code: "tur",
            name: "Turkish",
            restricted: false,
        },
        Language {
            code: "fra",
            name: "French",
            restricted: false,
        },
        Language {
            code: "por",
            name: "Portuguese",
            restricted: false,
        },
        Language {
            code: "spa",
            name: "Spanish",
            restricted: false,
        },
        Language {
            code: "hun",
            name: "Hungarian",
            restricted: false,
        },
        Language {
            code: "jpn",
            name: "Japanese",
            restricted: true,
        },
        Language {
            code: "fin",
            name: "Finnish",
            restricted: false,
        },
        Language {
            code: "cmn",
            name: "Mandarin Chinese",
            restricted: true,
        },
        Language {
            code: "ell",
            name: "Greek",
            restricted: false,
        },
        Language {
            code: "vie",
            name: "Vietnamese",
            restricted: false,
        },
        Language {
            code: "isl",
            name: "Icelandic",
            restricted: false,
        },
        Language {
            code: "kor",
            name: "Korean",
            restricted: true,
        },
        Language {
            code: "deu",
            name: "German",
            restricted: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_consistent() {
        let languages = all();
        assert_eq!(languages.len(), 16);
        assert_eq!(
            languages.iter().filter(|language| language.restricted).count(),
            3
        );
        for language in languages {
            assert_eq!(language.code.len(), 3);
            assert_eq!(
                languages
                    .iter()
                    .filter(|other| other.code == language.code)
                    .count(),
                1
            );
        }
    }
}
