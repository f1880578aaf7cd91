//! DNA/RNA base conversion.
//!
//! Conversion is a plain symbol substitution (`T` <-> `U`). Input is expected
//! to be uppercase already, which [`crate::model::Sequence`] guarantees.

/// Transcribes DNA into RNA by replacing every `T` with `U`.
pub fn dna_to_rna(dna: &str) -> String {
    dna.replace('T', "U")
}

/// Converts RNA back into DNA by replacing every `U` with `T`.
pub fn rna_to_dna(rna: &str) -> String {
    rna.replace('U', "T")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dna_to_rna() {
        assert_eq!(dna_to_rna("ATGAAATAG"), "AUGAAAUAG");
        assert_eq!(dna_to_rna("GGCC"), "GGCC");
        assert_eq!(dna_to_rna(""), "");
    }

    #[test]
    fn test_rna_to_dna() {
        assert_eq!(rna_to_dna("AUGAAAUAG"), "ATGAAATAG");
    }

    #[test]
    fn test_case_sensitive() {
        // Lowercase 't' is not a canonical base and passes through.
        assert_eq!(dna_to_rna("atg"), "atg");
        assert_eq!(rna_to_dna("aug"), "aug");
    }

    proptest! {
        #[test]
        fn prop_dna_round_trip(s in "[ATGCatgc]{0,90}") {
            let upper = s.to_uppercase();
            prop_assert_eq!(rna_to_dna(&dna_to_rna(&upper)), upper);
        }

        #[test]
        fn prop_rna_round_trip(s in "[AUGC]{0,90}") {
            prop_assert_eq!(dna_to_rna(&rna_to_dna(&s)), s);
        }
    }
}
